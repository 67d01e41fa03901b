//! Habit categories, their display metadata, and risk levels.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// HabitCategory
// ---------------------------------------------------------------------------

/// One of the fixed life domains Prewarn tracks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HabitCategory {
    Finance,
    Sleep,
    Screen,
    Food,
    Driving,
}

/// Display metadata for a habit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub icon: &'static str,
    pub unit: &'static str,
    pub placeholder: &'static str,
}

impl HabitCategory {
    /// Every category, in dashboard order.
    pub const ALL: [Self; 5] = [
        Self::Finance,
        Self::Sleep,
        Self::Screen,
        Self::Food,
        Self::Driving,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Sleep => "sleep",
            Self::Screen => "screen",
            Self::Food => "food",
            Self::Driving => "driving",
        }
    }

    /// Label, icon, unit, and input placeholder for this category.
    #[must_use]
    pub const fn meta(self) -> CategoryMeta {
        match self {
            Self::Finance => CategoryMeta {
                label: "Spending",
                icon: "💰",
                unit: "SAR",
                placeholder: "How much did you spend?",
            },
            Self::Sleep => CategoryMeta {
                label: "Sleep",
                icon: "💤",
                unit: "hours",
                placeholder: "How many hours did you sleep?",
            },
            Self::Screen => CategoryMeta {
                label: "Screen time",
                icon: "📱",
                unit: "minutes",
                placeholder: "How long were you on screens?",
            },
            Self::Food => CategoryMeta {
                label: "Food",
                icon: "🥗",
                unit: "kcal",
                placeholder: "How many calories?",
            },
            Self::Driving => CategoryMeta {
                label: "Driving",
                icon: "🚗",
                unit: "km",
                placeholder: "How many kilometres did you drive?",
            },
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitCategory {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                CoreError::Validation(format!(
                    "unknown category '{raw}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Coarse severity returned by the forecasting model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Warning,
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Whether this level should be surfaced as an active alert.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        !matches!(self, Self::Safe)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
