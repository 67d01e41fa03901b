//! CLI response types returned as JSON by `prewarn` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{LogEntry, RiskPrediction};
use crate::enums::HabitCategory;

/// Response from `prewarn log add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogAddResponse {
    pub entry: LogEntry,
    pub prediction: Option<RiskPrediction>,
}

/// Response from `prewarn log list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogListResponse {
    pub entries: Vec<LogEntry>,
    pub total: usize,
}

/// Response from `prewarn log delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogDeleteResponse {
    pub deleted: LogEntry,
}

/// Response from `prewarn predict`, in the order categories were given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PredictResponse {
    pub predictions: Vec<RiskPrediction>,
}

/// One row of `prewarn categories`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: HabitCategory,
    pub label: String,
    pub icon: String,
    pub unit: String,
    pub placeholder: String,
}

impl From<HabitCategory> for CategoryInfo {
    fn from(category: HabitCategory) -> Self {
        let meta = category.meta();
        Self {
            key: category,
            label: meta.label.to_string(),
            icon: meta.icon.to_string(),
            unit: meta.unit.to_string(),
            placeholder: meta.placeholder.to_string(),
        }
    }
}

/// One card of the dashboard grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryCard {
    pub category: HabitCategory,
    pub label: String,
    pub icon: String,
    pub unit: String,
    /// Number of entries logged for this category.
    pub entries: usize,
    /// Most recent value, if any.
    pub latest_value: Option<f64>,
    /// A forecast request for this category is in flight.
    #[serde(default)]
    pub loading: bool,
    /// Latest prediction. `None` when nothing was requested.
    pub prediction: Option<RiskPrediction>,
}

/// Response from `prewarn dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardResponse {
    pub cards: Vec<CategoryCard>,
    /// Predictions whose level is not `safe`.
    pub alerts: Vec<RiskPrediction>,
    /// Most recent entries across all categories, newest first.
    pub recent: Vec<LogEntry>,
    pub total_entries: usize,
}
