use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{HabitCategory, RiskLevel};

const FALLBACK_PREDICTION_TEXT: &str = "Current data points to relative stability.";
const FALLBACK_ADVICE: &str = "Keep monitoring your habits.";
const FALLBACK_OUTCOME: &str = "Overall stability";

/// The object the forecasting model must return.
///
/// Field names are camelCase on the wire. This type is the source of the JSON
/// Schema used to validate model output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Severity of the projected trajectory.
    pub risk_level: RiskLevel,
    /// Short description of where the current trend is heading.
    pub prediction_text: String,
    /// Practical advice to change course in time.
    pub advice: String,
    /// What happens if the user keeps going this way.
    pub projected_outcome: String,
}

/// A model assessment bound to the category it was requested for.
///
/// Replaced wholesale on every new request for the category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskPrediction {
    pub category: HabitCategory,
    pub risk_level: RiskLevel,
    pub prediction_text: String,
    pub advice: String,
    pub projected_outcome: String,
}

impl RiskPrediction {
    #[must_use]
    pub fn from_assessment(category: HabitCategory, assessment: RiskAssessment) -> Self {
        Self {
            category,
            risk_level: assessment.risk_level,
            prediction_text: assessment.prediction_text,
            advice: assessment.advice,
            projected_outcome: assessment.projected_outcome,
        }
    }

    /// The fixed `safe` prediction used whenever the model cannot be reached
    /// or returns something unusable.
    #[must_use]
    pub fn fallback(category: HabitCategory) -> Self {
        Self {
            category,
            risk_level: RiskLevel::Safe,
            prediction_text: FALLBACK_PREDICTION_TEXT.to_string(),
            advice: FALLBACK_ADVICE.to_string(),
            projected_outcome: FALLBACK_OUTCOME.to_string(),
        }
    }

    #[must_use]
    pub const fn is_alert(&self) -> bool {
        self.risk_level.is_alert()
    }
}
