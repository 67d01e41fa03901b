//! The response contract between Prewarn and the model.
//!
//! Two views of the same shape:
//! - [`response_schema`] is sent to Gemini as `generationConfig.responseSchema`
//!   (the OpenAPI subset Gemini understands).
//! - [`assessment_json_schema`] is the JSON Schema generated from
//!   [`RiskAssessment`] and used to validate what comes back.

use std::sync::LazyLock;

use prewarn_core::RiskAssessment;
use schemars::schema_for;
use serde_json::{Value, json};

use crate::error::PredictError;

static ASSESSMENT_VALIDATOR: LazyLock<Result<jsonschema::Validator, String>> =
    LazyLock::new(|| {
        let schema = assessment_json_schema().map_err(|e| e.to_string())?;
        jsonschema::validator_for(&schema).map_err(|e| e.to_string())
    });

/// Gemini `responseSchema` for a risk assessment.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "riskLevel": {
                "type": "STRING",
                "enum": ["safe", "warning", "critical"]
            },
            "predictionText": {
                "type": "STRING",
                "description": "A smart description of the current trajectory (e.g. you are heading towards overspending your budget)"
            },
            "advice": {
                "type": "STRING",
                "description": "Practical advice to change course before it is too late"
            },
            "projectedOutcome": {
                "type": "STRING",
                "description": "What happens if the user keeps going this way?"
            }
        },
        "required": ["riskLevel", "predictionText", "advice", "projectedOutcome"],
        "propertyOrdering": ["riskLevel", "predictionText", "advice", "projectedOutcome"]
    })
}

/// JSON Schema for [`RiskAssessment`].
///
/// # Errors
///
/// Returns an error if the generated schema cannot be converted to a JSON value.
pub fn assessment_json_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schema_for!(RiskAssessment))
}

/// Parse model output text into a validated [`RiskAssessment`].
///
/// # Errors
///
/// Returns [`PredictError::Parse`] if `text` is not JSON and
/// [`PredictError::SchemaViolation`] if it does not match the schema.
pub fn parse_assessment(text: &str) -> Result<RiskAssessment, PredictError> {
    let value: Value =
        serde_json::from_str(text.trim()).map_err(|e| PredictError::Parse(e.to_string()))?;

    let validator = ASSESSMENT_VALIDATOR
        .as_ref()
        .map_err(|e| PredictError::Parse(format!("invalid assessment schema: {e}")))?;
    let errors: Vec<String> = validator.iter_errors(&value).map(|e| e.to_string()).collect();
    if !errors.is_empty() {
        return Err(PredictError::SchemaViolation { errors });
    }

    serde_json::from_value(value).map_err(|e| PredictError::Parse(e.to_string()))
}
