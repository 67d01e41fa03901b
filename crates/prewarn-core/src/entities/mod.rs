//! Entity structs for Prewarn domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! persistence and schema validation.

mod log_entry;
mod prediction;

pub use log_entry::LogEntry;
pub use prediction::{RiskAssessment, RiskPrediction};
