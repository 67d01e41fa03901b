//! Prediction error types.
//!
//! None of these reach the user: [`crate::Predictor::predict`] turns every one
//! of them into the safe fallback prediction.

use thiserror::Error;

/// Errors that can occur while asking the model for a forecast.
#[derive(Debug, Error)]
pub enum PredictError {
    /// No API key is available, so no request can be made.
    #[error("Gemini API key is not configured")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked us to wait.
        retry_after_secs: u64,
    },

    /// The response carried no candidate text.
    #[error("model returned no content")]
    EmptyResponse,

    /// The candidate text was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The JSON did not match the risk assessment schema.
    #[error("response does not match schema: {errors:?}")]
    SchemaViolation {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },
}
