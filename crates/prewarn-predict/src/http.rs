//! Mapping of Gemini error responses onto [`PredictError`].
//!
//! Gemini reports failures as `{"error": {"code", "message", "status",
//! "details"}}`. Quota failures carry a `google.rpc.RetryInfo` detail whose
//! `retryDelay` (e.g. `"7s"`) is used when no `Retry-After` header is sent.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::PredictError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorDetail {
    #[serde(default)]
    retry_delay: Option<String>,
}

impl ApiErrorBody {
    fn retry_delay_secs(&self) -> Option<u64> {
        self.details
            .iter()
            .filter_map(|detail| detail.retry_delay.as_deref())
            .find_map(parse_retry_delay)
    }

    /// `RESOURCE_EXHAUSTED: Quota exceeded`, or just the message.
    fn summary(self) -> Option<String> {
        match (self.status.is_empty(), self.message.is_empty()) {
            (_, true) => None,
            (true, false) => Some(self.message),
            (false, false) => Some(format!("{}: {}", self.status, self.message)),
        }
    }
}

/// Pass successful responses through; turn everything else into a typed error.
///
/// A 429 becomes [`PredictError::RateLimited`]. Any other failure becomes
/// [`PredictError::Api`] carrying Gemini's own error message when the body has
/// one, else the raw body, else the status reason.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, PredictError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let header_delay = retry_after_header(&resp);
    let body = resp.text().await.unwrap_or_default();
    let error = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .map(|envelope| envelope.error);

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = header_delay
            .or_else(|| error.as_ref().and_then(ApiErrorBody::retry_delay_secs))
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Err(PredictError::RateLimited { retry_after_secs });
    }

    let message = error
        .and_then(ApiErrorBody::summary)
        .or_else(|| Some(body.trim().to_string()).filter(|raw| !raw.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
    Err(PredictError::Api {
        status: status.as_u16(),
        message,
    })
}

fn retry_after_header(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// `"7s"` → 7, `"0.25s"` → 1. Fractions round up.
fn parse_retry_delay(delay: &str) -> Option<u64> {
    let secs = delay.trim().strip_suffix('s')?;
    let (whole, fraction) = secs.split_once('.').unwrap_or((secs, ""));
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole = if whole.is_empty() { 0 } else { whole.parse::<u64>().ok()? };
    Some(whole + u64::from(fraction.bytes().any(|b| b != b'0')))
}
