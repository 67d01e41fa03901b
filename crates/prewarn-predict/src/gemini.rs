//! Gemini `generateContent` client.

use std::time::Duration;

use prewarn_config::GeminiConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::PredictError, http::check_response};

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client for `model` at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, PredictError> {
        let mut builder = reqwest::Client::builder().user_agent("prewarn/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from config, resolving the API key from the
    /// environment when the config has none.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::NotConfigured`] when no API key is available.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, PredictError> {
        let api_key = config
            .resolved_api_key()
            .ok_or(PredictError::NotConfigured)?;
        Self::new(
            api_key,
            config.model.clone(),
            &config.base_url,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// Model name requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        )
    }

    /// Send one structured-output request and return the candidate text.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError`] if the request fails, the API returns a
    /// non-success status, or the response carries no text.
    pub async fn generate_json(
        &self,
        system_instruction: &str,
        prompt: &str,
        response_schema: Value,
    ) -> Result<String, PredictError> {
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        };

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: GenerateResponse = resp.json().await?;
        data.into_text().ok_or(PredictError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_joins_base_and_model() {
        let client =
            GeminiClient::new("key", "gemini-3-flash-preview", "http://127.0.0.1:9/", None)
                .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn from_config_uses_configured_key() {
        let config = GeminiConfig {
            api_key: "secret".into(),
            ..GeminiConfig::default()
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "gemini-3-flash-preview");
    }

    #[test]
    fn request_body_uses_camel_case_fields() {
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "sys" }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: serde_json::json!({"type": "OBJECT"}),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn response_text_concatenates_parts() {
        let data: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(data.into_text().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let data: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(data.into_text().is_none());

        let data: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(data.into_text().is_none());
    }
}
