//! Gemini (generative AI) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variables consulted, in order, when `api_key` is empty.
pub const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key for the Generative Language API.
    #[serde(default)]
    pub api_key: String,

    /// Model used for risk forecasts.
    #[serde(default = "default_model")]
    pub model: String,

    /// API origin. Overridable for proxies and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional request timeout in seconds. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is set in the config itself.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The API key to use: the configured key, else the first non-empty
    /// variable from [`API_KEY_FALLBACK_VARS`].
    #[must_use]
    pub fn resolved_api_key(&self) -> Option<String> {
        if self.is_configured() {
            return Some(self.api_key.trim().to_string());
        }
        API_KEY_FALLBACK_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }

    /// Check field values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty model name, a base
    /// URL without an `http(s)://` scheme, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gemini.model".into(),
                reason: "model name must not be empty".into(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "gemini.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "timeout must be at least 1 second; omit it to wait indefinitely".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GeminiConfig::default();
        assert!(!config.is_configured());
        assert!(config.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn configured_when_key_set() {
        let config = GeminiConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.resolved_api_key().as_deref(), Some("AIza-test"));
    }

    #[test]
    fn falls_back_to_gemini_api_key_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "from-gemini-env");
            jail.set_env("API_KEY", "from-generic-env");
            let config = GeminiConfig::default();
            assert_eq!(config.resolved_api_key().as_deref(), Some("from-gemini-env"));
            Ok(())
        });
    }

    #[test]
    fn falls_back_to_generic_api_key_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GEMINI_API_KEY", "");
            jail.set_env("API_KEY", "from-generic-env");
            let config = GeminiConfig::default();
            assert_eq!(config.resolved_api_key().as_deref(), Some("from-generic-env"));
            Ok(())
        });
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = GeminiConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.base_url"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = GeminiConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
