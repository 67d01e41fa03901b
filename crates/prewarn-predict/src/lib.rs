//! # prewarn-predict
//!
//! Risk forecasts for Prewarn habit categories.
//!
//! A [`Predictor`] sends the most recent entries of a category to Gemini with
//! a fixed structured-output schema and binds the answer to the category.
//! [`Predictor::predict`] never fails: any problem along the way yields
//! [`RiskPrediction::fallback`] and a `warn` log line.

mod board;
mod error;
mod gemini;
mod http;
pub mod prompt;
pub mod schema;

pub use board::{PredictionBoard, Slot};
pub use error::PredictError;
pub use gemini::GeminiClient;
pub use prompt::{PROMPT_WINDOW, SYSTEM_INSTRUCTION, build_prompt};

use futures::future::join_all;
use prewarn_config::GeminiConfig;
use prewarn_core::{HabitCategory, LogEntry, RiskPrediction};

/// Requests forecasts from the model, or answers offline with fallbacks.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    client: Option<GeminiClient>,
}

impl Predictor {
    #[must_use]
    pub const fn new(client: GeminiClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// A predictor with no client. Every prediction is the fallback.
    #[must_use]
    pub const fn offline() -> Self {
        Self { client: None }
    }

    /// Build a predictor from config. A missing API key yields an offline
    /// predictor rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, PredictError> {
        match GeminiClient::from_config(config) {
            Ok(client) => Ok(Self::new(client)),
            Err(PredictError::NotConfigured) => {
                tracing::debug!("no Gemini API key; predictions will use the safe fallback");
                Ok(Self::offline())
            }
            Err(e) => Err(e),
        }
    }

    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.client.is_some()
    }

    /// Ask the model for a forecast of `category`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError`] if no client is configured, the request
    /// fails, or the response is not a valid risk assessment.
    pub async fn try_predict(
        &self,
        category: HabitCategory,
        logs: &[LogEntry],
    ) -> Result<RiskPrediction, PredictError> {
        let client = self.client.as_ref().ok_or(PredictError::NotConfigured)?;
        let prompt = build_prompt(category, logs);
        tracing::debug!(%category, model = client.model(), "requesting risk forecast");

        let text = client
            .generate_json(SYSTEM_INSTRUCTION, &prompt, schema::response_schema())
            .await?;
        let assessment = schema::parse_assessment(&text)?;
        Ok(RiskPrediction::from_assessment(category, assessment))
    }

    /// Forecast `category`, degrading to the safe fallback on any failure.
    pub async fn predict(&self, category: HabitCategory, logs: &[LogEntry]) -> RiskPrediction {
        match self.try_predict(category, logs).await {
            Ok(prediction) => prediction,
            Err(e) => {
                tracing::warn!(%category, %e, "risk forecast failed; using safe fallback");
                RiskPrediction::fallback(category)
            }
        }
    }

    /// Forecast several categories concurrently. Results keep the order of
    /// `categories`.
    pub async fn predict_many(
        &self,
        categories: &[HabitCategory],
        logs: &[LogEntry],
    ) -> Vec<RiskPrediction> {
        join_all(
            categories
                .iter()
                .map(|category| self.predict(*category, logs)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn offline_try_predict_is_not_configured() {
        let predictor = Predictor::offline();
        assert!(!predictor.is_online());
        let err = predictor
            .try_predict(HabitCategory::Sleep, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, PredictError::NotConfigured));
    }

    #[tokio::test]
    async fn offline_predict_is_fallback() {
        let prediction = Predictor::offline()
            .predict(HabitCategory::Finance, &[])
            .await;
        assert_eq!(prediction, RiskPrediction::fallback(HabitCategory::Finance));
    }

    #[tokio::test]
    async fn predict_many_keeps_category_order() {
        let categories = [
            HabitCategory::Driving,
            HabitCategory::Finance,
            HabitCategory::Screen,
        ];
        let predictions = Predictor::offline().predict_many(&categories, &[]).await;
        let order: Vec<HabitCategory> = predictions.iter().map(|p| p.category).collect();
        assert_eq!(order, categories.to_vec());
    }

    #[test]
    fn configured_key_makes_predictor_online() {
        let config = GeminiConfig {
            api_key: "k".into(),
            ..GeminiConfig::default()
        };
        assert!(Predictor::from_config(&config).unwrap().is_online());
    }
}
