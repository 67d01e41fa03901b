//! Per-category prediction state for the dashboard.

use std::collections::BTreeMap;

use futures::stream::{FuturesUnordered, StreamExt};
use prewarn_core::{HabitCategory, LogEntry, RiskPrediction};

use crate::Predictor;

/// State of one category's forecast.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot {
    /// Never requested.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest prediction.
    Ready(RiskPrediction),
}

/// Latest prediction and loading flag for each category.
#[derive(Debug, Clone, Default)]
pub struct PredictionBoard {
    slots: BTreeMap<HabitCategory, Slot>,
}

impl PredictionBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slot(&self, category: HabitCategory) -> &Slot {
        self.slots.get(&category).unwrap_or(&Slot::Idle)
    }

    /// Mark `category` as loading. Calling it twice is allowed.
    pub fn begin(&mut self, category: HabitCategory) {
        self.slots.insert(category, Slot::Loading);
    }

    /// Store `prediction`, replacing whatever its category held.
    pub fn finish(&mut self, prediction: RiskPrediction) {
        self.slots
            .insert(prediction.category, Slot::Ready(prediction));
    }

    #[must_use]
    pub fn is_loading(&self, category: HabitCategory) -> bool {
        matches!(self.slot(category), Slot::Loading)
    }

    #[must_use]
    pub fn prediction(&self, category: HabitCategory) -> Option<&RiskPrediction> {
        match self.slot(category) {
            Slot::Ready(prediction) => Some(prediction),
            Slot::Idle | Slot::Loading => None,
        }
    }

    /// Ready predictions whose level is not safe, in category order.
    #[must_use]
    pub fn alerts(&self) -> Vec<&RiskPrediction> {
        HabitCategory::ALL
            .iter()
            .filter_map(|category| self.prediction(*category))
            .filter(|prediction| prediction.is_alert())
            .collect()
    }

    /// Request fresh predictions for `categories` and store the results,
    /// calling `on_ready` as each one arrives. Requests run concurrently and
    /// finish in any order.
    pub async fn refresh_with<F>(
        &mut self,
        predictor: &Predictor,
        categories: &[HabitCategory],
        logs: &[LogEntry],
        mut on_ready: F,
    ) where
        F: FnMut(&RiskPrediction),
    {
        for category in categories {
            self.begin(*category);
        }
        let mut pending: FuturesUnordered<_> = categories
            .iter()
            .map(|category| predictor.predict(*category, logs))
            .collect();
        while let Some(prediction) = pending.next().await {
            on_ready(&prediction);
            self.finish(prediction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prewarn_core::RiskLevel;

    fn prediction(category: HabitCategory, risk_level: RiskLevel) -> RiskPrediction {
        RiskPrediction {
            category,
            risk_level,
            prediction_text: format!("{category} trend"),
            advice: "adjust".into(),
            projected_outcome: "outcome".into(),
        }
    }

    #[test]
    fn unknown_category_is_idle() {
        let board = PredictionBoard::new();
        assert_eq!(board.slot(HabitCategory::Food), &Slot::Idle);
        assert!(!board.is_loading(HabitCategory::Food));
        assert!(board.prediction(HabitCategory::Food).is_none());
    }

    #[test]
    fn begin_then_finish_replaces_slot() {
        let mut board = PredictionBoard::new();
        board.begin(HabitCategory::Sleep);
        board.begin(HabitCategory::Sleep);
        assert!(board.is_loading(HabitCategory::Sleep));

        let ready = prediction(HabitCategory::Sleep, RiskLevel::Warning);
        board.finish(ready.clone());
        assert!(!board.is_loading(HabitCategory::Sleep));
        assert_eq!(board.prediction(HabitCategory::Sleep), Some(&ready));
    }

    #[test]
    fn alerts_skip_safe_and_follow_category_order() {
        let mut board = PredictionBoard::new();
        board.finish(prediction(HabitCategory::Driving, RiskLevel::Critical));
        board.finish(prediction(HabitCategory::Sleep, RiskLevel::Safe));
        board.finish(prediction(HabitCategory::Finance, RiskLevel::Warning));
        board.begin(HabitCategory::Screen);

        let alerts: Vec<HabitCategory> = board.alerts().iter().map(|p| p.category).collect();
        assert_eq!(alerts, vec![HabitCategory::Finance, HabitCategory::Driving]);
    }

    #[tokio::test]
    async fn refresh_without_client_fills_fallbacks() {
        let mut board = PredictionBoard::new();
        let predictor = Predictor::offline();
        board
            .refresh_with(
                &predictor,
                &[HabitCategory::Finance, HabitCategory::Food],
                &[],
                |_| {},
            )
            .await;

        for category in [HabitCategory::Finance, HabitCategory::Food] {
            assert_eq!(
                board.prediction(category),
                Some(&RiskPrediction::fallback(category))
            );
        }
        assert!(board.alerts().is_empty());
        assert_eq!(board.slot(HabitCategory::Sleep), &Slot::Idle);
    }

    #[tokio::test]
    async fn refresh_with_reports_each_category_once() {
        let mut board = PredictionBoard::new();
        let mut seen = Vec::new();
        board
            .refresh_with(
                &Predictor::offline(),
                &[HabitCategory::Screen, HabitCategory::Driving],
                &[],
                |prediction| seen.push(prediction.category),
            )
            .await;

        seen.sort();
        assert_eq!(seen, vec![HabitCategory::Screen, HabitCategory::Driving]);
        assert!(!board.is_loading(HabitCategory::Screen));
        assert!(!board.is_loading(HabitCategory::Driving));
    }
}
