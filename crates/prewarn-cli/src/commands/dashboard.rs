use std::collections::BTreeMap;

use chrono::Local;
use prewarn_core::HabitCategory;
use prewarn_core::responses::{CategoryCard, DashboardResponse};
use prewarn_predict::PredictionBoard;
use prewarn_store::LogStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::{dashboard::render_dashboard, output_with};
use crate::progress::Progress;
use crate::ui;

/// Handle `prewarn dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut board = PredictionBoard::new();
    if !args.no_predict {
        refresh(&mut board, ctx).await;
    }

    let dashboard = build_dashboard(&ctx.store, &board, ctx.recent_limit(flags.limit));
    output_with(&dashboard, flags.format, || {
        render_dashboard(&dashboard, &Local, ui::prefs().color)
    })
}

/// Forecast every category that has data, one spinner per request.
async fn refresh(board: &mut PredictionBoard, ctx: &AppContext) {
    let categories = ctx.store.categories_with_data();
    let spinners: BTreeMap<HabitCategory, Progress> = categories
        .iter()
        .map(|category| {
            let label = category.meta().label;
            (*category, Progress::spinner(&format!("Analysing {label}…")))
        })
        .collect();

    board
        .refresh_with(
            &ctx.predictor,
            &categories,
            ctx.store.entries(),
            |prediction| {
                if let Some(spinner) = spinners.get(&prediction.category) {
                    spinner.finish_clear();
                }
            },
        )
        .await;
}

/// Assemble the dashboard from stored entries and the current forecasts.
pub fn build_dashboard(
    store: &LogStore,
    board: &PredictionBoard,
    recent_limit: usize,
) -> DashboardResponse {
    let cards = HabitCategory::ALL
        .into_iter()
        .map(|category| {
            let meta = category.meta();
            CategoryCard {
                category,
                label: meta.label.to_string(),
                icon: meta.icon.to_string(),
                unit: meta.unit.to_string(),
                entries: store.for_category(category).count(),
                latest_value: store.for_category(category).next().map(|entry| entry.value),
                loading: board.is_loading(category),
                prediction: board.prediction(category).cloned(),
            }
        })
        .collect();

    DashboardResponse {
        cards,
        alerts: board.alerts().into_iter().cloned().collect(),
        recent: store.recent(recent_limit).to_vec(),
        total_entries: store.len(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prewarn_config::PrewarnConfig;
    use prewarn_core::{HabitCategory, RiskLevel, RiskPrediction};
    use prewarn_predict::PredictionBoard;
    use prewarn_store::LogStore;

    use super::{build_dashboard, refresh};
    use crate::context::AppContext;

    fn critical(category: HabitCategory) -> RiskPrediction {
        RiskPrediction {
            category,
            risk_level: RiskLevel::Critical,
            prediction_text: "Sharp decline".into(),
            advice: "Act now".into(),
            projected_outcome: "Burnout".into(),
        }
    }

    #[test]
    fn cards_follow_category_order_with_counts() {
        let mut store = LogStore::in_memory();
        store.append(HabitCategory::Sleep, 6.0, "").unwrap();
        store.append(HabitCategory::Sleep, 5.0, "").unwrap();
        store.append(HabitCategory::Driving, 30.0, "").unwrap();

        let dashboard = build_dashboard(&store, &PredictionBoard::new(), 5);

        let order: Vec<HabitCategory> = dashboard.cards.iter().map(|c| c.category).collect();
        assert_eq!(order, HabitCategory::ALL.to_vec());
        let sleep = &dashboard.cards[1];
        assert_eq!(sleep.entries, 2);
        assert_eq!(sleep.latest_value, Some(5.0));
        assert_eq!(dashboard.cards[0].entries, 0);
        assert_eq!(dashboard.cards[0].latest_value, None);
        assert_eq!(dashboard.total_entries, 3);
    }

    #[test]
    fn recent_is_limited_and_newest_first() {
        let mut store = LogStore::in_memory();
        for value in 1..=7 {
            store
                .append(HabitCategory::Finance, f64::from(value), "")
                .unwrap();
        }

        let dashboard = build_dashboard(&store, &PredictionBoard::new(), 5);
        let values: Vec<f64> = dashboard.recent.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![7.0, 6.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn alerts_and_loading_come_from_the_board() {
        let mut store = LogStore::in_memory();
        store.append(HabitCategory::Screen, 300.0, "").unwrap();
        store.append(HabitCategory::Food, 3100.0, "").unwrap();

        let mut board = PredictionBoard::new();
        board.finish(critical(HabitCategory::Screen));
        board.begin(HabitCategory::Food);

        let dashboard = build_dashboard(&store, &board, 5);
        assert_eq!(dashboard.alerts, vec![critical(HabitCategory::Screen)]);
        assert!(dashboard.cards[3].loading);
        assert!(dashboard.cards[3].prediction.is_none());
        assert_eq!(
            dashboard.cards[2].prediction,
            Some(critical(HabitCategory::Screen))
        );
    }

    #[tokio::test]
    async fn refresh_forecasts_only_categories_with_data() {
        let mut ctx = AppContext::offline(PrewarnConfig::default());
        ctx.store.append(HabitCategory::Finance, 99.0, "").unwrap();

        let mut board = PredictionBoard::new();
        refresh(&mut board, &ctx).await;

        assert_eq!(
            board.prediction(HabitCategory::Finance),
            Some(&RiskPrediction::fallback(HabitCategory::Finance))
        );
        assert!(board.prediction(HabitCategory::Sleep).is_none());
        assert!(board.alerts().is_empty());
    }
}
