use prewarn_core::HabitCategory;
use prewarn_core::responses::PredictResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::dashboard::render_prediction;
use crate::output::output_with;
use crate::progress::Progress;
use crate::ui;

/// Handle `prewarn predict`.
pub async fn handle(
    categories: &[HabitCategory],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = predict_categories(categories, ctx).await;
    output_with(&response, flags.format, || {
        let color = ui::prefs().color;
        response
            .predictions
            .iter()
            .map(|prediction| render_prediction(prediction, color))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

async fn predict_categories(categories: &[HabitCategory], ctx: &AppContext) -> PredictResponse {
    let categories = first_occurrences(categories);
    for category in &categories {
        if ctx.store.for_category(*category).next().is_none() {
            tracing::info!(%category, "no entries yet; forecasting from an empty history");
        }
    }

    let labels = categories
        .iter()
        .map(|category| category.meta().label)
        .collect::<Vec<_>>()
        .join(", ");
    let spinner = Progress::spinner(&format!("Analysing {labels}…"));
    let predictions = ctx
        .predictor
        .predict_many(&categories, ctx.store.entries())
        .await;
    spinner.finish_clear();

    PredictResponse { predictions }
}

fn first_occurrences(categories: &[HabitCategory]) -> Vec<HabitCategory> {
    let mut unique = Vec::with_capacity(categories.len());
    for category in categories {
        if !unique.contains(category) {
            unique.push(*category);
        }
    }
    unique
}
