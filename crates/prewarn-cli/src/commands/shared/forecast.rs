use prewarn_core::{HabitCategory, RiskPrediction};

use crate::context::AppContext;
use crate::progress::Progress;

/// Forecast one category behind a spinner. Never fails.
pub async fn forecast(ctx: &AppContext, category: HabitCategory) -> RiskPrediction {
    let spinner = Progress::spinner(&format!("Analysing {}…", category.meta().label));
    let prediction = ctx.predictor.predict(category, ctx.store.entries()).await;
    spinner.finish_clear();
    prediction
}
