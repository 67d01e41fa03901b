use anyhow::bail;
use prewarn_core::HabitCategory;
use prewarn_core::responses::LogAddResponse;

use super::input::read_entry;
use crate::cli::GlobalFlags;
use crate::commands::shared::forecast::forecast;
use crate::context::AppContext;
use crate::output::dashboard::{render_entry_line, render_prediction};
use crate::output::output_with;
use crate::ui;

/// Handle `prewarn log add`.
pub async fn run(
    category: HabitCategory,
    value: Option<f64>,
    note: Option<&str>,
    no_predict: bool,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (value, note) = match value {
        Some(value) => (value, note.unwrap_or_default().trim().to_string()),
        None if ui::prefs().interactive => {
            let stdin = std::io::stdin();
            read_entry(category, note, &mut stdin.lock(), &mut std::io::stderr())?
        }
        None => bail!("a value is required for '{category}' when not running interactively"),
    };

    let response = add_entry(category, value, &note, no_predict, ctx).await?;
    output_with(&response, flags.format, || {
        render_added(&response, ui::prefs().color)
    })
}

/// Save the entry, then refresh that category's forecast unless skipped.
/// The write lock covers only the save.
async fn add_entry(
    category: HabitCategory,
    value: f64,
    note: &str,
    no_predict: bool,
    ctx: &mut AppContext,
) -> anyhow::Result<LogAddResponse> {
    let entry = ctx.store.append(category, value, note)?;
    ctx.release_write_lock();

    let prediction = if no_predict {
        None
    } else {
        Some(forecast(ctx, category).await)
    };
    Ok(LogAddResponse { entry, prediction })
}

fn render_added(response: &LogAddResponse, color: bool) -> String {
    let mut text = format!(
        "Saved {}",
        render_entry_line(&response.entry, &chrono::Local)
    );
    if let Some(prediction) = &response.prediction {
        text.push_str("\n\n");
        text.push_str(&render_prediction(prediction, color));
    }
    text
}
