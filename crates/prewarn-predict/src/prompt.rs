//! Prompt construction for risk forecasts.

use prewarn_core::{HabitCategory, LogEntry};

/// Maximum number of entries of a category sent to the model.
pub const PROMPT_WINDOW: usize = 7;

/// Standing instruction sent with every forecast request.
pub const SYSTEM_INSTRUCTION: &str = "You are an intelligent system that forecasts human behaviour. \
Your job is not to tell the user they made a mistake, but to warn them smartly before they make one, \
based on the trend of their data. \
Be proactive, encouraging, and alert. If the data looks good, reassure them. \
If the data points to a risky curve (for example gradually rising spending or shrinking sleep), \
warn them about the expected outcome one week from now.";

/// The most recent [`PROMPT_WINDOW`] entries of `category`, newest first.
///
/// Entries are ordered by timestamp, so the result does not depend on the
/// order of `logs`. Entries sharing a timestamp keep their relative order.
#[must_use]
pub fn recent_window(category: HabitCategory, logs: &[LogEntry]) -> Vec<&LogEntry> {
    let mut window: Vec<&LogEntry> = logs
        .iter()
        .filter(|entry| entry.category == category)
        .collect();
    window.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    window.truncate(PROMPT_WINDOW);
    window
}

/// Build the user prompt for `category` from the full log history.
///
/// Lists the recent window oldest first so the model reads the trend in
/// chronological order.
#[must_use]
pub fn build_prompt(category: HabitCategory, logs: &[LogEntry]) -> String {
    let meta = category.meta();
    let mut window = recent_window(category, logs);
    window.reverse();

    let lines = if window.is_empty() {
        "- (no entries yet)".to_string()
    } else {
        window
            .iter()
            .map(|entry| {
                format!(
                    "- value: {} {}, note: {}",
                    entry.value,
                    meta.unit,
                    entry.note().unwrap_or("none")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Recent {label} data:\n{lines}\n\nForecast the upcoming trajectory based on this pattern.",
        label = meta.label
    )
}
