use chrono::Local;
use prewarn_core::responses::LogListResponse;
use prewarn_core::{HabitCategory, LogEntry};
use prewarn_store::LogStore;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::dashboard::render_entries_table;
use crate::output::{output_with, table_options};

/// Handle `prewarn log list`.
pub fn run(
    category: Option<HabitCategory>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, 20);
    let response = list_entries(&ctx.store, category, limit);
    output_with(&response, flags.format, || {
        render_entries_table(&response.entries, &Local, table_options())
    })
}

/// Newest-first entries, optionally of one category. `total` counts all matches.
fn list_entries(
    store: &LogStore,
    category: Option<HabitCategory>,
    limit: usize,
) -> LogListResponse {
    let matching: Vec<&LogEntry> = store
        .entries()
        .iter()
        .filter(|entry| category.is_none_or(|category| entry.category == category))
        .collect();
    LogListResponse {
        total: matching.len(),
        entries: matching.into_iter().take(limit).cloned().collect(),
    }
}
