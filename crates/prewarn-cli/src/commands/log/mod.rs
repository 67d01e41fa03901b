mod add;
mod delete;
mod input;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LogCommands;
use crate::context::AppContext;

/// Handle `prewarn log`.
pub async fn handle(
    action: &LogCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LogCommands::Add {
            category,
            value,
            note,
            no_predict,
        } => add::run(*category, *value, note.as_deref(), *no_predict, ctx, flags).await,
        LogCommands::List { category, limit } => list::run(*category, *limit, ctx, flags),
        LogCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}
