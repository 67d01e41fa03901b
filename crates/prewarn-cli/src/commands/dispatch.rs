use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Log { action } => commands::log::handle(&action, ctx, flags).await,
        Commands::Predict { categories } => {
            commands::predict::handle(&categories, ctx, flags).await
        }
        Commands::Prompt { category } => commands::prompt::handle(category, ctx, flags),
        Commands::Categories | Commands::Schema => {
            unreachable!("categories/schema are pre-dispatched in main")
        }
    }
}
