use clap::{Args, Subcommand};
use prewarn_core::HabitCategory;

use crate::cli::subcommands::LogCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Category grid, active alerts and recent activity.
    Dashboard(DashboardArgs),
    /// Record, list and delete habit entries.
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Request fresh risk forecasts, one request per category.
    Predict {
        /// finance, sleep, screen, food or driving. Repeats are ignored.
        #[arg(required = true, num_args = 1..)]
        categories: Vec<HabitCategory>,
    },
    /// Print the prompt a forecast for this category would send.
    Prompt {
        /// finance, sleep, screen, food or driving.
        category: HabitCategory,
    },
    /// List tracked categories with their units.
    Categories,
    /// Dump the forecast response schemas.
    Schema,
}

/// Arguments for `prewarn dashboard`.
#[derive(Clone, Debug, Default, Args)]
pub struct DashboardArgs {
    /// Show stored data only; do not request forecasts.
    #[arg(long)]
    pub no_predict: bool,
}
