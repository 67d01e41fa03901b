use clap::Subcommand;
use prewarn_core::HabitCategory;

/// Log entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Record a measurement. Prompts for the value when omitted.
    Add {
        /// finance, sleep, screen, food or driving.
        category: HabitCategory,
        /// Measured amount in the category's unit.
        #[arg(value_parser = parse_finite, allow_negative_numbers = true)]
        value: Option<f64>,
        /// Free-text context for the entry.
        #[arg(long)]
        note: Option<String>,
        /// Skip the forecast refresh after saving.
        #[arg(long)]
        no_predict: bool,
    },
    /// List entries, newest first.
    List {
        #[arg(long)]
        category: Option<HabitCategory>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete an entry by ID.
    Delete { id: String },
}

/// Parse a measurement, rejecting `NaN` and infinities.
pub fn parse_finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite number"))
    }
}
