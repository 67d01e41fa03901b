use prewarn_core::HabitCategory;
use prewarn_core::responses::CategoryInfo;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `prewarn categories`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let categories: Vec<CategoryInfo> = HabitCategory::ALL.into_iter().map(Into::into).collect();
    output(&categories, flags.format)
}
