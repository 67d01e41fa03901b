use prewarn_core::HabitCategory;
use prewarn_predict::{SYSTEM_INSTRUCTION, build_prompt};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_with;

/// What a forecast request for one category would send.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptPreview {
    category: HabitCategory,
    system_instruction: &'static str,
    prompt: String,
}

/// Handle `prewarn prompt`.
pub fn handle(
    category: HabitCategory,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let preview = PromptPreview {
        category,
        system_instruction: SYSTEM_INSTRUCTION,
        prompt: build_prompt(category, ctx.store.entries()),
    };
    output_with(&preview, flags.format, || preview.prompt.clone())
}
