use anyhow::Context;
use chrono::Local;
use prewarn_core::CoreError;
use prewarn_core::responses::LogDeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::dashboard::render_entry_line;
use crate::output::output_with;

/// Handle `prewarn log delete`.
pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = delete_entry(id, ctx)?;
    output_with(&response, flags.format, || {
        format!("Deleted {}", render_entry_line(&response.deleted, &Local))
    })
}

fn delete_entry(id: &str, ctx: &mut AppContext) -> anyhow::Result<LogDeleteResponse> {
    let deleted = ctx
        .store
        .delete(id.trim())?
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "log entry".to_string(),
            id: id.to_string(),
        })
        .context("nothing deleted; run 'prewarn log list' to see entry ids")?;
    Ok(LogDeleteResponse { deleted })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prewarn_config::PrewarnConfig;
    use prewarn_core::HabitCategory;

    use super::delete_entry;
    use crate::context::AppContext;

    #[test]
    fn removes_exactly_the_named_entry() {
        let mut ctx = AppContext::offline(PrewarnConfig::default());
        let keep = ctx.store.append(HabitCategory::Screen, 60.0, "").unwrap();
        let target = ctx.store.append(HabitCategory::Screen, 240.0, "binge").unwrap();

        let response = delete_entry(&target.id, &mut ctx).unwrap();

        assert_eq!(response.deleted, target);
        assert_eq!(ctx.store.entries(), &[keep]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut ctx = AppContext::offline(PrewarnConfig::default());
        ctx.store.append(HabitCategory::Food, 800.0, "").unwrap();

        let err = delete_entry("log-deadbeef", &mut ctx).unwrap_err();
        assert!(format!("{err:#}").contains("log entry log-deadbeef"));
        assert_eq!(ctx.store.len(), 1);
    }
}
