use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub interactive: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
        std::io::stdin().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(
    flags: &GlobalFlags,
    stdout_tty: bool,
    stderr_tty: bool,
    stdin_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty && table && !flags.quiet && !no_color,
    };

    // Spinners draw on stderr.
    let progress = stderr_tty && !flags.quiet && flags.format != OutputFormat::Json;

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        color,
        progress,
        interactive: stdin_tty && stderr_tty,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        interactive: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            color,
            data_dir: None,
        }
    }

    #[test]
    fn auto_color_needs_a_table_on_a_terminal() {
        let table = flags(OutputFormat::Table, ColorMode::Auto, false);
        assert!(resolve(&table, true, true, true, false, None).color);
        assert!(!resolve(&table, false, true, true, false, None).color);
        assert!(!resolve(&table, true, true, true, true, None).color);

        let json = flags(OutputFormat::Json, ColorMode::Auto, false);
        assert!(!resolve(&json, true, true, true, false, None).color);
    }

    #[test]
    fn quiet_disables_progress() {
        let quiet = flags(OutputFormat::Table, ColorMode::Never, true);
        assert!(!resolve(&quiet, true, true, true, false, None).progress);
    }

    #[test]
    fn narrow_columns_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never, false);
        assert_eq!(
            resolve(&table, true, true, true, false, Some("120")).term_width,
            Some(120)
        );
        assert_eq!(resolve(&table, true, true, true, false, Some("20")).term_width, None);
        assert_eq!(resolve(&table, true, true, true, false, Some("wide")).term_width, None);
    }
}
