use prewarn_core::RiskLevel;

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned table of string rows under `headers`.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();
    shrink_to_fit(&mut widths, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(display_width(&header_line));

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = clip(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color {
                    paint_level(&cell, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest column one step at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

/// Terminal columns taken by `value`, counting chars.
pub fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn clip(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

fn paint_level(cell: &str, padded: &str) -> String {
    let level = match cell.trim() {
        "safe" => RiskLevel::Safe,
        "warning" => RiskLevel::Warning,
        "critical" => RiskLevel::Critical,
        _ => return padded.to_string(),
    };
    paint(level_color(level), padded)
}

/// ANSI color code for a risk level.
#[must_use]
pub const fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Safe => "32",
        RiskLevel::Warning => "33",
        RiskLevel::Critical => "31",
    }
}

/// Wrap `value` in an ANSI color sequence.
#[must_use]
pub fn paint(code: &str, value: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table};

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["log-1".into(), "sleep".into(), "7.5".into(), "late night".into()],
            vec![
                "log-200".into(),
                "finance".into(),
                "1250".into(),
                "a much longer note".into(),
            ],
        ]
    }

    #[test]
    fn aligns_columns_and_right_aligns_numbers() {
        let table = render_entity_table(
            &["id", "category", "value", "note"],
            &rows(),
            TableOptions::default(),
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id       category  value  note");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "log-1    sleep       7.5  late night");
        assert_eq!(lines[3], "log-200  finance    1250  a much longer note");
    }

    #[test]
    fn truncates_to_max_width() {
        let table = render_entity_table(
            &["id", "category", "value", "note"],
            &rows(),
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 30, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_risk_levels_only_when_enabled() {
        let rows = vec![vec!["finance".to_string(), "critical".to_string()]];
        let plain = render_entity_table(&["category", "level"], &rows, TableOptions::default());
        assert!(!plain.contains('\u{1b}'));

        let colored = render_entity_table(
            &["category", "level"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(colored.contains("\u{1b}[31mcritical"));
    }
}
