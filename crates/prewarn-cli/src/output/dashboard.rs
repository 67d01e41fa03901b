//! Text rendering of the dashboard and its pieces.

use std::fmt::{Display, Write};

use chrono::TimeZone;
use prewarn_core::responses::{CategoryCard, DashboardResponse};
use prewarn_core::{LogEntry, RiskLevel, RiskPrediction};

use super::table::{self, TableOptions, level_color, paint};

pub const NO_ALERTS: &str = "No early warning signs. Your habits look stable.";
pub const NO_ENTRIES: &str = "Log your first activity to start analysing your habits.";
pub const NO_DATA: &str = "no data yet";
pub const LOADING: &str = "analysing…";
const DEFAULT_NOTE: &str = "activity log";

/// Upper-case level label, colored when `color` is set.
#[must_use]
pub fn badge(level: RiskLevel, color: bool) -> String {
    let label = format!("[{}]", level.as_str().to_ascii_uppercase());
    if color {
        paint(level_color(level), &label)
    } else {
        label
    }
}

/// `42.5 SAR`, `8 hours`.
#[must_use]
pub fn format_value(value: f64, unit: &str) -> String {
    format!("{value} {unit}")
}

/// Local wall-clock time of an entry.
pub fn format_time<Tz>(entry: &LogEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    entry.timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// The full dashboard: category grid, active alerts, recent activity.
pub fn render_dashboard<Tz>(dashboard: &DashboardResponse, tz: &Tz, color: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "Prewarn · {} entries", dashboard.total_entries);

    out.push('\n');
    let label_width = dashboard
        .cards
        .iter()
        .map(|card| table::display_width(&card.label))
        .max()
        .unwrap_or(0);
    for card in &dashboard.cards {
        render_card(&mut out, card, label_width, color);
    }

    out.push_str("\nActive alerts\n");
    if dashboard.alerts.is_empty() {
        let _ = writeln!(out, "  {NO_ALERTS}");
    } else {
        for alert in &dashboard.alerts {
            for line in render_prediction(alert, color).lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
    }

    out.push_str("\nRecent activity\n");
    if dashboard.recent.is_empty() {
        let _ = writeln!(out, "  {NO_ENTRIES}");
    } else {
        for entry in &dashboard.recent {
            let _ = writeln!(out, "  {}", render_entry_line(entry, tz));
        }
    }

    out.trim_end().to_string()
}

fn render_card(out: &mut String, card: &CategoryCard, label_width: usize, color: bool) {
    let fill = " ".repeat(label_width.saturating_sub(table::display_width(&card.label)));
    let _ = write!(out, "{} {}{fill}  ", card.icon, card.label);

    let Some(latest) = card.latest_value.filter(|_| card.entries > 0) else {
        let _ = writeln!(out, "{NO_DATA}");
        return;
    };
    let noun = if card.entries == 1 { "entry" } else { "entries" };
    let _ = writeln!(
        out,
        "{} {noun} · latest {}",
        card.entries,
        format_value(latest, &card.unit)
    );

    if card.loading {
        let _ = writeln!(out, "   {LOADING}");
    } else if let Some(prediction) = &card.prediction {
        let _ = writeln!(
            out,
            "   {} {}",
            badge(prediction.risk_level, color),
            prediction.prediction_text
        );
    }
}

/// One prediction with its advice and projected outcome.
#[must_use]
pub fn render_prediction(prediction: &RiskPrediction, color: bool) -> String {
    let meta = prediction.category.meta();
    format!(
        "{} {} {}\n   {}\n   Advice: {}\n   If nothing changes: {}",
        meta.icon,
        meta.label,
        badge(prediction.risk_level, color),
        prediction.prediction_text,
        prediction.advice,
        prediction.projected_outcome
    )
}

/// `💰 42.5 SAR  coffee  09:41  log-1a2b3c4d`
pub fn render_entry_line<Tz>(entry: &LogEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let meta = entry.category.meta();
    format!(
        "{} {}  {}  {}  {}",
        meta.icon,
        format_value(entry.value, meta.unit),
        entry.note().unwrap_or(DEFAULT_NOTE),
        format_time(entry, tz),
        entry.id
    )
}

/// Entries as a table, for `prewarn log list`.
pub fn render_entries_table<Tz>(entries: &[LogEntry], tz: &Tz, options: TableOptions) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }
    let rows = entries
        .iter()
        .map(|entry| {
            vec![
                entry.id.clone(),
                entry.category.to_string(),
                entry.value.to_string(),
                entry.category.meta().unit.to_string(),
                entry.note().unwrap_or("-").to_string(),
                entry
                    .timestamp
                    .with_timezone(tz)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ]
        })
        .collect::<Vec<_>>();
    table::render_entity_table(
        &["id", "category", "value", "unit", "note", "time"],
        &rows,
        options,
    )
}
