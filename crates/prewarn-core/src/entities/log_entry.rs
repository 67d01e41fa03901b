use chrono::{DateTime, SubsecRound, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HabitCategory;
use crate::errors::CoreError;
use crate::ids::{PREFIX_LOG, generate_id};

/// A single user-recorded measurement. Never mutated after creation.
///
/// The timestamp is stored as epoch milliseconds and kept at millisecond
/// precision in memory, so a save/load cycle reproduces the entry exactly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LogEntry {
    pub id: String,
    pub category: HabitCategory,
    pub value: f64,
    #[serde(default)]
    pub note: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schemars(with = "i64")]
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Create a new entry with a fresh ID and the current time.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `value` is NaN or infinite, and
    /// `CoreError::Other` if no ID could be generated.
    pub fn new(
        category: HabitCategory,
        value: f64,
        note: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!(
                "value for {category} must be a finite number, got {value}"
            )));
        }

        Ok(Self {
            id: generate_id(PREFIX_LOG)?,
            category,
            value,
            note: note.into(),
            timestamp: Utc::now().trunc_subsecs(3),
        })
    }

    /// The note, or `None` when the user left it blank.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        let trimmed = self.note.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_has_id_and_millisecond_timestamp() {
        let entry = LogEntry::new(HabitCategory::Sleep, 6.5, "late movie").unwrap();
        assert!(entry.id.starts_with("log-"));
        assert_eq!(entry.timestamp.timestamp_subsec_nanos() % 1_000_000, 0);
        assert_eq!(entry.note(), Some("late movie"));
    }

    #[test]
    fn rejects_non_finite_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = LogEntry::new(HabitCategory::Finance, value, "").unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }
    }

    #[test]
    fn blank_note_reads_as_none() {
        let entry = LogEntry::new(HabitCategory::Food, 1800.0, "   ").unwrap();
        assert_eq!(entry.note(), None);
    }

    #[test]
    fn wire_shape_uses_epoch_millis() {
        let json = r#"{"id":"abc123xyz","category":"screen","value":95,"note":"","timestamp":1767225600000}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, HabitCategory::Screen);
        assert!((entry.value - 95.0).abs() < f64::EPSILON);
        assert_eq!(entry.timestamp.timestamp_millis(), 1_767_225_600_000);

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["timestamp"], 1_767_225_600_000_i64);
    }

    #[test]
    fn missing_note_defaults_to_empty() {
        let json = r#"{"id":"x","category":"food","value":2,"timestamp":0}"#;
        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert!(entry.note.is_empty());
    }
}
