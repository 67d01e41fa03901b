//! # prewarn-store
//!
//! The local log store: an ordered sequence of [`LogEntry`], newest first,
//! written to `{data_dir}/prewarn_logs.json` on every change and reloaded at
//! startup.
//!
//! Writes go to a temporary sibling file that is then renamed over the
//! target, so readers never observe a half-written array. Mutating CLI
//! commands additionally hold a [`WriteLockGuard`] so two processes cannot
//! interleave read-modify-write cycles.

mod error;
mod lock;

pub use error::StoreError;
pub use lock::{WriteLockGuard, acquire_write_lock};

use std::path::{Path, PathBuf};

use prewarn_core::{HabitCategory, LogEntry};

/// Storage key; also the stem of the log file name.
pub const STORAGE_KEY: &str = "prewarn_logs";

/// Ordered log entries, newest first.
#[derive(Debug, Clone, Default)]
pub struct LogStore {
    path: Option<PathBuf>,
    entries: Vec<LogEntry>,
}

impl LogStore {
    /// Open the store file at `path`. A missing or empty file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read and
    /// [`StoreError::Corrupt`] if it does not hold a log array.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => Vec::new(),
            Ok(raw) => serde_json::from_str::<Vec<LogEntry>>(&raw).map_err(|source| {
                StoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no log file yet; starting empty");
                Vec::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded log store");
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// Open `{dir}/prewarn_logs.json`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open`].
    pub fn open_in_dir(dir: &Path) -> Result<Self, StoreError> {
        Self::open(Self::file_path(dir))
    }

    /// The log file path inside `dir`.
    #[must_use]
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(format!("{STORAGE_KEY}.json"))
    }

    /// A store that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one category, newest first.
    pub fn for_category(&self, category: HabitCategory) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// The first `limit` entries across all categories.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[LogEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Categories with at least one entry, in dashboard order.
    #[must_use]
    pub fn categories_with_data(&self) -> Vec<HabitCategory> {
        HabitCategory::ALL
            .into_iter()
            .filter(|category| self.entries.iter().any(|e| e.category == *category))
            .collect()
    }

    /// Record a new measurement at the front of the log and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if the value is not a finite number, or an
    /// I/O error if the log could not be written. On a write failure the
    /// in-memory log is left unchanged.
    pub fn append(
        &mut self,
        category: HabitCategory,
        value: f64,
        note: impl Into<String>,
    ) -> Result<LogEntry, StoreError> {
        let entry = LogEntry::new(category, value, note)?;
        self.entries.insert(0, entry.clone());
        if let Err(error) = self.persist() {
            self.entries.remove(0);
            return Err(error);
        }
        tracing::debug!(id = %entry.id, %category, value, "appended log entry");
        Ok(entry)
    }

    /// Remove the entry with `id` and persist. Returns `None` (and writes
    /// nothing) when no entry has that id.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log could not be written; the entry is
    /// restored in memory in that case.
    pub fn delete(&mut self, id: &str) -> Result<Option<LogEntry>, StoreError> {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return Ok(None);
        };
        let removed = self.entries.remove(index);
        if let Err(error) = self.persist() {
            self.entries.insert(index, removed);
            return Err(error);
        }
        tracing::debug!(id, "deleted log entry");
        Ok(Some(removed))
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let body = serde_json::to_vec_pretty(&self.entries).map_err(StoreError::Serialize)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })
    }
}
