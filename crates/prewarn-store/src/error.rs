//! Store error types.

use std::path::PathBuf;

use prewarn_core::CoreError;
use thiserror::Error;

/// Errors from loading, saving, or locking the log store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a valid log array.
    #[error("log file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The log array could not be serialized.
    #[error("failed to serialize logs: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A new entry was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Another process holds the write lock.
    #[error("another prewarn process (pid {pid}) is writing; try again after it finishes")]
    Locked { pid: u32 },

    /// The lock file exists but could not be interpreted.
    #[error("could not acquire write lock at {}; remove it if no prewarn process is running", .path.display())]
    LockUnavailable { path: PathBuf },
}
