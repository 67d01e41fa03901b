//! Inter-process write lock for the log file.
//!
//! The lock is a `prewarn.write.lock` file next to the log, created
//! exclusively and holding the owner's pid. A lock whose owner has exited is
//! reclaimed.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::StoreError;

const LOCK_FILE_NAME: &str = "prewarn.write.lock";
const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Held while a process mutates the log file. Removes the lock file on drop.
#[derive(Debug)]
pub struct WriteLockGuard {
    path: PathBuf,
}

impl WriteLockGuard {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Acquire the write lock for the store living in `data_dir`.
///
/// Waits while another live process holds the lock and reclaims locks left
/// behind by dead processes.
///
/// # Errors
///
/// Returns [`StoreError::Locked`] or [`StoreError::LockUnavailable`] if the
/// lock is still contended when the wait times out, and [`StoreError::Io`]
/// if the data directory or lock file cannot be created.
pub async fn acquire_write_lock(data_dir: &Path) -> Result<WriteLockGuard, StoreError> {
    std::fs::create_dir_all(data_dir).map_err(|source| StoreError::Io {
        path: data_dir.to_path_buf(),
        source,
    })?;
    acquire_with_timeout(&data_dir.join(LOCK_FILE_NAME), LOCK_WAIT_TIMEOUT).await
}

async fn acquire_with_timeout(
    lock_path: &Path,
    timeout: Duration,
) -> Result<WriteLockGuard, StoreError> {
    let started = Instant::now();
    loop {
        let contended = match try_acquire(lock_path) {
            Ok(guard) => return Ok(guard),
            Err(StoreError::Locked { pid }) if !pid_is_alive(pid) => {
                tracing::warn!(
                    pid,
                    path = %lock_path.display(),
                    "reclaiming write lock of exited process"
                );
                let _ = std::fs::remove_file(lock_path);
                continue;
            }
            Err(err @ (StoreError::Locked { .. } | StoreError::LockUnavailable { .. })) => err,
            Err(err) => return Err(err),
        };

        if started.elapsed() >= timeout {
            return Err(contended);
        }
        tracing::debug!(%contended, "waiting for write lock");
        tokio::time::sleep(LOCK_RETRY_DELAY).await;
    }
}

/// One attempt. A taken lock reports its owner as [`StoreError::Locked`], or
/// [`StoreError::LockUnavailable`] when the file names no pid.
fn try_acquire(lock_path: &Path) -> Result<WriteLockGuard, StoreError> {
    let io_error = |source| StoreError::Io {
        path: lock_path.to_path_buf(),
        source,
    };

    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let guard = WriteLockGuard {
                path: lock_path.to_path_buf(),
            };
            writeln!(file, "{}", std::process::id()).map_err(io_error)?;
            Ok(guard)
        }
        Err(source) if source.kind() == ErrorKind::AlreadyExists => {
            let owner = match std::fs::read_to_string(lock_path) {
                Ok(raw) => raw.trim().parse::<u32>().ok(),
                // Released between our open and read.
                Err(source) if source.kind() == ErrorKind::NotFound => {
                    return try_acquire(lock_path);
                }
                Err(source) => return Err(io_error(source)),
            };
            Err(owner.map_or_else(
                || StoreError::LockUnavailable {
                    path: lock_path.to_path_buf(),
                },
                |pid| StoreError::Locked { pid },
            ))
        }
        Err(source) => Err(io_error(source)),
    }
}

/// Whether `pid` still names a running process. Our own pid always does.
fn pid_is_alive(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    if Path::new("/proc").is_dir() {
        return Path::new("/proc").join(pid.to_string()).exists();
    }
    std::process::Command::new("kill")
        .args(["-0", &pid.to_string()])
        .status()
        .is_ok_and(|status| status.success())
}
