//! Local storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the log file. Empty means the platform data
    /// directory (e.g. `~/.local/share/prewarn`).
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the directory the log store lives in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no directory is set and the
    /// platform has no data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.data_dir.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("prewarn"))
            .ok_or_else(|| ConfigError::NotConfigured {
                section: "storage".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            data_dir: "/tmp/prewarn-test".into(),
        };
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/prewarn-test")
        );
    }

    #[test]
    fn blank_dir_falls_back_to_platform_dir() {
        let config = StorageConfig {
            data_dir: "  ".into(),
        };
        if let Ok(dir) = config.resolve_data_dir() {
            assert!(dir.ends_with("prewarn"));
        }
    }
}
