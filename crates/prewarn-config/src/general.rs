//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default length of the recent-activity list.
const fn default_recent_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// How many entries the dashboard's recent-activity list shows.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}
