use std::path::Path;

use anyhow::Context;
use prewarn_config::PrewarnConfig;
use prewarn_predict::Predictor;
use prewarn_store::{LogStore, WriteLockGuard};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PrewarnConfig,
    pub store: LogStore,
    pub predictor: Predictor,
    write_lock: Option<WriteLockGuard>,
}

impl AppContext {
    /// Open the log store in `data_dir` and build the predictor from config.
    pub fn init(data_dir: &Path, config: PrewarnConfig) -> anyhow::Result<Self> {
        let store = LogStore::open_in_dir(data_dir).context("failed to open the log store")?;
        let predictor = Predictor::from_config(&config.gemini)
            .context("failed to initialize the prediction client")?;

        if !predictor.is_online() {
            tracing::info!("no Gemini API key configured; forecasts fall back to 'safe'");
        }

        Ok(Self {
            config,
            store,
            predictor,
            write_lock: None,
        })
    }

    /// Keep the store's write lock until [`Self::release_write_lock`] or drop.
    pub fn hold_write_lock(&mut self, guard: WriteLockGuard) {
        self.write_lock = Some(guard);
    }

    /// Let other processes write again. Called once a command's file update
    /// is on disk, before any slow follow-up work.
    pub fn release_write_lock(&mut self) {
        if let Some(guard) = self.write_lock.take() {
            tracing::debug!(path = %guard.path().display(), "releasing write lock");
        }
    }

    /// Context over an in-memory store with no prediction client.
    #[cfg(test)]
    pub fn offline(config: PrewarnConfig) -> Self {
        Self {
            config,
            store: LogStore::in_memory(),
            predictor: Predictor::offline(),
            write_lock: None,
        }
    }

    /// How many entries the recent list shows, honoring `--limit`.
    pub fn recent_limit(&self, flag: Option<u32>) -> usize {
        let limit = flag.unwrap_or(self.config.general.recent_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
