//! Shared, refreshable reference tables.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::ReferenceError;
use super::loader::{ReferenceConfig, load_reference_data};
use super::tables::ReferenceData;

/// Thread-safe holder for the current reference tables.
///
/// Each parse takes an immutable [`snapshot`](Self::snapshot); a refresh
/// swaps in a whole new `ReferenceData`, so a parse never sees a
/// half-updated table.
#[derive(Clone)]
pub struct ReferenceStore {
    inner: Arc<RwLock<Arc<ReferenceData>>>,
    config: ReferenceConfig,
}

impl ReferenceStore {
    /// Load the tables from disk.
    ///
    /// Fails if any present file is unreadable or malformed.
    pub fn load(config: ReferenceConfig) -> Result<Self, ReferenceError> {
        let data = load_reference_data(&config)?;
        Ok(Self::with_data(data, config))
    }

    /// Wrap already-built tables (for tests and embedding).
    pub fn with_data(data: ReferenceData, config: ReferenceConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(data))),
            config,
        }
    }

    /// The current tables.
    pub async fn snapshot(&self) -> Arc<ReferenceData> {
        let guard = self.inner.read().await;
        Arc::clone(&*guard)
    }

    /// Reload the tables from disk.
    ///
    /// The files are read on the blocking thread pool. On success, replaces
    /// the current tables and returns the total entry count. On failure, the
    /// existing tables are preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, ReferenceError> {
        let config = self.config.clone();
        let data = tokio::task::spawn_blocking(move || load_reference_data(&config)).await??;
        let count = data.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(data);

        Ok(count)
    }

    /// The configuration the store reloads from.
    pub fn config(&self) -> &ReferenceConfig {
        &self.config
    }
}
