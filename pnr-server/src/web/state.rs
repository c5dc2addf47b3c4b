//! Application state for the web layer.

use std::sync::Arc;

use crate::parser::ParserConfig;
use crate::reference::ReferenceStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Airline, aircraft and airport tables
    pub references: ReferenceStore,

    /// Parser limits and thresholds
    pub config: Arc<ParserConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(references: ReferenceStore, config: ParserConfig) -> Self {
        Self {
            references,
            config: Arc::new(config),
        }
    }
}
