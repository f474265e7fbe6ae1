// Application state module
// Shared state handed to every connection task

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::counter::CounterStore;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    pub counter: Arc<CounterStore>,

    // Cached config value for fast access without locks on the hot path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` with a counter store loaded from durable storage
    pub fn new(config: &Config, counter: CounterStore) -> Self {
        Self {
            config: config.clone(),
            counter: Arc::new(counter),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
