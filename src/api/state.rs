//! Application state for the hours tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::ledger::Ledger;
use crate::store::SheetStore;

/// Shared application state.
///
/// Holds the ledger over the worksheet, built from the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    /// The ledger all handlers read and write through.
    ledger: Arc<Ledger>,
}

impl AppState {
    /// Creates a new application state over `store`.
    pub fn new(config: ConfigLoader, store: Arc<dyn SheetStore>) -> Self {
        let ledger = Ledger::from_config(&config, store);
        Self {
            ledger: Arc::new(ledger),
        }
    }

    /// Returns a reference to the ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
