//! Server List Model
//!
//! The last fetched server list, the derived display list and the state of
//! the fetch that produced them.

use chrono::{DateTime, Local};

use crate::api::ServerRecord;
use crate::logic::errors::ErrorType;

/// Last fetch failure, kept until the next fetch starts
#[derive(Clone, Debug, PartialEq)]
pub struct LoadError {
    pub error_type: ErrorType,
    /// User-facing message
    pub message: String,
    /// Root cause, for the status bar
    pub detail: String,
}

/// Server data from the backend plus fetch bookkeeping
#[derive(Clone, Debug, Default)]
pub struct ServerModel {
    // ============================================
    // DATA
    // ============================================
    /// Raw list from the latest successful fetch (backend order)
    pub servers: Vec<ServerRecord>,

    /// Filtered and sorted list shown in the table
    pub filtered: Vec<ServerRecord>,

    // ============================================
    // FETCH STATE
    // ============================================
    /// Whether the latest issued fetch is still outstanding
    pub loading: bool,

    /// Failure of the latest fetch (prior data stays in place)
    pub error: Option<LoadError>,

    /// Generation of the latest issued fetch; older responses are dropped
    pub fetch_generation: u64,

    // ============================================
    // CACHE METADATA
    // ============================================
    /// Whether the backend answered from its cache
    pub from_cache: bool,

    /// Backend-reported cache age (e.g. "42s")
    pub cache_age: Option<String>,

    /// When the current list was received
    pub last_updated: Option<DateTime<Local>>,
}

impl ServerModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch and return its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.loading = true;
        self.error = None;
        self.fetch_generation
    }

    /// Whether a response belongs to the latest issued fetch
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.fetch_generation
    }

    /// Whether a list has ever been loaded
    pub fn has_data(&self) -> bool {
        self.last_updated.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_fetch_bumps_generation_and_clears_error() {
        let mut model = ServerModel::new();
        model.error = Some(LoadError {
            error_type: ErrorType::Timeout,
            message: "failed".to_string(),
            detail: "timed out".to_string(),
        });

        let first = model.begin_fetch();
        let second = model.begin_fetch();

        assert_eq!(second, first + 1);
        assert!(model.loading);
        assert!(model.error.is_none());
        assert!(model.is_current(second));
        assert!(!model.is_current(first));
    }

    #[test]
    fn test_has_data() {
        let mut model = ServerModel::new();
        assert!(!model.has_data());
        model.last_updated = Some(Local::now());
        assert!(model.has_data());
    }
}
