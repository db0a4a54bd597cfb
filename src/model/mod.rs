//! Pure Application Model
//!
//! This module defines the state for the application and the transitions
//! that keep it consistent. The Model is organized into focused sub-models:
//!
//! - **ServerModel**: Fetched server list, display list, fetch state
//! - **FilterState**: Region/game mode toggles, player range, sort
//! - **UiModel**: Selection, panel focus, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the binary's App
//! - The display list is always recomputed in full from servers + filters

pub mod filters;
pub mod servers;
pub mod ui;

pub use filters::{FilterEntry, FilterState};
pub use servers::{LoadError, ServerModel};
pub use ui::{Focus, Toast, UiModel};

use chrono::Local;
use tracing::{debug, info, warn};

use crate::api::{ServerListResponse, ServerRecord};
use crate::logic;

/// What happened when a fetch response was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// New list stored and display list recomputed
    Loaded { count: usize, seeded_filters: bool },
    /// Error recorded, prior lists kept
    Failed,
    /// Response from a superseded fetch, ignored
    Stale,
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Server data and fetch state
    pub servers: ServerModel,

    /// Active filters and sort order
    pub filters: FilterState,

    /// UI state
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            servers: ServerModel::new(),
            filters: FilterState::default(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Enter the loading state for a new fetch; returns its generation
    pub fn begin_fetch(&mut self, force_refresh: bool) -> u64 {
        let generation = self.servers.begin_fetch();
        debug!(generation, force_refresh, "Fetch started");
        generation
    }

    /// Apply the result of the fetch tagged with `generation`
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: anyhow::Result<ServerListResponse>,
    ) -> FetchOutcome {
        if !self.servers.is_current(generation) {
            debug!(
                generation,
                latest = self.servers.fetch_generation,
                "Dropping response from superseded fetch"
            );
            return FetchOutcome::Stale;
        }

        self.servers.loading = false;

        match result {
            Ok(response) => {
                let facets = logic::facets::extract_facets(&response.servers);
                let seeded_filters = self.filters.seed_if_empty(&facets);
                if seeded_filters {
                    debug!(
                        regions = self.filters.region_filters.len(),
                        gamemodes = self.filters.gamemode_filters.len(),
                        "Seeded filters from server list"
                    );
                }

                if response.from_cache {
                    info!(
                        cache_age = response.cache_age.as_deref().unwrap_or("unknown"),
                        "Using cached server data"
                    );
                }

                let count = response.servers.len();
                self.servers.servers = response.servers;
                self.servers.from_cache = response.from_cache;
                self.servers.cache_age = response.cache_age;
                self.servers.last_updated = Some(Local::now());
                self.apply_filters();

                info!(count, shown = self.servers.filtered.len(), "Server list loaded");
                FetchOutcome::Loaded { count, seeded_filters }
            }
            Err(error) => {
                warn!(error = %format!("{:#}", error), "Failed to fetch servers");
                self.servers.error = Some(LoadError {
                    error_type: logic::errors::classify_error(&error),
                    message: logic::errors::fetch_failure_message(&error),
                    detail: logic::errors::format_error_message(&error),
                });
                FetchOutcome::Failed
            }
        }
    }

    /// Recompute the display list and keep the selection in bounds
    pub fn apply_filters(&mut self) {
        self.servers.filtered = logic::filter::apply_filters(&self.servers.servers, &self.filters);
        self.ui.selected_server =
            logic::ui::clamp_selection(self.ui.selected_server, self.servers.filtered.len());
    }

    /// Enable every facet of the current list and restore sort/range defaults
    pub fn reset_filters(&mut self) {
        let facets = logic::facets::extract_facets(&self.servers.servers);
        self.filters.reset(&facets);
        self.ui.filter_cursor =
            logic::ui::clamp_selection(self.ui.filter_cursor, self.filters.entries().len());
        self.apply_filters();
    }

    /// Toggle the filter panel row under the cursor
    pub fn toggle_filter_at_cursor(&mut self) {
        let entries = self.filters.entries();
        if let Some(entry) = self.ui.filter_cursor.and_then(|idx| entries.get(idx)) {
            self.filters.toggle_entry(entry);
            self.apply_filters();
        }
    }

    pub fn cycle_player_sort(&mut self) {
        self.filters.player_sort = logic::ui::cycle_player_sort(self.filters.player_sort);
        self.apply_filters();
    }

    pub fn raise_min_players(&mut self) {
        self.filters.min_players = logic::ui::step_player_bound_up(self.filters.min_players);
        self.apply_filters();
    }

    pub fn lower_min_players(&mut self) {
        self.filters.min_players = logic::ui::step_player_bound_down(self.filters.min_players);
        self.apply_filters();
    }

    pub fn raise_max_players(&mut self) {
        self.filters.max_players = logic::ui::step_player_bound_up(self.filters.max_players);
        self.apply_filters();
    }

    pub fn lower_max_players(&mut self) {
        self.filters.max_players = logic::ui::step_player_bound_down(self.filters.max_players);
        self.apply_filters();
    }

    /// Currently selected server in the display list
    pub fn selected_server(&self) -> Option<&ServerRecord> {
        self.ui
            .selected_server
            .and_then(|idx| self.servers.filtered.get(idx))
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerSort;

    fn server(id: &str, region: &str, map: &str, players: &str) -> ServerRecord {
        ServerRecord {
            id: id.to_string(),
            name: format!("Server {}", id),
            map: map.to_string(),
            players: players.to_string(),
            region: region.to_string(),
            address: format!("192.0.2.{}:27015", id.len()),
        }
    }

    fn response(servers: Vec<ServerRecord>) -> ServerListResponse {
        ServerListResponse {
            servers,
            from_cache: false,
            cache_age: None,
        }
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new(false);
        assert!(model.servers.servers.is_empty());
        assert!(!model.servers.loading);
        assert!(model.selected_server().is_none());
    }

    #[test]
    fn test_first_fetch_seeds_filters_and_filters_list() {
        let mut model = Model::new(false);
        let generation = model.begin_fetch(false);

        let outcome = model.finish_fetch(
            generation,
            Ok(response(vec![
                server("1", "NA", "cp_badlands", "3/24"),
                server("2", "EU", "koth_viaduct", "20/24"),
                server("3", "NA", "", "30/32"),
            ])),
        );

        assert_eq!(outcome, FetchOutcome::Loaded { count: 3, seeded_filters: true });
        assert!(!model.servers.loading);
        // Default sort is descending; 30 players is above the initial max of 24
        let ids: Vec<&str> = model.servers.filtered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(model.ui.selected_server, Some(0));
    }

    #[test]
    fn test_failure_keeps_previous_lists() {
        let mut model = Model::new(false);
        let generation = model.begin_fetch(false);
        model.finish_fetch(generation, Ok(response(vec![server("1", "NA", "cp_a", "3/24")])));

        let generation = model.begin_fetch(true);
        let outcome = model.finish_fetch(generation, Err(anyhow::anyhow!("connection refused")));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(!model.servers.loading);
        assert_eq!(model.servers.servers.len(), 1);
        assert_eq!(model.servers.filtered.len(), 1);
        let error = model.servers.error.as_ref().unwrap();
        assert_eq!(error.error_type, logic::errors::ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut model = Model::new(false);
        let old = model.begin_fetch(false);
        let new = model.begin_fetch(true);

        let outcome = model.finish_fetch(old, Ok(response(vec![server("old", "NA", "", "1/24")])));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(model.servers.loading);
        assert!(model.servers.servers.is_empty());
        assert!(model.filters.region_filters.is_empty());

        model.finish_fetch(new, Ok(response(vec![server("new", "EU", "", "1/24")])));
        assert_eq!(model.servers.servers[0].id, "new");
        assert!(!model.servers.loading);
    }

    #[test]
    fn test_reset_filters() {
        let mut model = Model::new(false);
        let generation = model.begin_fetch(false);
        model.finish_fetch(
            generation,
            Ok(response(vec![
                server("1", "NA", "cp_a", "3/24"),
                server("2", "EU", "pl_b", "28/32"),
            ])),
        );
        model.filters.toggle_region("NA");
        model.filters.min_players = 10;

        model.reset_filters();

        assert_eq!(model.filters.player_sort, PlayerSort::None);
        assert_eq!(model.filters.min_players, 0);
        assert_eq!(model.filters.max_players, filters::RESET_MAX_PLAYERS);
        assert_eq!(model.servers.filtered.len(), 2);
    }

    #[test]
    fn test_toggle_filter_at_cursor() {
        let mut model = Model::new(false);
        let generation = model.begin_fetch(false);
        model.finish_fetch(
            generation,
            Ok(response(vec![
                server("1", "EU", "", "3/24"),
                server("2", "NA", "", "5/24"),
            ])),
        );

        // Entries: Region(EU), Region(NA)
        model.ui.filter_cursor = Some(0);
        model.toggle_filter_at_cursor();

        let ids: Vec<&str> = model.servers.filtered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut model = Model::new(false);
        let generation = model.begin_fetch(false);
        model.finish_fetch(
            generation,
            Ok(response(vec![
                server("1", "NA", "", "3/24"),
                server("2", "NA", "", "5/24"),
                server("3", "NA", "", "9/24"),
            ])),
        );
        model.ui.selected_server = Some(2);

        model.filters.max_players = 4;
        model.apply_filters();

        assert_eq!(model.ui.selected_server, Some(0));
        assert_eq!(model.selected_server().map(|s| s.id.as_str()), Some("1"));
    }

    #[test]
    fn test_player_bound_controls() {
        let mut model = Model::new(false);
        model.raise_min_players();
        model.lower_max_players();
        assert_eq!(model.filters.min_players, 1);
        assert_eq!(model.filters.max_players, 23);

        model.cycle_player_sort();
        assert_eq!(model.filters.player_sort, PlayerSort::None);
    }
}
