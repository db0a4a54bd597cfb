//! Filter Model
//!
//! Region/game mode toggles, the player range and the sort order. The
//! toggle maps are allow-lists: a key that is missing counts as disabled.

use std::collections::BTreeMap;

use crate::logic::facets::Facets;
use crate::PlayerSort;

/// Upper player bound on first launch
pub const INITIAL_MAX_PLAYERS: u32 = 24;

/// Upper player bound after "reset filters" (deliberately wider than the initial bound)
pub const RESET_MAX_PLAYERS: u32 = 32;

/// Current filter and sort settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Region → enabled
    pub region_filters: BTreeMap<String, bool>,

    /// Game mode label → enabled
    pub gamemode_filters: BTreeMap<String, bool>,

    /// Inclusive lower bound on current players
    pub min_players: u32,

    /// Inclusive upper bound on current players
    pub max_players: u32,

    pub player_sort: PlayerSort,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            region_filters: BTreeMap::new(),
            gamemode_filters: BTreeMap::new(),
            min_players: 0,
            max_players: INITIAL_MAX_PLAYERS,
            player_sort: PlayerSort::Desc,
        }
    }
}

/// One row of the filter panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEntry {
    Region(String),
    Gamemode(String),
}

impl FilterState {
    /// Populate empty toggle maps from freshly extracted facets
    ///
    /// Maps that already hold keys are left untouched, so a refresh never
    /// widens or narrows what the user has chosen. Returns whether anything
    /// was seeded.
    pub fn seed_if_empty(&mut self, facets: &Facets) -> bool {
        let mut seeded = false;

        if self.region_filters.is_empty() {
            self.region_filters = facets.regions.clone();
            seeded = true;
        }

        if self.gamemode_filters.is_empty() {
            self.gamemode_filters = facets.gamemodes.clone();
            seeded = true;
        }

        seeded
    }

    /// Enable every facet and restore sort/range defaults
    pub fn reset(&mut self, facets: &Facets) {
        self.region_filters = facets.regions.clone();
        self.gamemode_filters = facets.gamemodes.clone();
        self.player_sort = PlayerSort::None;
        self.min_players = 0;
        self.max_players = RESET_MAX_PLAYERS;
    }

    pub fn toggle_region(&mut self, region: &str) {
        let enabled = self.region_filters.get(region).copied().unwrap_or(false);
        self.region_filters.insert(region.to_string(), !enabled);
    }

    pub fn toggle_gamemode(&mut self, gamemode: &str) {
        let enabled = self.gamemode_filters.get(gamemode).copied().unwrap_or(false);
        self.gamemode_filters.insert(gamemode.to_string(), !enabled);
    }

    /// Rows of the filter panel: regions first, then game modes
    pub fn entries(&self) -> Vec<FilterEntry> {
        self.region_filters
            .keys()
            .cloned()
            .map(FilterEntry::Region)
            .chain(self.gamemode_filters.keys().cloned().map(FilterEntry::Gamemode))
            .collect()
    }

    pub fn is_enabled(&self, entry: &FilterEntry) -> bool {
        let value = match entry {
            FilterEntry::Region(region) => self.region_filters.get(region),
            FilterEntry::Gamemode(gamemode) => self.gamemode_filters.get(gamemode),
        };
        value.copied() == Some(true)
    }

    pub fn toggle_entry(&mut self, entry: &FilterEntry) {
        match entry {
            FilterEntry::Region(region) => self.toggle_region(region),
            FilterEntry::Gamemode(gamemode) => self.toggle_gamemode(gamemode),
        }
    }
}
