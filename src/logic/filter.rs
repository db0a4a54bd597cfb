//! Server list filter/sort pipeline
//!
//! Pure transform from the fetched server list and the current filter state
//! to the list shown in the table. Stages run in a fixed order:
//! region → game mode → player range → sort.

use std::cmp::Reverse;

use crate::api::ServerRecord;
use crate::logic::gamemode::classify_map;
use crate::model::FilterState;
use crate::PlayerSort;

/// Parse the current player count out of a "current/max" string
///
/// Anything that is not a plain non-negative integer before the `/` is
/// rejected, so the caller can exclude the server.
pub fn parse_current_players(players: &str) -> Option<u32> {
    let current = players.split('/').next()?.trim();
    current.parse::<u32>().ok()
}

/// Region stage: only an explicit `true` lets a server through
pub fn passes_region(server: &ServerRecord, filters: &FilterState) -> bool {
    filters.region_filters.get(&server.region).copied() == Some(true)
}

/// Game mode stage: servers without a map always pass
pub fn passes_gamemode(server: &ServerRecord, filters: &FilterState) -> bool {
    match classify_map(&server.map) {
        None => true,
        Some(gamemode) => filters.gamemode_filters.get(gamemode).copied() == Some(true),
    }
}

/// Player range stage, returning the parsed count when the server is kept
pub fn players_in_range(server: &ServerRecord, filters: &FilterState) -> Option<u32> {
    let current = parse_current_players(&server.players)?;
    (filters.min_players <= current && current <= filters.max_players).then_some(current)
}

/// Run the whole pipeline and return the display list
pub fn apply_filters(servers: &[ServerRecord], filters: &FilterState) -> Vec<ServerRecord> {
    let mut kept: Vec<(u32, &ServerRecord)> = servers
        .iter()
        .filter(|server| passes_region(server, filters))
        .filter(|server| passes_gamemode(server, filters))
        .filter_map(|server| players_in_range(server, filters).map(|count| (count, server)))
        .collect();

    // sort_by_key is stable: equal counts keep fetch order
    match filters.player_sort {
        PlayerSort::None => {}
        PlayerSort::Asc => kept.sort_by_key(|(count, _)| *count),
        PlayerSort::Desc => kept.sort_by_key(|(count, _)| Reverse(*count)),
    }

    kept.into_iter().map(|(_, server)| server.clone()).collect()
}
