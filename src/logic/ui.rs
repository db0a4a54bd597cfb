//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::PlayerSort;

/// Highest value the player-range inputs can be stepped up to
pub const PLAYER_INPUT_CEILING: u32 = 24;

/// How long a regular toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Manual-connect hints carry an address to read, so they linger
pub const HINT_TOAST_DURATION_MS: u128 = 8000;

/// Cycle to the next sort: None → Asc → Desc → None
///
/// # Examples
/// ```
/// use quickplaytui::PlayerSort;
/// use quickplaytui::logic::ui::cycle_player_sort;
///
/// assert_eq!(cycle_player_sort(PlayerSort::None), PlayerSort::Asc);
/// assert_eq!(cycle_player_sort(PlayerSort::Asc), PlayerSort::Desc);
/// assert_eq!(cycle_player_sort(PlayerSort::Desc), PlayerSort::None);
/// ```
pub fn cycle_player_sort(current: PlayerSort) -> PlayerSort {
    match current {
        PlayerSort::None => PlayerSort::Asc,
        PlayerSort::Asc => PlayerSort::Desc,
        PlayerSort::Desc => PlayerSort::None,
    }
}

/// Step a player bound up by one, stopping at the input ceiling
///
/// A value already above the ceiling (after a reset to 32) is left alone.
pub fn step_player_bound_up(value: u32) -> u32 {
    if value < PLAYER_INPUT_CEILING {
        value + 1
    } else {
        value
    }
}

/// Step a player bound down by one, stopping at zero
pub fn step_player_bound_down(value: u32) -> u32 {
    value.saturating_sub(1)
}

/// Keep a selection inside a list of `len` rows
pub fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(selected.unwrap_or(0).min(len - 1))
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128, is_hint: bool) -> bool {
    let limit = if is_hint {
        HINT_TOAST_DURATION_MS
    } else {
        TOAST_DURATION_MS
    };
    elapsed_ms >= limit
}
