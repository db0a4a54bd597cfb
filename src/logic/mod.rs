//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Backend error classification and formatting
//! - facets: Region/game mode facet extraction
//! - filter: Filter/sort pipeline producing the display list
//! - gamemode: Map prefix → game mode classification
//! - launch: Protocol URL and join/copy messages
//! - navigation: Row selection movement
//! - platform: OS defaults for opening URLs
//! - ui: UI state transitions and cycling

pub mod errors;
pub mod facets;
pub mod filter;
pub mod gamemode;
pub mod launch;
pub mod navigation;
pub mod platform;
pub mod ui;
