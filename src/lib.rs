//! Quickplay Server Browser Library
//!
//! Exposes modules for testing

pub mod api;
pub mod model;
pub mod logic;

/// Player-count ordering for the server table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSort {
    None, // Keep backend order
    Asc,  // Least players first
    #[default]
    Desc, // Most players first
}

impl PlayerSort {
    pub fn as_str(&self) -> &str {
        match self {
            PlayerSort::None => "No Sorting",
            PlayerSort::Asc => "Least Players First",
            PlayerSort::Desc => "Most Players First",
        }
    }
}
