//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from background service
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and translate events into model transitions.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
