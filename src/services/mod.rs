//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background worker for backend requests
//! - logger: File logging setup

pub mod api;
pub mod logger;
