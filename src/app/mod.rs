//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's model module)
//! - Services (API worker, OS opener, clipboard)
//! - Logic (pure business logic in the library's logic module)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod actions;
pub(crate) mod fetch;
pub(crate) mod navigation;
