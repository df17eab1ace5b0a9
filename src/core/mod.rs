//! Core infrastructure for repository processing
//!
//! This module provides:
//! - Repository discovery
//! - Configuration constants and user-facing messages

// Internal modules - not part of public API
pub(crate) mod config;
pub(crate) mod discovery;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
