//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery
//! - Configuration constants
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{find_repos, find_repos_from_path, is_repo_root};

// Configuration
pub use super::config::{
    DEFAULT_SCAN_DIR, GIT_METADATA_DIR, GIT_OPERATION_TIMEOUT_SECS, PATH_DISPLAY_WIDTH,
};

// User-facing messages
pub use super::config::{FOUND_REPOS_MESSAGE, NO_REPOS_MESSAGE, STATUS_ERROR_PREFIX};

// Internal helpers for command modules
pub(crate) use super::config::GIT_STATUS_ARGS;
