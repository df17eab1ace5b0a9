//! Configuration constants and settings

// Repository discovery configuration

/// Name of the metadata directory that marks a repository root
pub const GIT_METADATA_DIR: &str = ".git";

/// Directory scanned when no argument is given
pub const DEFAULT_SCAN_DIR: &str = ".";

// Git invocation
pub const GIT_OPERATION_TIMEOUT_SECS: u64 = 180; // 3 minutes per repository
pub const GIT_STATUS_ARGS: &[&str] = &["status", "--porcelain", "--branch"];

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 50;

// UI Constants
pub const NO_REPOS_MESSAGE: &str = "No git repositories found.";
pub const FOUND_REPOS_MESSAGE: &str = "Found git repositories in the following directories:";
pub const STATUS_ERROR_PREFIX: &str = "Error getting status";
