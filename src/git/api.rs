//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Running git against a repository
//! - Parsing porcelain status output
//! - Classifying a repository's sync state
//!
//! ## Example: Classifying a repository
//!
//! ```rust,no_run
//! use repo_scan::git::repo_status;
//! use std::path::Path;
//!
//! async fn check(path: &Path) {
//!     let status = repo_status(path).await;
//!     println!("{}: {}", path.display(), status.label());
//! }
//! ```

// Operations
pub use super::operations::{repo_status, run_git, GitOutput};

// Status parsing and classification
pub use super::status::{
    Change, Classification, PorcelainStatus, RepoReport, RepoStatus, Tracking,
};
