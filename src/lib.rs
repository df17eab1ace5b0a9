//! # repo-scan
//!
//! `repo-scan` finds git repositories under a directory and reports how each
//! one stands against its upstream. It powers the `repo-scan` CLI tool.
//!
//! ## Core Features
//!
//! - **Discovery**: Depth-first walk using `ignore`, pruned at every repository root.
//! - **Classification**: `git status --porcelain --branch` mapped to labels such as
//!   `Clean`, `Untracked Files | Modified Files` or `Clean || Ahead`.
//! - **Output**: Plain or colored listings, or JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repo_scan::core::find_repos_from_path;
//! use repo_scan::git::repo_status;
//!
//! #[tokio::main]
//! async fn main() {
//!     for path in find_repos_from_path(".") {
//!         println!("{}: {}", path.display(), repo_status(&path).await);
//!     }
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
