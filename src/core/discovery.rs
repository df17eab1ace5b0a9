//! Repository discovery utilities

use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::config::{DEFAULT_SCAN_DIR, GIT_METADATA_DIR};

/// Returns true when `path` directly contains a `.git` directory.
///
/// Only presence is checked; the metadata is never read. A `.git` *file*
/// (submodule or worktree pointer) does not count.
pub fn is_repo_root(path: &Path) -> bool {
    path.join(GIT_METADATA_DIR).is_dir()
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

/// True for anything below an already matched repository root
fn inside_repo(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.path().parent().is_some_and(is_repo_root)
}

/// Recursively searches for git repositories from a specific path
///
/// Walks depth-first with children visited in file-name order, so the result
/// is deterministic (pre-order, lexicographic). A matched directory is not
/// descended into, which keeps vendored or nested repositories out of the
/// result. Hidden directories are walked, ignore files are not honored and
/// symlinks are not followed.
///
/// Unreadable directories are skipped for that subtree only. Returned paths
/// are joined onto `search_path` and so keep its relative or absolute form.
pub fn find_repos_from_path(search_path: impl AsRef<Path>) -> Vec<PathBuf> {
    let search_path = search_path.as_ref();

    let walker = WalkBuilder::new(search_path)
        .standard_filters(false) // See hidden dirs, ignore nothing
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| is_dir(entry) && !inside_repo(entry))
        .build();

    let mut repos = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if !is_dir(&entry) {
                    continue;
                }
                if is_repo_root(entry.path()) {
                    trace!(path = %entry.path().display(), "found repository");
                    repos.push(entry.into_path());
                }
            }
            Err(err) => debug!("skipping unreadable entry: {err}"),
        }
    }

    debug!(count = repos.len(), root = %search_path.display(), "discovery finished");
    repos
}

/// Recursively searches for git repositories in the current directory
///
/// This is a convenience wrapper around `find_repos_from_path()` that searches
/// from the current working directory.
pub fn find_repos() -> Vec<PathBuf> {
    find_repos_from_path(DEFAULT_SCAN_DIR)
}
