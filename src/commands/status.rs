//! Repository status command implementation
//!
//! Discovers repositories, classifies each one in turn with `git status` and
//! prints one colored line per repository.

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{find_repos_from_path, NO_REPOS_MESSAGE, PATH_DISPLAY_WIDTH};
use crate::git::{repo_status, RepoReport, RepoStatus};
use crate::utils::{paint_status, OutputConfig};

/// Formats one `Repository: ... - Status: ...` line (without newline)
pub fn format_status_line(config: &OutputConfig, repo: &Path, status: &RepoStatus) -> String {
    let path = repo.display().to_string();
    let label = paint_status(config, &status.label(), status.is_clean());
    format!("Repository: {path:<PATH_DISPLAY_WIDTH$} - Status: {label}")
}

/// Classifies `repos` one after another, writing each line as soon as it is known
///
/// In JSON mode the reports are collected and written as one array at the end.
pub async fn run_status<W: Write>(
    out: &mut W,
    repos: &[PathBuf],
    config: &OutputConfig,
    json: bool,
) -> Result<()> {
    if repos.is_empty() && !json {
        writeln!(out, "{NO_REPOS_MESSAGE}")?;
        return Ok(());
    }

    let mut reports = Vec::new();
    for repo in repos {
        let status = repo_status(repo).await;
        if json {
            reports.push(RepoReport::new(repo, &status));
        } else {
            writeln!(out, "{}", format_status_line(config, repo, &status))?;
            out.flush()?;
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Handles the `status` command
pub async fn handle_status_command(
    directory: &Path,
    json: bool,
    config: &OutputConfig,
) -> Result<()> {
    let repos = find_repos_from_path(directory);
    let mut out = std::io::stdout();
    run_status(&mut out, &repos, config, json).await
}
