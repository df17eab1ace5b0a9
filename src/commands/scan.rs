//! Repository listing command implementation
//!
//! Discovers repositories under a directory and prints their paths.

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{find_repos_from_path, FOUND_REPOS_MESSAGE, NO_REPOS_MESSAGE};

/// Writes the repository listing to `out`
pub fn render_scan<W: Write>(out: &mut W, repos: &[PathBuf], json: bool) -> Result<()> {
    if json {
        let paths: Vec<String> = repos.iter().map(|p| p.display().to_string()).collect();
        serde_json::to_writer_pretty(&mut *out, &paths)?;
        writeln!(out)?;
        return Ok(());
    }

    if repos.is_empty() {
        writeln!(out, "{NO_REPOS_MESSAGE}")?;
        return Ok(());
    }

    writeln!(out, "{FOUND_REPOS_MESSAGE}")?;
    for repo in repos {
        writeln!(out, "{}", repo.display())?;
    }
    Ok(())
}

/// Handles the `scan` command
pub fn handle_scan_command(directory: &Path, json: bool) -> Result<()> {
    let repos = find_repos_from_path(directory);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_scan(&mut out, &repos, json)?;
    out.flush()?;
    Ok(())
}
