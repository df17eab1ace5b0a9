//! Basic git operations and command execution

use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

use super::status::RepoStatus;
use crate::core::{GIT_OPERATION_TIMEOUT_SECS, GIT_STATUS_ARGS};

/// Captured result of one git invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Human readable reason for a failed invocation
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.replace('\n', " ");
        }
        match self.code {
            Some(code) => format!("git exited with status {code}"),
            None => "git terminated by signal".to_string(),
        }
    }
}

/// Runs git against the repository at `path` with a timeout
///
/// Equivalent to `git -C <path> <args...>`. Spawn failures and timeouts are
/// returned as errors; a non-zero exit is reported through `GitOutput`.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<GitOutput> {
    let timeout_duration = Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS);

    debug!(repo = %path.display(), ?args, "running git");
    let result = tokio::time::timeout(
        timeout_duration,
        Command::new("git")
            .arg("-C")
            .arg(path)
            .args(args)
            .kill_on_drop(true)
            .output(),
    )
    .await;

    match result {
        Ok(Ok(output)) => Ok(GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }),
        Ok(Err(e)) => Err(anyhow::anyhow!("failed to run git: {e}")),
        Err(_) => Err(anyhow::anyhow!(
            "Git operation timed out after {} seconds",
            GIT_OPERATION_TIMEOUT_SECS
        )),
    }
}

/// Classifies one repository from `git status --porcelain --branch`
///
/// Never fails: problems with this repository become `RepoStatus::Failed`
/// so the caller can move on to the next one.
pub async fn repo_status(path: &Path) -> RepoStatus {
    match run_git(path, GIT_STATUS_ARGS).await {
        Ok(output) if output.success => RepoStatus::from_porcelain(&output.stdout),
        Ok(output) => {
            let detail = output.failure_detail();
            warn!(repo = %path.display(), "git status failed: {detail}");
            RepoStatus::Failed(detail)
        }
        Err(e) => {
            warn!(repo = %path.display(), "git status failed: {e}");
            RepoStatus::Failed(e.to_string())
        }
    }
}
