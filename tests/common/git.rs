//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Runs git in `path` and fails on a non-zero exit
pub fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(path).output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sets up a git repository with user config
/// Returns Ok(()) on success, or an error if git is not available
pub fn setup_git_repo(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;

    let init_result = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    // Disable commit signing for tests
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(())
}

/// Creates a test commit in the repository
pub fn create_test_commit(
    path: &Path,
    file_name: &str,
    content: &str,
    message: &str,
) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;
    git(path, &["add", file_name])?;
    git(path, &["commit", "-q", "-m", message])?;
    Ok(())
}

/// Creates a bare repository at `remote`, adds it as `origin` and pushes the
/// current branch with upstream tracking
pub fn add_tracked_remote(path: &Path, remote: &Path) -> Result<()> {
    std::fs::create_dir_all(remote)?;
    git(remote, &["init", "-q", "--bare"])?;

    let remote_url = remote.to_string_lossy().into_owned();
    git(path, &["remote", "add", "origin", &remote_url])?;
    git(path, &["push", "-q", "-u", "origin", "HEAD"])?;
    Ok(())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
