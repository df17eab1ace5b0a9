//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{add_tracked_remote, create_test_commit, git, setup_git_repo};

/// A test repository with automatic cleanup
///
/// The working tree lives in `<temp>/work`; a tracked remote, when requested,
/// lives next to it in `<temp>/remote.git`.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub name: String,
}

impl TestRepo {
    /// Get the path to the repository
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join(&self.name)
    }

    /// Create or overwrite a file in the repository
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Commit a single file
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> Result<()> {
        create_test_commit(&self.path(), name, content, message)
    }

    /// Run a git command inside the repository
    pub fn git(&self, args: &[&str]) -> Result<String> {
        git(&self.path(), args)
    }
}

/// Builder for creating test repositories
pub struct TestRepoBuilder {
    name: String,
    with_upstream: bool,
    with_commits: usize,
}

impl TestRepoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            with_upstream: false,
            with_commits: 1,
        }
    }

    /// Push to a local bare remote and track it
    pub fn with_upstream(mut self) -> Self {
        self.with_upstream = true;
        self
    }

    pub fn with_commits(mut self, count: usize) -> Self {
        self.with_commits = count;
        self
    }

    pub fn build(self) -> Result<TestRepo> {
        let temp_dir = TempDir::new()?;
        let repo = TestRepo {
            temp_dir,
            name: self.name,
        };
        setup_git_repo(&repo.path())?;

        for i in 1..=self.with_commits {
            repo.commit_file(
                &format!("file{}.txt", i),
                &format!("Content {}", i),
                &format!("Commit {}", i),
            )?;
        }

        if self.with_upstream {
            add_tracked_remote(&repo.path(), &repo.temp_dir.path().join("remote.git"))?;
        }

        Ok(repo)
    }
}

/// Creates `.git` directories only, for walks that never invoke git
pub fn make_fake_repo(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path.join(".git"))?;
    Ok(())
}
