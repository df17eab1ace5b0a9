//! Porcelain status parsing and repository classification

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::core::STATUS_ERROR_PREFIX;

const BRANCH_HEADER_MARKER: &str = "## ";
const UNTRACKED_CODE: &str = "??";
const UNMERGED_CODE: &str = "UU";
const MODIFIED_CODE_CHARS: &[char] = &['M', 'A', 'D', 'R', 'C'];

const CHANGE_SEPARATOR: &str = " | ";
const TRACKING_SEPARATOR: &str = " || ";

/// Working-tree change categories, in label order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Untracked,
    Unmerged,
    Modified,
}

impl Change {
    pub fn text(&self) -> &'static str {
        match self {
            Change::Untracked => "Untracked Files",
            Change::Unmerged => "Unmerged Files",
            Change::Modified => "Modified Files",
        }
    }
}

/// Relationship of the local branch to its upstream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tracking {
    Ahead,
    Behind,
    Diverged,
}

impl Tracking {
    /// Reads ahead/behind markers from a `## ` branch header line
    pub fn from_branch_line(line: &str) -> Option<Self> {
        match (line.contains("ahead"), line.contains("behind")) {
            (true, true) => Some(Tracking::Diverged),
            (true, false) => Some(Tracking::Ahead),
            (false, true) => Some(Tracking::Behind),
            (false, false) => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Tracking::Ahead => "Ahead",
            Tracking::Behind => "Behind",
            Tracking::Diverged => "Diverged",
        }
    }
}

/// Parsed output of `git status --porcelain --branch`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PorcelainStatus {
    /// The `## ...` header, when git printed one
    pub branch_line: Option<String>,
    /// Distinct two-character change codes
    pub codes: BTreeSet<String>,
}

impl PorcelainStatus {
    pub fn parse(output: &str) -> Self {
        let mut status = PorcelainStatus::default();
        if output.trim().is_empty() {
            return status;
        }

        let mut lines = output.lines().filter(|line| !line.trim().is_empty()).peekable();
        if let Some(first) = lines.peek() {
            if first.starts_with(BRANCH_HEADER_MARKER) {
                status.branch_line = Some(first.to_string());
                lines.next();
            }
        }

        for line in lines {
            let code: String = line.chars().take(2).collect();
            status.codes.insert(code);
        }

        status
    }

    /// Applies the classification table: change categories first, then tracking
    pub fn classify(&self) -> Classification {
        let mut changes = Vec::new();

        if self.codes.contains(UNTRACKED_CODE) {
            changes.push(Change::Untracked);
        }
        if self.codes.contains(UNMERGED_CODE) {
            changes.push(Change::Unmerged);
        }
        if self
            .codes
            .iter()
            .any(|code| code.contains(MODIFIED_CODE_CHARS))
        {
            changes.push(Change::Modified);
        }

        Classification {
            has_codes: !self.codes.is_empty(),
            changes,
            tracking: self.branch_line.as_deref().and_then(Tracking::from_branch_line),
        }
    }
}

/// Result of classifying one repository's status output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub has_codes: bool,
    pub changes: Vec<Change>,
    pub tracking: Option<Tracking>,
}

impl Classification {
    /// Base label without the tracking suffix
    ///
    /// Empty when codes were present but none was recognized.
    pub fn base_label(&self) -> String {
        if !self.has_codes {
            return "Clean".to_string();
        }
        self.changes
            .iter()
            .map(Change::text)
            .collect::<Vec<_>>()
            .join(CHANGE_SEPARATOR)
    }

    pub fn label(&self) -> String {
        let base = self.base_label();
        match self.tracking {
            Some(tracking) => format!("{base}{TRACKING_SEPARATOR}{}", tracking.text()),
            None => base,
        }
    }
}

/// Classification of a repository, or why it could not be classified
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepoStatus {
    Classified(Classification),
    /// `git status` failed for this repository only
    Failed(String),
}

impl RepoStatus {
    pub fn from_porcelain(output: &str) -> Self {
        RepoStatus::Classified(PorcelainStatus::parse(output).classify())
    }

    /// Display string shown next to the repository path
    pub fn label(&self) -> String {
        match self {
            RepoStatus::Classified(classification) => classification.label(),
            RepoStatus::Failed(detail) => format!("{STATUS_ERROR_PREFIX}: {detail}"),
        }
    }

    /// True only for an exact `Clean` label
    pub fn is_clean(&self) -> bool {
        self.label() == "Clean"
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One row of `status` output
#[derive(Clone, Debug, Serialize)]
pub struct RepoReport {
    pub path: String,
    pub status: String,
    pub clean: bool,
}

impl RepoReport {
    pub fn new(path: &std::path::Path, status: &RepoStatus) -> Self {
        Self {
            path: path.display().to_string(),
            status: status.label(),
            clean: status.is_clean(),
        }
    }
}
