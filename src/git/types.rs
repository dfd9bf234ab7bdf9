use git2::Status;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
    Untracked,
    Ignored,
    Conflicted,
}

impl ChangeKind {
    /// Map a libgit2 status bitset to a single change kind.
    /// Conflicts win over index changes, index changes over worktree changes.
    /// Unchanged files have no kind.
    pub fn from_git2(status: Status) -> Option<Self> {
        if status.is_conflicted() {
            Some(ChangeKind::Conflicted)
        } else if status.is_index_new() {
            Some(ChangeKind::Added)
        } else if status.is_index_renamed() {
            Some(ChangeKind::Renamed)
        } else if status.is_index_deleted() {
            Some(ChangeKind::Deleted)
        } else if status.is_index_typechange() {
            Some(ChangeKind::TypeChanged)
        } else if status.is_index_modified() {
            Some(ChangeKind::Modified)
        } else if status.is_wt_new() {
            Some(ChangeKind::Untracked)
        } else if status.is_wt_renamed() {
            Some(ChangeKind::Renamed)
        } else if status.is_wt_deleted() {
            Some(ChangeKind::Deleted)
        } else if status.is_wt_typechange() {
            Some(ChangeKind::TypeChanged)
        } else if status.is_wt_modified() {
            Some(ChangeKind::Modified)
        } else if status.is_ignored() {
            Some(ChangeKind::Ignored)
        } else {
            None
        }
    }

    /// Short porcelain-style code
    pub fn code(&self) -> &'static str {
        match self {
            ChangeKind::Added => "A",
            ChangeKind::Modified => "M",
            ChangeKind::Deleted => "D",
            ChangeKind::Renamed => "R",
            ChangeKind::Copied => "C",
            ChangeKind::TypeChanged => "T",
            ChangeKind::Untracked => "??",
            ChangeKind::Ignored => "!!",
            ChangeKind::Conflicted => "U",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Copied => "copied",
            ChangeKind::TypeChanged => "typechanged",
            ChangeKind::Untracked => "untracked",
            ChangeKind::Ignored => "ignored",
            ChangeKind::Conflicted => "conflicted",
        };
        write!(f, "{name}")
    }
}

/// One reported status line with its absolute and project-relative paths.
/// Equality compares all four fields by their exact string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEntry {
    reported_path: String,
    full_path: PathBuf,
    project_path: String,
    status: ChangeKind,
}

impl StatusEntry {
    pub fn new(
        reported_path: impl Into<String>,
        full_path: impl Into<PathBuf>,
        project_path: impl Into<String>,
        status: ChangeKind,
    ) -> Self {
        Self {
            reported_path: reported_path.into(),
            full_path: full_path.into(),
            project_path: project_path.into(),
            status,
        }
    }

    /// Path as given by git, relative to the repository root
    pub fn reported_path(&self) -> &str {
        &self.reported_path
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Path relative to the project root, may start with `..`
    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    pub fn status(&self) -> ChangeKind {
        self.status
    }
}

impl std::fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>2} {}", self.status.code(), self.project_path)
    }
}
