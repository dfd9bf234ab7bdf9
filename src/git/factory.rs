//! Builds [`StatusEntry`] values from reported status lines.
//!
//! The builder holds a validated [`PathContext`] and does pure path
//! arithmetic, so it can be shared across threads and never fails.

use super::context::PathContext;
use super::path;
use super::types::{ChangeKind, StatusEntry};
use log::trace;

#[derive(Debug, Clone)]
pub struct StatusEntryBuilder {
    context: PathContext,
}

impl StatusEntryBuilder {
    pub fn new(context: PathContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &PathContext {
        &self.context
    }

    /// Build the entry for one status line. `reported_path` must be a
    /// non-empty forward-slash path relative to the repository root.
    pub fn build(&self, reported_path: &str, status: ChangeKind) -> StatusEntry {
        let full_path = path::normalize(&path::join(
            self.context.repository_root(),
            reported_path,
        ));

        let project_path = if self.context.is_project_at_repository_root() {
            reported_path.to_string()
        } else {
            path::to_slash(&path::relative_to(
                &full_path,
                self.context.project_root(),
            ))
        };

        trace!("{status} {reported_path} -> {full_path:?} ({project_path})");
        StatusEntry::new(reported_path, full_path, project_path, status)
    }

    /// Build entries for a batch of status lines, keeping their order
    pub fn build_all<I, S>(&self, lines: I) -> Vec<StatusEntry>
    where
        I: IntoIterator<Item = (S, ChangeKind)>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|(reported_path, status)| self.build(reported_path.as_ref(), status))
            .collect()
    }
}
