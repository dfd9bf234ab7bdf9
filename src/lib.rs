//! Normalized git status entries for a project nested inside a repository.
//!
//! [`StatusEntryBuilder`] maps each `(reported path, change kind)` pair read
//! from git into a [`StatusEntry`] carrying the repository-relative,
//! absolute and project-relative forms of the path.

pub mod config;
pub mod git;
pub mod logging;

pub use git::{ChangeKind, PathContext, StatusEntry, StatusEntryBuilder, StatusQuery};
