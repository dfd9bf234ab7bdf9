//! Reads status snapshots from a repository through git2

use super::types::ChangeKind;
use color_eyre::eyre::{Result, WrapErr};
use git2::{Repository, StatusOptions};
use log::debug;

/// Which kinds of files a status snapshot should report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusQuery {
    pub include_untracked: bool,
    pub include_ignored: bool,
}

impl Default for StatusQuery {
    fn default() -> Self {
        Self {
            include_untracked: true,
            include_ignored: false,
        }
    }
}

/// Collect `(reported path, change kind)` pairs for every changed file, in
/// the order libgit2 returns them
pub fn read_statuses(
    repo: &Repository,
    query: &StatusQuery,
) -> Result<Vec<(String, ChangeKind)>> {
    let mut options = StatusOptions::new();
    options
        .include_untracked(query.include_untracked)
        .recurse_untracked_dirs(query.include_untracked)
        .include_ignored(query.include_ignored)
        .recurse_ignored_dirs(query.include_ignored)
        .renames_head_to_index(true);

    let statuses = repo
        .statuses(Some(&mut options))
        .wrap_err("Failed to read repository status")?;
    debug!("Found {} total status entries", statuses.len());

    let mut lines = Vec::with_capacity(statuses.len());
    for status in statuses.iter() {
        let Some(kind) = ChangeKind::from_git2(status.status()) else {
            debug!("Skipping unchanged path: {:?}", status.path());
            continue;
        };

        match reported_path(&status, kind) {
            Some(path) => lines.push((path, kind)),
            None => debug!("Skipping status entry with non UTF-8 path"),
        }
    }

    Ok(lines)
}

/// Path git shows for an entry. Renames report the destination, which
/// `git2::StatusEntry::path` does not (it returns the source).
fn reported_path(status: &git2::StatusEntry<'_>, kind: ChangeKind) -> Option<String> {
    let renamed_to = if kind == ChangeKind::Renamed {
        status
            .head_to_index()
            .and_then(|delta| delta.new_file().path().map(|p| p.to_path_buf()))
            .or_else(|| {
                status
                    .index_to_workdir()
                    .and_then(|delta| delta.new_file().path().map(|p| p.to_path_buf()))
            })
    } else {
        None
    };

    match renamed_to {
        Some(path) => path.to_str().map(str::to_string),
        None => status.path().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_repo() -> Result<(TempDir, Repository, PathBuf)> {
        let temp_dir = TempDir::new()?;
        let repo_path = temp_dir.path().to_path_buf();

        let repo = Repository::init(&repo_path)?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok((temp_dir, repo, repo_path))
    }

    fn commit_file(
        repo: &Repository,
        repo_path: &Path,
        filename: &str,
        content: &str,
    ) -> Result<()> {
        let file_path = repo_path.join(filename);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;

        let mut index = repo.index()?;
        index.add_path(Path::new(filename))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;
        let signature = git2::Signature::now("Test User", "test@example.com")?;

        let parent_commit = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent_commit.iter().collect();

        repo.commit(Some("HEAD"), &signature, &signature, "commit", &tree, &parents)?;
        Ok(())
    }

    fn kind_of(lines: &[(String, ChangeKind)], path: &str) -> Option<ChangeKind> {
        lines.iter().find(|(p, _)| p == path).map(|(_, kind)| *kind)
    }

    #[test]
    fn test_clean_repository_has_no_statuses() -> Result<()> {
        let (_temp_dir, repo, repo_path) = create_test_repo()?;
        commit_file(&repo, &repo_path, "tracked.txt", "content")?;

        let lines = read_statuses(&repo, &StatusQuery::default())?;
        assert!(lines.is_empty());
        Ok(())
    }

    #[test]
    fn test_reports_each_change_kind() -> Result<()> {
        let (_temp_dir, repo, repo_path) = create_test_repo()?;
        commit_file(&repo, &repo_path, "modified.txt", "one")?;
        commit_file(&repo, &repo_path, "deleted.txt", "gone soon")?;
        commit_file(
            &repo,
            &repo_path,
            "old_name.txt",
            "content that moves to a new name unchanged\n",
        )?;

        fs::write(repo_path.join("modified.txt"), "two")?;
        fs::remove_file(repo_path.join("deleted.txt"))?;
        fs::create_dir_all(repo_path.join("UnityProject"))?;
        fs::write(repo_path.join("UnityProject/untracked.cs"), "class A {}")?;
        fs::write(repo_path.join("staged.txt"), "staged")?;

        let mut index = repo.index()?;
        index.add_path(Path::new("staged.txt"))?;

        fs::rename(repo_path.join("old_name.txt"), repo_path.join("new_name.txt"))?;
        index.remove_path(Path::new("old_name.txt"))?;
        index.add_path(Path::new("new_name.txt"))?;
        index.write()?;

        let lines = read_statuses(&repo, &StatusQuery::default())?;

        assert_eq!(kind_of(&lines, "modified.txt"), Some(ChangeKind::Modified));
        assert_eq!(kind_of(&lines, "deleted.txt"), Some(ChangeKind::Deleted));
        assert_eq!(kind_of(&lines, "staged.txt"), Some(ChangeKind::Added));
        assert_eq!(
            kind_of(&lines, "UnityProject/untracked.cs"),
            Some(ChangeKind::Untracked)
        );
        assert_eq!(kind_of(&lines, "new_name.txt"), Some(ChangeKind::Renamed));
        assert_eq!(kind_of(&lines, "old_name.txt"), None);
        Ok(())
    }

    #[test]
    fn test_query_controls_untracked_and_ignored() -> Result<()> {
        let (_temp_dir, repo, repo_path) = create_test_repo()?;
        commit_file(&repo, &repo_path, ".gitignore", "*.log\n")?;
        fs::write(repo_path.join("build.log"), "noise")?;
        fs::write(repo_path.join("new.txt"), "new")?;

        let lines = read_statuses(
            &repo,
            &StatusQuery {
                include_untracked: false,
                include_ignored: false,
            },
        )?;
        assert!(lines.is_empty());

        let lines = read_statuses(
            &repo,
            &StatusQuery {
                include_untracked: true,
                include_ignored: true,
            },
        )?;
        assert_eq!(kind_of(&lines, "new.txt"), Some(ChangeKind::Untracked));
        assert_eq!(kind_of(&lines, "build.log"), Some(ChangeKind::Ignored));
        Ok(())
    }
}
