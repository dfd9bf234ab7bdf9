use super::path::normalize;
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use git2::Repository;
use log::debug;
use std::path::{Path, PathBuf};

/// Repository and project roots that status entries are resolved against.
/// Both roots are absolute and lexically normalized, and the project root
/// is the repository root or lies below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    repository_root: PathBuf,
    project_root: PathBuf,
}

impl PathContext {
    pub fn new(
        repository_root: impl AsRef<Path>,
        project_root: impl AsRef<Path>,
    ) -> Result<Self> {
        let repository_root = repository_root.as_ref();
        let project_root = project_root.as_ref();

        if !repository_root.is_absolute() {
            bail!("Repository root must be absolute: {:?}", repository_root);
        }
        if !project_root.is_absolute() {
            bail!("Project root must be absolute: {:?}", project_root);
        }

        let repository_root = normalize(repository_root);
        let project_root = normalize(project_root);

        if !project_root.starts_with(&repository_root) {
            bail!(
                "Project root {:?} is not inside repository {:?}",
                project_root,
                repository_root
            );
        }

        debug!("Path context: repository={repository_root:?}, project={project_root:?}");
        Ok(Self {
            repository_root,
            project_root,
        })
    }

    /// Locate the repository enclosing `project_root` and build a context from
    /// its working directory
    pub fn discover(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();
        debug!("Discovering git repository from {project_root:?}");

        let repo = Repository::discover(project_root)
            .wrap_err_with(|| format!("Could not discover git repository from {project_root:?}"))?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| eyre!("Repository has no working directory"))?;

        // libgit2 reports the workdir with a trailing separator
        Self::new(normalize(workdir), project_root)
    }

    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn is_project_at_repository_root(&self) -> bool {
        self.project_root == self.repository_root
    }
}
