use std::path::Path;
use std::process::Command;

use crate::blame::{BlameFile, parse_porcelain};
use crate::error::{GitError, Result};
use git2::Repository as GitRepository;

pub trait Repository {
    fn open() -> Result<Self>
    where
        Self: Sized;
    fn blame_file(&self, path: &Path) -> Result<BlameFile>;
}

pub struct RealGitRepository {
    repo: GitRepository,
}

impl Repository for RealGitRepository {
    fn open() -> Result<Self> {
        let repo = GitRepository::discover(".").map_err(|e| {
            GitError::RepositoryError(format!("Failed to discover git repository: {}", e))
        })?;

        if repo.is_bare() {
            return Err(GitError::RepositoryError(
                "Repository has no working tree to blame".to_string(),
            ));
        }

        Ok(Self { repo })
    }

    fn blame_file(&self, path: &Path) -> Result<BlameFile> {
        if !path.exists() {
            return Err(GitError::FileNotFound(path.display().to_string()));
        }

        // Porcelain output carries the per-commit summaries that the plain
        // git2 blame API does not expose, so shell out like the other
        // plumbing commands.
        let output = Command::new("git")
            .args(["blame", "-p"])
            .arg(path)
            .output()
            .map_err(|e| GitError::IoError(e).with_context("Failed to execute git blame"))?;

        if !output.status.success() {
            return Err(GitError::CommandError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(parse_porcelain(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl RealGitRepository {
    /// Root of the working tree the repository was discovered from.
    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or_else(|| {
            GitError::RepositoryError("Repository has no working tree".to_string())
        })
    }
}
