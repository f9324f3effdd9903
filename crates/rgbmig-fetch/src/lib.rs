//! Branch acquisition for the consuming project repository.
//!
//! Derivation works on in-memory text only; this crate is the collaborator
//! that materializes it. A [`BranchCheckout`] is a single-branch clone in a
//! temporary directory that removes itself on drop.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use tracing::{debug, info};

pub mod error;

pub use error::{FetchError, Result};

/// A single-branch clone of the project repository.
#[derive(Debug)]
pub struct BranchCheckout {
    branch: String,
    dir: TempDir,
}

impl BranchCheckout {
    /// Clones `branch` of `repo_url` into a fresh temporary directory.
    ///
    /// Retry and timeout policy is left to git itself; a non-zero exit
    /// surfaces as [`FetchError::GitClone`] with git's stderr.
    pub fn clone_branch(repo_url: &str, branch: &str) -> Result<Self> {
        let dir = TempDir::new().map_err(FetchError::TempDir)?;
        info!(repo = repo_url, branch, "cloning branch");

        let output = Command::new("git")
            .args(["clone", "--branch", branch, "--single-branch", repo_url])
            .arg(dir.path())
            .output()
            .map_err(|source| FetchError::GitLaunch { source })?;

        if !output.status.success() {
            return Err(FetchError::GitClone {
                branch: branch.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        debug!(branch, path = %dir.path().display(), "clone complete");
        Ok(Self {
            branch: branch.to_string(),
            dir,
        })
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Root of the checkout on disk.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file under the checkout.
    pub fn read_to_string(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.dir.path().join(relative);
        std::fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })
    }
}
