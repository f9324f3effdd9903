use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create checkout directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("failed to launch git: {source}")]
    GitLaunch {
        #[source]
        source: std::io::Error,
    },

    #[error("git clone of branch {branch} failed: {stderr}")]
    GitClone { branch: String, stderr: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FetchError>;
