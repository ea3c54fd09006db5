use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag parsing error: {0}")]
    Parse(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Create a tag parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GitSemverError::Parse(msg.into())
    }

    /// Create a branch resolution error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitSemverError::Branch(msg.into())
    }
}
