use thiserror::Error;

#[derive(Error, Debug)]
pub enum MkprError {
    #[error("{0} is not installed or not on PATH")]
    MissingDependency(String),

    #[error("Not inside a git repository")]
    NotAGitRepository,

    #[error("HEAD is detached; check out a branch before creating a PR")]
    DetachedHead,

    #[error("Cannot create a pull request from the {0} branch")]
    OnDefaultBranch(String),

    #[error("Not authenticated with GitHub CLI. Run 'gh auth login' first")]
    NotAuthenticated,

    #[error("{0} must not be empty")]
    EmptyInput(String),

    #[error("Git error: {0}")]
    GitError(String),

    #[error("GitHub CLI error: {0}")]
    GhError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MkprError>;
