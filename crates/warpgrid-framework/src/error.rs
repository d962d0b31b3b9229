//! Framework error types.

use thiserror::Error;

/// Result type alias for framework operations.
pub type FrameworkResult<T> = Result<T, FrameworkError>;

/// Errors surfaced by the scheduler framework and its plugins.
#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("node not found")]
    NodeNotFound,

    #[error("filter error: {0}")]
    Status(String),

    #[error("plugin already registered: {0}")]
    DuplicatePlugin(String),

    #[error("plugin not registered: {0}")]
    UnknownPlugin(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
