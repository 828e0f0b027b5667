use thiserror::Error;

/// Unified error type for publish-tool operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    #[error("Unknown publish target: {0}")]
    InvalidTarget(String),

    #[error("Version record not found: {0}")]
    NotFound(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Publish action failed: {0}")]
    Action(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in publish-tool
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create an invalid-argument error with context
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        PublishError::InvalidArgument(msg.into())
    }

    /// Create an invalid-target error with context
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        PublishError::InvalidTarget(msg.into())
    }

    /// Create a not-found error with context
    pub fn not_found(msg: impl Into<String>) -> Self {
        PublishError::NotFound(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        PublishError::Parse(msg.into())
    }

    /// Create an action-failure error with context
    pub fn action(msg: impl Into<String>) -> Self {
        PublishError::Action(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PublishError::Config(msg.into())
    }
}
