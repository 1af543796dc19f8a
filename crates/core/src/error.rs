pub const MSG_ARTICLE_NOT_FOUND: &str = "Article does not exist";
pub const MSG_COMMENT_NOT_FOUND: &str = "Comment does not exist";
pub const MSG_USER_NOT_FOUND: &str = "Username does not exist";
pub const MSG_AUTHOR_NOT_FOUND: &str = "Author does not exist";
pub const MSG_TOPIC_EXISTS: &str = "Topic already exists";

/// Domain error kinds.
///
/// Every variant carries the exact message surfaced to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn invalid(message: &str) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    /// The client-facing message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::InvalidArgument(msg)
            | Self::Conflict(msg) => msg,
        }
    }
}
