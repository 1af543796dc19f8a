use serde::Serialize;
use sqlx::FromRow;
use gazette_core::types::{DbId, Timestamp, Votes};

/// A row from `articles`, with the derived comment count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub votes: Votes,
    /// Number of comments referencing this article, computed at read time.
    pub comment_count: i64,
}
