use serde::Serialize;
use sqlx::FromRow;
use gazette_core::types::{DbId, Timestamp, Votes};

/// A row from `comments`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: DbId,
    pub article_id: DbId,
    pub author: String,
    pub body: String,
    pub votes: Votes,
    pub created_at: Timestamp,
}
