use serde::Serialize;
use sqlx::FromRow;

/// A row from `topics`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
