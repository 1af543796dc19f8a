use serde::Serialize;
use sqlx::FromRow;

/// A row from `users`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}
