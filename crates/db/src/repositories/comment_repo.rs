//! Repository for the `comments` table.

use gazette_core::payload::NewComment;
use gazette_core::types::{DbId, Votes};
use sqlx::PgPool;

use crate::models::comment::Comment;

const COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List an article's comments, newest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE article_id = $1
             ORDER BY created_at DESC, comment_id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a comment on an article, returning the created row.
    pub async fn create(
        pool: &PgPool,
        article_id: DbId,
        input: &NewComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, author, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .bind(&input.author)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Add a signed delta to a comment's votes, returning the updated row.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: Votes,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET votes = votes + $2
             WHERE comment_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
