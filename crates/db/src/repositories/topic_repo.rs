//! Repository for the `topics` table.

use gazette_core::payload::NewTopic;
use sqlx::PgPool;

use crate::models::topic::Topic;

const COLUMNS: &str = "slug, description";

/// Provides read and insert operations for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// List all topics, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics ORDER BY slug");
        sqlx::query_as::<_, Topic>(&query).fetch_all(pool).await
    }

    /// Find a topic by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE slug = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Whether a topic with this slug exists.
    pub async fn exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Insert a topic, returning the created row.
    ///
    /// A duplicate slug surfaces as a unique-violation database error.
    pub async fn create(pool: &PgPool, input: &NewTopic) -> Result<Topic, sqlx::Error> {
        let query = format!(
            "INSERT INTO topics (slug, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }
}
