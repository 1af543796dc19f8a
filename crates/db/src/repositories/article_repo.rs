//! Repository for the `articles` table.
//!
//! Every read returns the derived `comment_count`, so all statements alias the
//! table as `a` and share [`COLUMNS`].

use gazette_core::article_query::ArticleListing;
use gazette_core::payload::NewArticle;
use gazette_core::types::{DbId, Votes};
use sqlx::PgPool;

use crate::models::article::Article;

/// Column list for article queries, including the correlated comment count.
const COLUMNS: &str = "a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes, \
    (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.article_id) AS comment_count";

/// Provides listing, lookup, insert, vote and delete operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List one page of articles according to a validated listing.
    ///
    /// The `ORDER BY` text comes from [`ArticleListing::order_clause`], which
    /// only emits allow-listed column names. The topic, limit and offset are
    /// bound parameters.
    pub async fn list(pool: &PgPool, listing: &ArticleListing) -> Result<Vec<Article>, sqlx::Error> {
        let mut bind_idx: u32 = 1;

        let where_clause = if listing.topic.is_some() {
            let clause = format!("WHERE a.topic = ${bind_idx}");
            bind_idx += 1;
            clause
        } else {
            String::new()
        };

        let query = format!(
            "SELECT {COLUMNS} FROM articles a \
             {where_clause} \
             ORDER BY {order_clause} \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
            order_clause = listing.order_clause(),
        );

        let mut q = sqlx::query_as::<_, Article>(&query);
        if let Some(ref topic) = listing.topic {
            q = q.bind(topic);
        }

        let articles = q
            .bind(listing.limit)
            .bind(listing.offset)
            .fetch_all(pool)
            .await?;

        tracing::debug!(
            count = articles.len(),
            topic = ?listing.topic,
            sort = listing.sort.as_str(),
            limit = listing.limit,
            offset = listing.offset,
            "Listed articles"
        );

        Ok(articles)
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles a WHERE a.article_id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an article with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new article, returning the created row.
    ///
    /// Callers check that the author and topic exist first; a race past that
    /// check surfaces as a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &NewArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles AS a (title, topic, author, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.topic)
            .bind(&input.author)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Add a signed delta to an article's votes, returning the updated row.
    ///
    /// Runs as one statement so concurrent increments do not lose updates.
    /// Returns `None` if no article has this ID.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: Votes,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles AS a SET votes = a.votes + $2
             WHERE a.article_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article (and, by cascade, its comments). Returns `true` if a
    /// row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
