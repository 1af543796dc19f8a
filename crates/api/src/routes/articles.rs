//! Route definitions for articles and their comments.
//!
//! Mounted at `/articles` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{articles, comments};
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET    /                          -> list_articles (?topic, sort_by, order, limit, p)
/// POST   /                          -> create_article
/// GET    /{article_id}              -> get_article
/// PATCH  /{article_id}              -> update_article_votes
/// DELETE /{article_id}              -> delete_article
/// GET    /{article_id}/comments     -> list_article_comments
/// POST   /{article_id}/comments     -> create_article_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/{article_id}",
            get(articles::get_article)
                .patch(articles::update_article_votes)
                .delete(articles::delete_article),
        )
        .route(
            "/{article_id}/comments",
            get(comments::list_article_comments).post(comments::create_article_comment),
        )
}
