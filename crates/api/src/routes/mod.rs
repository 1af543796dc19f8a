pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                        endpoint directory
///
/// /topics                                  list, create
///
/// /users                                   list
/// /users/{username}                        get
///
/// /articles                                list (?topic, sort_by, order, limit, p), create
/// /articles/{article_id}                   get, vote (PATCH), delete
/// /articles/{article_id}/comments          list, create
///
/// /comments/{comment_id}                   vote (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::endpoints::describe_endpoints))
        .nest("/topics", topics::router())
        .nest("/users", users::router())
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
}
