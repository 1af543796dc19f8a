//! Route definitions for comments. Mounted at `/comments`.

use axum::routing::patch;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// ```text
/// PATCH  /{comment_id}   -> update_comment_votes
/// DELETE /{comment_id}   -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{comment_id}",
        patch(comments::update_comment_votes).delete(comments::delete_comment),
    )
}
