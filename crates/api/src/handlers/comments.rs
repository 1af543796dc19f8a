//! Handlers for comments, both nested under an article and addressed directly.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gazette_core::error::{
    CoreError, MSG_ARTICLE_NOT_FOUND, MSG_COMMENT_NOT_FOUND, MSG_USER_NOT_FOUND,
};
use gazette_core::payload::{parse_id, CommentDraft, VoteTarget, VoteUpdate};
use gazette_db::repositories::{ArticleRepo, CommentRepo, UserRepo};

use crate::error::AppResult;
use crate::response::{CommentResponse, CommentsResponse};
use crate::state::AppState;

/// GET /articles/{article_id}/comments
///
/// Newest first. An existing article without comments yields an empty list.
pub async fn list_article_comments(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let article_id = parse_id(&raw_id)?;

    if !ArticleRepo::exists(&state.pool, article_id).await? {
        return Err(CoreError::not_found(MSG_ARTICLE_NOT_FOUND).into());
    }

    let comments = CommentRepo::list_by_article(&state.pool, article_id).await?;

    Ok(Json(CommentsResponse { comments }))
}

/// POST /articles/{article_id}/comments
///
/// Body: `{ username, body }`. Checks run in order: id, body, article, author.
pub async fn create_article_comment(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let article_id = parse_id(&raw_id)?;
    let Json(draft) = payload?;
    let input = draft.validate()?;

    if !ArticleRepo::exists(&state.pool, article_id).await? {
        return Err(CoreError::not_found(MSG_ARTICLE_NOT_FOUND).into());
    }
    if !UserRepo::exists(&state.pool, &input.author).await? {
        return Err(CoreError::not_found(MSG_USER_NOT_FOUND).into());
    }

    let comment = CommentRepo::create(&state.pool, article_id, &input).await?;

    tracing::info!(
        comment_id = comment.comment_id,
        article_id,
        author = %comment.author,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// PATCH /comments/{comment_id}
///
/// Body: `{ inc_votes: <integer> }`.
pub async fn update_comment_votes(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<VoteUpdate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = VoteTarget::Comment.parse_id(&raw_id)?;
    let Json(update) = payload?;
    let delta = update.delta(VoteTarget::Comment)?;

    let comment = CommentRepo::increment_votes(&state.pool, id, delta)
        .await?
        .ok_or_else(|| CoreError::not_found(MSG_COMMENT_NOT_FOUND))?;

    tracing::info!(comment_id = id, delta, votes = comment.votes, "Comment votes updated");

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;

    if !CommentRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found(MSG_COMMENT_NOT_FOUND).into());
    }

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
