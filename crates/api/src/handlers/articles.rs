//! Handlers for the `/articles` resource.
//!
//! Path ids arrive as raw strings and go through [`parse_id`] so that a
//! non-numeric id is reported as `Invalid id` rather than an extractor error.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gazette_core::article_query::{ArticleListParams, MSG_TOPIC_NOT_FOUND};
use gazette_core::error::{CoreError, MSG_ARTICLE_NOT_FOUND, MSG_AUTHOR_NOT_FOUND};
use gazette_core::payload::{parse_id, ArticleDraft, VoteTarget, VoteUpdate};
use gazette_db::repositories::{ArticleRepo, TopicRepo, UserRepo};

use crate::error::AppResult;
use crate::response::{ArticleResponse, ArticlesResponse};
use crate::state::AppState;

/// GET /articles?topic=&sort_by=&order=&limit=&p=
///
/// The topic existence check runs before the remaining parameters are
/// validated, so an unknown topic is reported ahead of a bad `sort_by`.
pub async fn list_articles(
    State(state): State<AppState>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    if let Some(topic) = params.topic_filter() {
        if !TopicRepo::exists(&state.pool, topic).await? {
            return Err(CoreError::not_found(MSG_TOPIC_NOT_FOUND).into());
        }
    }

    let listing = params.validate()?;
    let articles = ArticleRepo::list(&state.pool, &listing).await?;

    Ok(Json(ArticlesResponse { articles }))
}

/// POST /articles
///
/// Body: `{ author, title, body, topic }`. Returns 201 with the new article.
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<ArticleDraft>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let input = draft.validate()?;

    if !UserRepo::exists(&state.pool, &input.author).await? {
        return Err(CoreError::not_found(MSG_AUTHOR_NOT_FOUND).into());
    }
    if !TopicRepo::exists(&state.pool, &input.topic).await? {
        return Err(CoreError::not_found(MSG_TOPIC_NOT_FOUND).into());
    }

    let article = ArticleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        article_id = article.article_id,
        author = %article.author,
        topic = %article.topic,
        "Article created"
    );

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

/// GET /articles/{article_id}
pub async fn get_article(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;

    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(MSG_ARTICLE_NOT_FOUND))?;

    Ok(Json(ArticleResponse { article }))
}

/// PATCH /articles/{article_id}
///
/// Body: `{ inc_votes: <integer> }`. Adds the signed delta to the vote count.
pub async fn update_article_votes(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<VoteUpdate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = VoteTarget::Article.parse_id(&raw_id)?;
    let Json(update) = payload?;
    let delta = update.delta(VoteTarget::Article)?;

    let article = ArticleRepo::increment_votes(&state.pool, id, delta)
        .await?
        .ok_or_else(|| CoreError::not_found(MSG_ARTICLE_NOT_FOUND))?;

    tracing::info!(article_id = id, delta, votes = article.votes, "Article votes updated");

    Ok(Json(ArticleResponse { article }))
}

/// DELETE /articles/{article_id}
///
/// Removes the article and its comments. Returns 204.
pub async fn delete_article(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;

    if !ArticleRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found(MSG_ARTICLE_NOT_FOUND).into());
    }

    tracing::info!(article_id = id, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}
