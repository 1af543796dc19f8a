use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gazette_core::error::{CoreError, MSG_TOPIC_EXISTS};
use gazette_core::payload::TopicDraft;
use gazette_db::repositories::TopicRepo;

use crate::error::AppResult;
use crate::response::{TopicResponse, TopicsResponse};
use crate::state::AppState;

/// GET /topics
pub async fn list_topics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let topics = TopicRepo::list(&state.pool).await?;
    Ok(Json(TopicsResponse { topics }))
}

/// POST /topics
///
/// Body: `{ slug, description }`. A duplicate slug is a 409.
pub async fn create_topic(
    State(state): State<AppState>,
    payload: Result<Json<TopicDraft>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let input = draft.validate()?;

    if TopicRepo::find_by_slug(&state.pool, &input.slug).await?.is_some() {
        return Err(CoreError::Conflict(MSG_TOPIC_EXISTS.to_string()).into());
    }

    let topic = TopicRepo::create(&state.pool, &input).await?;

    tracing::info!(slug = %topic.slug, "Topic created");

    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
