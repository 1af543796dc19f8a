use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use gazette_core::error::{CoreError, MSG_USER_NOT_FOUND};
use gazette_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::{UserResponse, UsersResponse};
use crate::state::AppState;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(username) = path?;
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| CoreError::not_found(MSG_USER_NOT_FOUND))?;

    Ok(Json(UserResponse { user }))
}
