//! User handlers

use axum::{extract::State, Json};
use chrono::Utc;
use parley_core::NewUser;

use crate::dto::{CreateUserRequest, IdResponse};
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a user
///
/// POST /users/add
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<IdResponse>> {
    // created_at captures request receipt time; the store never stamps it
    let user = NewUser::new(request.username, Utc::now());
    let id = state.users().save(&user).await?;
    Ok(Json(IdResponse { id }))
}
