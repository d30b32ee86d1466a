//! Chat handlers

use axum::{extract::State, Json};
use chrono::Utc;
use parley_core::NewChat;

use crate::dto::{ChatResponse, CreateChatRequest, GetChatsRequest, IdResponse};
use crate::response::ApiResult;
use crate::state::AppState;

use super::{parse_id, parse_ids};

/// Create a chat between two or more existing users
///
/// POST /chats/add
pub async fn add_chat(
    State(state): State<AppState>,
    Json(request): Json<CreateChatRequest>,
) -> ApiResult<Json<IdResponse>> {
    let members = parse_ids(&request.users, "users")?;
    let chat = NewChat::new(request.name, members, Utc::now());
    let id = state.chats().save(&chat).await?;
    Ok(Json(IdResponse { id }))
}

/// List a user's chats, most recently active first
///
/// POST /chats/get
pub async fn get_chats(
    State(state): State<AppState>,
    Json(request): Json<GetChatsRequest>,
) -> ApiResult<Json<Vec<ChatResponse>>> {
    let user_id = parse_id(&request.user, "user")?;
    let chats = state.chats().find_by_user(user_id).await?;
    Ok(Json(chats.into_iter().map(ChatResponse::from).collect()))
}
