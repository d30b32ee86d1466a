//! Message handlers

use axum::{extract::State, Json};
use chrono::Utc;
use parley_core::NewMessage;

use crate::dto::{CreateMessageRequest, GetMessagesRequest, IdResponse, MessageResponse};
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// Post a message to a chat
///
/// POST /messages/add
pub async fn add_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> ApiResult<Json<IdResponse>> {
    let chat_id = parse_id(&request.chat, "chat")?;
    let author_id = parse_id(&request.author, "author")?;
    let message = NewMessage::new(chat_id, author_id, request.text, Utc::now());
    let id = state.messages().save(&message).await?;
    Ok(Json(IdResponse { id }))
}

/// List a chat's messages, earliest first
///
/// POST /messages/get
pub async fn get_messages(
    State(state): State<AppState>,
    Json(request): Json<GetMessagesRequest>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let chat_id = parse_id(&request.chat, "chat")?;
    let messages = state.messages().find_by_chat(chat_id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}
