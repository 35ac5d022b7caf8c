use axum::{Json, extract::State};
use stash_types::api::{ChatResponse, SendChatRequest};
use stash_types::models::ChatMessage;
use tracing::debug;

use crate::assistant;
use crate::current_user::CurrentUser;
use crate::error::Result;
use crate::extractors::AppJson;
use crate::state::{AppState, with_db};

/// GET /chat/messages/ (oldest first)
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<ChatMessage>>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let rows = with_db(&state, move |db| db.list_chat_messages(user_id)).await?;
    Ok(Json(rows.into_iter().map(ChatMessage::from).collect()))
}

/// POST /chat/send/
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(req): AppJson<SendChatRequest>,
) -> Result<Json<ChatResponse>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let reply = assistant::reply_to(&req.message);
    let (_, answered) =
        with_db(&state, move |db| db.record_exchange(user_id, &req.message, &reply)).await?;

    debug!("Assistant replied to user {} with message {}", user_id, answered.id);
    Ok(Json(ChatResponse {
        message: answered.message,
        timestamp: answered.timestamp,
    }))
}
