use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{analytics, chat, posts, reminders, users};

/// Handlers resolve the current user themselves, after their extractors have
/// accepted the request, so rejected input never touches storage.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users/", post(users::create_user))
        .route("/users/me", get(users::me))
        .route("/saved-posts/", get(posts::list_posts).post(posts::create_post))
        .route("/saved-posts/{post_id}", delete(posts::delete_post))
        .route(
            "/reminders/",
            get(reminders::list_reminders).post(reminders::create_reminder),
        )
        .route(
            "/reminders/{reminder_id}",
            put(reminders::update_reminder).delete(reminders::delete_reminder),
        )
        .route("/chat/messages/", get(chat::list_messages))
        .route("/chat/send/", post(chat::send_message))
        .route("/analytics/", get(analytics::get_analytics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
