use axum::{Json, extract::State};
use stash_types::api::CreateUserRequest;
use stash_types::models::User;
use tracing::info;

use crate::current_user::CurrentUser;
use crate::error::{ApiError, Result};
use crate::extractors::AppJson;
use crate::state::{AppState, with_db};

/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<Json<User>> {
    let user = with_db(&state, move |db| db.create_user(&req.email, &req.name))
        .await?
        .ok_or_else(|| ApiError::Conflict("Email already registered".into()))?;

    info!("Created user {} ({})", user.id, user.email);
    Ok(Json(user.into()))
}

/// GET /users/me
pub async fn me(State(state): State<AppState>) -> Result<Json<User>> {
    let current = CurrentUser::resolve(&state).await?;
    Ok(Json(current.0))
}
