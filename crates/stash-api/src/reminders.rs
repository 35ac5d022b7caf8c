use axum::{Json, extract::State};
use stash_db::models::{NewReminder, ReminderChanges};
use stash_types::api::{CreateReminderRequest, MessageResponse, UpdateReminderRequest};
use stash_types::models::Reminder;

use crate::current_user::CurrentUser;
use crate::error::{ApiError, Result};
use crate::extractors::{AppJson, AppPath};
use crate::state::{AppState, with_db};

/// GET /reminders/
pub async fn list_reminders(State(state): State<AppState>) -> Result<Json<Vec<Reminder>>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let rows = with_db(&state, move |db| db.list_reminders(user_id)).await?;
    Ok(Json(rows.into_iter().map(Reminder::from).collect()))
}

/// POST /reminders/
pub async fn create_reminder(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateReminderRequest>,
) -> Result<Json<Reminder>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let reminder = NewReminder {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        is_urgent: req.is_urgent,
    };

    let row = with_db(&state, move |db| db.create_reminder(user_id, reminder)).await?;
    Ok(Json(row.into()))
}

/// PUT /reminders/{reminder_id}: fields absent from the body keep their
/// stored values.
pub async fn update_reminder(
    State(state): State<AppState>,
    AppPath(reminder_id): AppPath<i64>,
    AppJson(req): AppJson<UpdateReminderRequest>,
) -> Result<Json<Reminder>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let changes = ReminderChanges {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        is_completed: req.is_completed,
        is_urgent: req.is_urgent,
    };

    let row = with_db(&state, move |db| db.update_reminder(user_id, reminder_id, changes))
        .await?
        .ok_or(ApiError::NotFound("Reminder not found"))?;
    Ok(Json(row.into()))
}

/// DELETE /reminders/{reminder_id}
pub async fn delete_reminder(
    State(state): State<AppState>,
    AppPath(reminder_id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let deleted = with_db(&state, move |db| db.delete_reminder(user_id, reminder_id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("Reminder not found"));
    }

    Ok(Json(MessageResponse {
        message: "Reminder deleted successfully".into(),
    }))
}
