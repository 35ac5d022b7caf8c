use axum::{Json, extract::State};
use stash_types::api::AnalyticsResponse;

use crate::current_user::CurrentUser;
use crate::error::Result;
use crate::state::{AppState, with_db};

/// GET /analytics/
pub async fn get_analytics(State(state): State<AppState>) -> Result<Json<AnalyticsResponse>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let now = chrono::Utc::now();
    let snapshot = with_db(&state, move |db| db.analytics(user_id, now)).await?;

    Ok(Json(AnalyticsResponse {
        posts_by_platform: snapshot.posts_by_platform.into_iter().collect(),
        posts_by_tags: snapshot.posts_by_tag.into_iter().collect(),
        upcoming_deadlines: snapshot.upcoming_deadlines,
        total_posts: snapshot.total_posts,
        ai_detected_posts: snapshot.ai_detected_posts,
        active_reminders: snapshot.reminders.active,
        completed_reminders: snapshot.reminders.completed,
    }))
}
