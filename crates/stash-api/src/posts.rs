use axum::{Json, extract::State};
use serde::Deserialize;
use stash_db::models::NewSavedPost;
use stash_types::api::{CreateSavedPostRequest, MessageResponse, PostStats, SavedPostsResponse};
use stash_types::models::SavedPost;
use tracing::debug;

use crate::current_user::CurrentUser;
use crate::detection::is_opportunity;
use crate::error::{ApiError, Result};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::state::{AppState, with_db};

/// Category value the client sends to mean "no filter".
const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Deserialize)]
pub struct PostQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub category: Option<String>,
}

fn default_limit() -> u32 {
    100
}

/// GET /saved-posts/
pub async fn list_posts(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PostQuery>,
) -> Result<Json<SavedPostsResponse>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let category = query
        .category
        .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);

    let page = with_db(&state, move |db| {
        db.post_page(
            user_id,
            category.as_deref(),
            i64::from(query.skip),
            i64::from(query.limit),
        )
    })
    .await?;

    Ok(Json(SavedPostsResponse {
        total: page.total,
        stats: PostStats {
            total_items: page.total,
            active_reminders: page.reminders.active,
            completed_items: page.reminders.completed,
        },
        posts: page.posts.into_iter().map(SavedPost::from).collect(),
    }))
}

/// POST /saved-posts/
pub async fn create_post(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateSavedPostRequest>,
) -> Result<Json<SavedPost>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let new_post = NewSavedPost {
        ai_detected: is_opportunity(&req.title, &req.summary),
        platform: req.platform,
        title: req.title,
        summary: req.summary,
        tags: req.tags,
        has_deadline: req.has_deadline,
        deadline: req.deadline,
        original_url: req.original_url,
    };

    let post = with_db(&state, move |db| db.create_post(user_id, new_post)).await?;
    debug!(
        "Saved post {} from {} (ai_detected={})",
        post.id, post.platform, post.ai_detected
    );
    Ok(Json(post.into()))
}

/// DELETE /saved-posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    let user_id = CurrentUser::resolve(&state).await?.id();
    let deleted = with_db(&state, move |db| db.delete_post(user_id, post_id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("Post not found"));
    }

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".into(),
    }))
}
