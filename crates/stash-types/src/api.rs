use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Platform, SavedPost};

// -- Users --

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

// -- Saved posts --

#[derive(Debug, Deserialize)]
pub struct CreateSavedPostRequest {
    pub platform: Platform,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub has_deadline: bool,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_option")]
    pub deadline: Option<DateTime<Utc>>,
    /// Accepted for compatibility; the server always computes this itself.
    #[serde(default)]
    pub ai_detected: bool,
    #[serde(default)]
    pub original_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedPostsResponse {
    pub posts: Vec<SavedPost>,
    pub total: i64,
    pub stats: PostStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostStats {
    pub total_items: i64,
    pub active_reminders: i64,
    pub completed_items: i64,
}

// -- Reminders --

#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "crate::datetime::deserialize")]
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub is_urgent: bool,
}

/// Partial update: only fields present (and non-null) in the body are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateReminderRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::datetime::deserialize_option")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub is_urgent: Option<bool>,
}

// -- Chat --

#[derive(Debug, Deserialize)]
pub struct SendChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

// -- Analytics --

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub posts_by_platform: BTreeMap<Platform, i64>,
    pub posts_by_tags: BTreeMap<String, i64>,
    /// Size of the next-five upcoming set, not the number of all future reminders.
    pub upcoming_deadlines: i64,
    pub total_posts: i64,
    pub ai_detected_posts: i64,
    pub active_reminders: i64,
    pub completed_reminders: i64,
}

// -- Misc --

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reminder_treats_missing_and_null_alike() {
        let req: UpdateReminderRequest =
            serde_json::from_str(r#"{"is_completed": true, "title": null}"#).unwrap();
        assert_eq!(req.is_completed, Some(true));
        assert!(req.title.is_none());
        assert!(req.description.is_none());
        assert!(req.due_date.is_none());
    }

    #[test]
    fn post_request_defaults_optional_fields() {
        let req: CreateSavedPostRequest = serde_json::from_str(
            r#"{"platform":"twitter","title":"t","summary":"s","tags":["A","B"]}"#,
        )
        .unwrap();
        assert_eq!(req.platform, Platform::Twitter);
        assert!(!req.has_deadline);
        assert!(req.deadline.is_none());
        assert!(req.original_url.is_none());
        assert_eq!(req.tags, vec!["A", "B"]);
    }
}
