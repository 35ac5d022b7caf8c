//! Database row types. These stay separate from the `stash-types` API models
//! so the storage layer can change shape without touching the wire format.

use chrono::{DateTime, Utc};
use stash_types::models::{ChatMessage, Platform, Reminder, SavedPost, User};

pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

pub struct SavedPostRow {
    pub id: i64,
    pub user_id: i64,
    pub platform: Platform,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub saved_at: DateTime<Utc>,
    pub has_deadline: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub ai_detected: bool,
    pub original_url: Option<String>,
}

pub struct NewSavedPost {
    pub platform: Platform,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub has_deadline: bool,
    pub deadline: Option<DateTime<Utc>>,
    pub ai_detected: bool,
    pub original_url: Option<String>,
}

pub struct ReminderRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
    pub is_urgent: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewReminder {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub is_urgent: bool,
}

/// Fields to overwrite on an existing reminder; `None` leaves the column alone.
#[derive(Default)]
pub struct ReminderChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: Option<bool>,
    pub is_urgent: Option<bool>,
}

pub struct ChatMessageRow {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReminderCounts {
    pub active: i64,
    pub completed: i64,
}

pub struct AnalyticsSnapshot {
    /// Every platform is present, zero-filled.
    pub posts_by_platform: Vec<(Platform, i64)>,
    pub posts_by_tag: Vec<(String, i64)>,
    pub upcoming_deadlines: i64,
    pub total_posts: i64,
    pub ai_detected_posts: i64,
    pub reminders: ReminderCounts,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            created_at: row.created_at,
            is_active: row.is_active,
        }
    }
}

impl From<SavedPostRow> for SavedPost {
    fn from(row: SavedPostRow) -> Self {
        SavedPost {
            id: row.id,
            user_id: row.user_id,
            platform: row.platform,
            title: row.title,
            summary: row.summary,
            tags: row.tags,
            has_deadline: row.has_deadline,
            deadline: row.deadline,
            ai_detected: row.ai_detected,
            original_url: row.original_url,
            saved_at: row.saved_at,
        }
    }
}

impl From<ReminderRow> for Reminder {
    fn from(row: ReminderRow) -> Self {
        Reminder {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            is_urgent: row.is_urgent,
            is_completed: row.is_completed,
            created_at: row.created_at,
        }
    }
}

impl From<ChatMessageRow> for ChatMessage {
    fn from(row: ChatMessageRow) -> Self {
        ChatMessage {
            id: row.id,
            user_id: row.user_id,
            message: row.message,
            is_user: row.is_user,
            timestamp: row.timestamp,
        }
    }
}

/// One page of a user's saved posts plus the counters shown beside it.
pub struct PostPage {
    pub posts: Vec<SavedPostRow>,
    /// Matching posts before `skip`/`limit` are applied.
    pub total: i64,
    pub reminders: ReminderCounts,
}
