use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use stash_types::models::Platform;
use tracing::info;

use crate::Database;
use crate::models::{
    AnalyticsSnapshot, ChatMessageRow, NewReminder, NewSavedPost, PostPage, ReminderChanges,
    ReminderCounts, ReminderRow, SavedPostRow, UserRow,
};
use crate::timestamp;

/// Identity fabricated when a request needs a current user and none exists.
pub const PLACEHOLDER_EMAIL: &str = "demo@example.com";
pub const PLACEHOLDER_NAME: &str = "Demo User";

/// Reminders counted by the analytics "upcoming deadlines" figure.
const UPCOMING_DEADLINE_CAP: i64 = 5;

/// Keeps `IN (...)` lists well under SQLite's bound-parameter limit.
const TAG_BATCH: usize = 500;

const USER_COLUMNS: &str = "id, email, name, created_at, is_active";
const POST_COLUMNS: &str =
    "id, user_id, platform, title, summary, saved_at, has_deadline, deadline, ai_detected, original_url";
const REMINDER_COLUMNS: &str =
    "id, user_id, title, description, due_date, is_completed, is_urgent, created_at";
const CHAT_COLUMNS: &str = "id, user_id, message, is_user, timestamp";

impl Database {
    // -- Users --

    /// Returns `None` when the email is already registered.
    pub fn create_user(&self, email: &str, name: &str) -> Result<Option<UserRow>> {
        self.with_transaction(|conn| {
            if query_user_by_email(conn, email)?.is_some() {
                return Ok(None);
            }
            insert_user(conn, email, name, timestamp::now()).map(Some)
        })
    }

    /// The oldest user stands in for the authenticated caller. An empty table
    /// gets a placeholder user so there is always someone to own the data.
    pub fn current_user(&self) -> Result<UserRow> {
        self.with_transaction(|conn| {
            if let Some(user) = query_first_user(conn)? {
                return Ok(user);
            }
            info!("No users yet, creating placeholder user {}", PLACEHOLDER_EMAIL);
            insert_user(conn, PLACEHOLDER_EMAIL, PLACEHOLDER_NAME, timestamp::now())
        })
    }

    // -- Saved posts --

    pub fn create_post(&self, user_id: i64, post: NewSavedPost) -> Result<SavedPostRow> {
        self.with_transaction(|conn| insert_post(conn, user_id, post, timestamp::now()))
    }

    /// `category` keeps posts with at least one tag containing it,
    /// ignoring ASCII case.
    pub fn post_page(
        &self,
        user_id: i64,
        category: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> Result<PostPage> {
        self.with_conn(|conn| {
            let filter = "p.user_id = ?1
                 AND (?2 IS NULL OR EXISTS (
                     SELECT 1 FROM post_tags t
                     WHERE t.post_id = p.id AND instr(lower(t.tag), lower(?2)) > 0))";

            let mut stmt = conn.prepare(&format!(
                "SELECT {POST_COLUMNS} FROM saved_posts p WHERE {filter} ORDER BY p.id LIMIT ?3 OFFSET ?4"
            ))?;
            let mut posts = stmt
                .query_map(params![user_id, category, limit, skip], map_post)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            attach_tags(conn, &mut posts)?;

            let total: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM saved_posts p WHERE {filter}"),
                params![user_id, category],
                |row| row.get(0),
            )?;

            Ok(PostPage {
                posts,
                total,
                reminders: query_reminder_counts(conn, user_id)?,
            })
        })
    }

    /// Returns false when the post does not exist or belongs to someone else.
    pub fn delete_post(&self, user_id: i64, post_id: i64) -> Result<bool> {
        self.with_transaction(|conn| {
            let deleted = conn.execute(
                "DELETE FROM saved_posts WHERE id = ?1 AND user_id = ?2",
                params![post_id, user_id],
            )?;
            Ok(deleted > 0)
        })
    }

    // -- Reminders --

    pub fn list_reminders(&self, user_id: i64) -> Result<Vec<ReminderRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {REMINDER_COLUMNS} FROM reminders WHERE user_id = ?1 ORDER BY id"
            ))?;
            let rows = stmt
                .query_map([user_id], map_reminder)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_reminder(&self, user_id: i64, reminder: NewReminder) -> Result<ReminderRow> {
        self.with_transaction(|conn| insert_reminder(conn, user_id, reminder, timestamp::now()))
    }

    /// Applies only the fields set in `changes`. `None` when the reminder is
    /// missing or not owned by `user_id`.
    pub fn update_reminder(
        &self,
        user_id: i64,
        reminder_id: i64,
        changes: ReminderChanges,
    ) -> Result<Option<ReminderRow>> {
        self.with_transaction(|conn| {
            let Some(mut reminder) = query_reminder(conn, user_id, reminder_id)? else {
                return Ok(None);
            };

            if let Some(title) = changes.title {
                reminder.title = title;
            }
            if let Some(description) = changes.description {
                reminder.description = description;
            }
            if let Some(due_date) = changes.due_date {
                reminder.due_date = timestamp::normalize(due_date);
            }
            if let Some(is_completed) = changes.is_completed {
                reminder.is_completed = is_completed;
            }
            if let Some(is_urgent) = changes.is_urgent {
                reminder.is_urgent = is_urgent;
            }

            conn.execute(
                "UPDATE reminders
                 SET title = ?1, description = ?2, due_date = ?3, is_completed = ?4, is_urgent = ?5
                 WHERE id = ?6 AND user_id = ?7",
                params![
                    reminder.title,
                    reminder.description,
                    timestamp::encode(&reminder.due_date),
                    reminder.is_completed,
                    reminder.is_urgent,
                    reminder.id,
                    user_id,
                ],
            )?;

            Ok(Some(reminder))
        })
    }

    pub fn delete_reminder(&self, user_id: i64, reminder_id: i64) -> Result<bool> {
        self.with_transaction(|conn| {
            let deleted = conn.execute(
                "DELETE FROM reminders WHERE id = ?1 AND user_id = ?2",
                params![reminder_id, user_id],
            )?;
            Ok(deleted > 0)
        })
    }

    // -- Chat --

    pub fn list_chat_messages(&self, user_id: i64) -> Result<Vec<ChatMessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {CHAT_COLUMNS} FROM chat_messages WHERE user_id = ?1 ORDER BY timestamp, id"
            ))?;
            let rows = stmt
                .query_map([user_id], map_chat_message)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Stores the user's line and the assistant's reply in one transaction.
    /// Returns `(user_message, reply)`.
    pub fn record_exchange(
        &self,
        user_id: i64,
        message: &str,
        reply: &str,
    ) -> Result<(ChatMessageRow, ChatMessageRow)> {
        self.with_transaction(|conn| {
            let asked = insert_chat_message(conn, user_id, message, true, timestamp::now())?;
            let answered = insert_chat_message(conn, user_id, reply, false, timestamp::now())?;
            Ok((asked, answered))
        })
    }

    // -- Analytics --

    pub fn analytics(&self, user_id: i64, now: DateTime<Utc>) -> Result<AnalyticsSnapshot> {
        self.with_conn(|conn| {
            let mut posts_by_platform: Vec<(Platform, i64)> =
                Platform::ALL.into_iter().map(|p| (p, 0)).collect();
            let mut stmt = conn.prepare(
                "SELECT platform, COUNT(*) FROM saved_posts WHERE user_id = ?1 GROUP BY platform",
            )?;
            let counts = stmt
                .query_map([user_id], |row| Ok((platform_column(row, 0)?, row.get::<_, i64>(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            for (platform, count) in counts {
                if let Some(slot) = posts_by_platform.iter_mut().find(|(p, _)| *p == platform) {
                    slot.1 = count;
                }
            }

            let mut stmt = conn.prepare(
                "SELECT t.tag, COUNT(*) FROM post_tags t
                 JOIN saved_posts p ON p.id = t.post_id
                 WHERE p.user_id = ?1
                 GROUP BY t.tag
                 ORDER BY t.tag",
            )?;
            let posts_by_tag: Vec<(String, i64)> = stmt
                .query_map([user_id], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            let (total_posts, ai_detected_posts): (i64, i64) = conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(ai_detected), 0) FROM saved_posts WHERE user_id = ?1",
                [user_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;

            let upcoming_deadlines: i64 = conn.query_row(
                "SELECT COUNT(*) FROM (
                     SELECT id FROM reminders
                     WHERE user_id = ?1 AND is_completed = 0 AND due_date > ?2
                     ORDER BY due_date
                     LIMIT ?3)",
                params![user_id, timestamp::encode(&now), UPCOMING_DEADLINE_CAP],
                |row| row.get(0),
            )?;

            Ok(AnalyticsSnapshot {
                posts_by_platform,
                posts_by_tag,
                upcoming_deadlines,
                total_posts,
                ai_detected_posts,
                reminders: query_reminder_counts(conn, user_id)?,
            })
        })
    }
}

// -- Shared helpers, also used by the seed routine --

pub(crate) fn query_first_user(conn: &Connection) -> Result<Option<UserRow>> {
    let row = conn
        .query_row(
            &format!("SELECT {USER_COLUMNS} FROM users ORDER BY id LIMIT 1"),
            [],
            map_user,
        )
        .optional()?;
    Ok(row)
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>> {
    let row = conn
        .query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1"),
            [email],
            map_user,
        )
        .optional()?;
    Ok(row)
}

pub(crate) fn insert_user(
    conn: &Connection,
    email: &str,
    name: &str,
    created_at: DateTime<Utc>,
) -> Result<UserRow> {
    conn.execute(
        "INSERT INTO users (email, name, created_at, is_active) VALUES (?1, ?2, ?3, 1)",
        params![email, name, timestamp::encode(&created_at)],
    )?;

    Ok(UserRow {
        id: conn.last_insert_rowid(),
        email: email.to_string(),
        name: name.to_string(),
        created_at,
        is_active: true,
    })
}

pub(crate) fn insert_post(
    conn: &Connection,
    user_id: i64,
    mut post: NewSavedPost,
    saved_at: DateTime<Utc>,
) -> Result<SavedPostRow> {
    post.deadline = post.deadline.map(timestamp::normalize);
    conn.execute(
        "INSERT INTO saved_posts
             (user_id, platform, title, summary, saved_at, has_deadline, deadline, ai_detected, original_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user_id,
            post.platform.as_str(),
            post.title,
            post.summary,
            timestamp::encode(&saved_at),
            post.has_deadline,
            post.deadline.as_ref().map(timestamp::encode),
            post.ai_detected,
            post.original_url,
        ],
    )?;
    let id = conn.last_insert_rowid();

    let mut stmt =
        conn.prepare_cached("INSERT INTO post_tags (post_id, position, tag) VALUES (?1, ?2, ?3)")?;
    for (position, tag) in post.tags.iter().enumerate() {
        stmt.execute(params![id, position as i64, tag])?;
    }

    Ok(SavedPostRow {
        id,
        user_id,
        platform: post.platform,
        title: post.title,
        summary: post.summary,
        tags: post.tags,
        saved_at,
        has_deadline: post.has_deadline,
        deadline: post.deadline,
        ai_detected: post.ai_detected,
        original_url: post.original_url,
    })
}

pub(crate) fn insert_reminder(
    conn: &Connection,
    user_id: i64,
    mut reminder: NewReminder,
    created_at: DateTime<Utc>,
) -> Result<ReminderRow> {
    reminder.due_date = timestamp::normalize(reminder.due_date);
    conn.execute(
        "INSERT INTO reminders (user_id, title, description, due_date, is_completed, is_urgent, created_at)
         VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)",
        params![
            user_id,
            reminder.title,
            reminder.description,
            timestamp::encode(&reminder.due_date),
            reminder.is_urgent,
            timestamp::encode(&created_at),
        ],
    )?;

    Ok(ReminderRow {
        id: conn.last_insert_rowid(),
        user_id,
        title: reminder.title,
        description: reminder.description,
        due_date: reminder.due_date,
        is_completed: false,
        is_urgent: reminder.is_urgent,
        created_at,
    })
}

pub(crate) fn insert_chat_message(
    conn: &Connection,
    user_id: i64,
    message: &str,
    is_user: bool,
    at: DateTime<Utc>,
) -> Result<ChatMessageRow> {
    conn.execute(
        "INSERT INTO chat_messages (user_id, message, is_user, timestamp) VALUES (?1, ?2, ?3, ?4)",
        params![user_id, message, is_user, timestamp::encode(&at)],
    )?;

    Ok(ChatMessageRow {
        id: conn.last_insert_rowid(),
        user_id,
        message: message.to_string(),
        is_user,
        timestamp: at,
    })
}

fn query_reminder(conn: &Connection, user_id: i64, reminder_id: i64) -> Result<Option<ReminderRow>> {
    let row = conn
        .query_row(
            &format!("SELECT {REMINDER_COLUMNS} FROM reminders WHERE id = ?1 AND user_id = ?2"),
            params![reminder_id, user_id],
            map_reminder,
        )
        .optional()?;
    Ok(row)
}

fn query_reminder_counts(conn: &Connection, user_id: i64) -> Result<ReminderCounts> {
    let (active, completed): (i64, i64) = conn.query_row(
        "SELECT COALESCE(SUM(CASE WHEN is_completed = 0 THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN is_completed = 0 THEN 0 ELSE 1 END), 0)
         FROM reminders WHERE user_id = ?1",
        [user_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(ReminderCounts { active, completed })
}

/// Batch-fetch tags for the given posts, preserving each post's tag order.
fn attach_tags(conn: &Connection, posts: &mut [SavedPostRow]) -> Result<()> {
    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    let mut by_post: HashMap<i64, Vec<String>> = HashMap::new();

    for batch in ids.chunks(TAG_BATCH) {
        let placeholders: Vec<String> = (1..=batch.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "SELECT post_id, tag FROM post_tags WHERE post_id IN ({}) ORDER BY post_id, position",
            placeholders.join(", ")
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(batch), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;
        for row in rows {
            let (post_id, tag) = row?;
            by_post.entry(post_id).or_default().push(tag);
        }
    }

    for post in posts.iter_mut() {
        post.tags = by_post.remove(&post.id).unwrap_or_default();
    }
    Ok(())
}

fn platform_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Platform> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn map_user(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        created_at: timestamp::column(row, 3)?,
        is_active: row.get(4)?,
    })
}

/// Tags are filled in afterwards by [`attach_tags`].
fn map_post(row: &Row<'_>) -> rusqlite::Result<SavedPostRow> {
    Ok(SavedPostRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        platform: platform_column(row, 2)?,
        title: row.get(3)?,
        summary: row.get(4)?,
        tags: Vec::new(),
        saved_at: timestamp::column(row, 5)?,
        has_deadline: row.get(6)?,
        deadline: timestamp::column_opt(row, 7)?,
        ai_detected: row.get(8)?,
        original_url: row.get(9)?,
    })
}

fn map_reminder(row: &Row<'_>) -> rusqlite::Result<ReminderRow> {
    Ok(ReminderRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        due_date: timestamp::column(row, 4)?,
        is_completed: row.get(5)?,
        is_urgent: row.get(6)?,
        created_at: timestamp::column(row, 7)?,
    })
}

fn map_chat_message(row: &Row<'_>) -> rusqlite::Result<ChatMessageRow> {
    Ok(ChatMessageRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        message: row.get(2)?,
        is_user: row.get(3)?,
        timestamp: timestamp::column(row, 4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(title: &str, platform: Platform, tags: &[&str]) -> NewSavedPost {
        NewSavedPost {
            platform,
            title: title.to_string(),
            summary: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            has_deadline: false,
            deadline: None,
            ai_detected: false,
            original_url: None,
        }
    }

    fn reminder(title: &str, due_in: Duration) -> NewReminder {
        NewReminder {
            title: title.to_string(),
            description: format!("{title} details"),
            due_date: timestamp::now() + due_in,
            is_urgent: false,
        }
    }

    fn two_users(db: &Database) -> (i64, i64) {
        let a = db.create_user("a@example.com", "A").unwrap().unwrap();
        let b = db.create_user("b@example.com", "B").unwrap().unwrap();
        (a.id, b.id)
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.create_user("a@example.com", "A").unwrap().is_some());
        assert!(db.create_user("a@example.com", "Other").unwrap().is_none());
    }

    #[test]
    fn current_user_is_created_once_then_reused() {
        let db = Database::open_in_memory().unwrap();
        let first = db.current_user().unwrap();
        assert_eq!(first.email, PLACEHOLDER_EMAIL);

        let again = db.current_user().unwrap();
        assert_eq!(again.id, first.id);
    }

    #[test]
    fn current_user_is_the_oldest_user() {
        let db = Database::open_in_memory().unwrap();
        let (a, _) = two_users(&db);
        assert_eq!(db.current_user().unwrap().id, a);
    }

    #[test]
    fn tags_round_trip_in_order() {
        let db = Database::open_in_memory().unwrap();
        let (a, _) = two_users(&db);
        db.create_post(a, post("p", Platform::Twitter, &["Zeta", "Alpha", "Mid"]))
            .unwrap();

        let page = db.post_page(a, None, 0, 100).unwrap();
        assert_eq!(page.posts[0].tags, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn category_filter_matches_tag_substrings_case_insensitively() {
        let db = Database::open_in_memory().unwrap();
        let (a, _) = two_users(&db);
        db.create_post(a, post("one", Platform::Linkedin, &["React", "Remote"])).unwrap();
        db.create_post(a, post("two", Platform::Youtube, &["Education"])).unwrap();
        db.create_post(a, post("three", Platform::Youtube, &[])).unwrap();

        let page = db.post_page(a, Some("rem"), 0, 100).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.posts[0].title, "one");

        let page = db.post_page(a, None, 0, 100).unwrap();
        assert_eq!(page.total, 3);
    }

    #[test]
    fn paging_does_not_change_total() {
        let db = Database::open_in_memory().unwrap();
        let (a, _) = two_users(&db);
        for i in 0..5 {
            db.create_post(a, post(&format!("p{i}"), Platform::Instagram, &["x"])).unwrap();
        }

        let page = db.post_page(a, None, 1, 2).unwrap();
        assert_eq!(page.total, 5);
        let titles: Vec<_> = page.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["p1", "p2"]);
    }

    #[test]
    fn posts_are_scoped_to_their_owner() {
        let db = Database::open_in_memory().unwrap();
        let (a, b) = two_users(&db);
        let owned = db.create_post(a, post("mine", Platform::Twitter, &["t"])).unwrap();

        assert_eq!(db.post_page(b, None, 0, 100).unwrap().total, 0);
        assert!(!db.delete_post(b, owned.id).unwrap());
        assert_eq!(db.post_page(a, None, 0, 100).unwrap().total, 1);

        assert!(db.delete_post(a, owned.id).unwrap());
        assert!(!db.delete_post(a, owned.id).unwrap());

        let orphaned_tags: i64 = db
            .with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM post_tags", [], |r| r.get(0))?))
            .unwrap();
        assert_eq!(orphaned_tags, 0);
    }

    #[test]
    fn partial_update_touches_only_given_fields() {
        let db = Database::open_in_memory().unwrap();
        let (a, b) = two_users(&db);
        let original = db.create_reminder(a, reminder("Essay", Duration::days(3))).unwrap();

        let changes = ReminderChanges {
            is_completed: Some(true),
            ..Default::default()
        };
        let updated = db.update_reminder(a, original.id, changes).unwrap().unwrap();
        assert!(updated.is_completed);

        let stored = db.list_reminders(a).unwrap().remove(0);
        assert!(stored.is_completed);
        assert_eq!(stored.title, original.title);
        assert_eq!(stored.description, original.description);
        assert_eq!(stored.due_date, original.due_date);

        let foreign = ReminderChanges {
            title: Some("hijacked".into()),
            ..Default::default()
        };
        assert!(db.update_reminder(b, original.id, foreign).unwrap().is_none());
        assert!(!db.delete_reminder(b, original.id).unwrap());
        assert_eq!(db.list_reminders(a).unwrap().len(), 1);
        assert_eq!(db.list_reminders(a).unwrap()[0].title, "Essay");
    }

    #[test]
    fn exchange_is_appended_in_order() {
        let db = Database::open_in_memory().unwrap();
        let (a, _) = two_users(&db);
        db.record_exchange(a, "hello", "hi there").unwrap();

        let messages = db.list_chat_messages(a).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_user);
        assert_eq!(messages[0].message, "hello");
        assert!(!messages[1].is_user);
        assert_eq!(messages[1].message, "hi there");
    }

    #[test]
    fn analytics_counts_and_caps_upcoming() {
        let db = Database::open_in_memory().unwrap();
        let (a, b) = two_users(&db);

        let mut flagged = post("hiring", Platform::Linkedin, &["Job", "Remote"]);
        flagged.ai_detected = true;
        db.create_post(a, flagged).unwrap();
        db.create_post(a, post("cat", Platform::Linkedin, &["Job"])).unwrap();
        db.create_post(a, post("vid", Platform::Youtube, &[])).unwrap();
        db.create_post(b, post("other", Platform::Twitter, &["Job"])).unwrap();

        for i in 0..7 {
            db.create_reminder(a, reminder(&format!("future {i}"), Duration::days(i + 1)))
                .unwrap();
        }
        let past = db.create_reminder(a, reminder("past", -Duration::days(1))).unwrap();
        let done = db.create_reminder(a, reminder("done", Duration::days(2))).unwrap();
        let changes = ReminderChanges {
            is_completed: Some(true),
            ..Default::default()
        };
        db.update_reminder(a, done.id, changes).unwrap();

        let snapshot = db.analytics(a, timestamp::now()).unwrap();
        assert_eq!(
            snapshot.posts_by_platform,
            vec![
                (Platform::Linkedin, 2),
                (Platform::Instagram, 0),
                (Platform::Youtube, 1),
                (Platform::Twitter, 0),
            ]
        );
        assert_eq!(
            snapshot.posts_by_tag,
            vec![("Job".to_string(), 2), ("Remote".to_string(), 1)]
        );
        assert_eq!(snapshot.total_posts, 3);
        assert_eq!(snapshot.ai_detected_posts, 1);
        assert_eq!(snapshot.upcoming_deadlines, 5);
        assert_eq!(snapshot.reminders, ReminderCounts { active: 8, completed: 1 });

        let total = db.list_reminders(a).unwrap().len() as i64;
        assert_eq!(snapshot.reminders.active + snapshot.reminders.completed, total);
        assert!(db.list_reminders(a).unwrap().iter().any(|r| r.id == past.id));
    }
}
