//! Demo fixtures for a fresh database.

use anyhow::Result;
use chrono::Duration;
use stash_types::models::Platform;
use tracing::{error, info};

use crate::Database;
use crate::models::{NewReminder, NewSavedPost};
use crate::queries::{insert_chat_message, insert_post, insert_reminder, insert_user, query_first_user};
use crate::timestamp;

pub const DEMO_EMAIL: &str = "demo@stashapp.com";
pub const DEMO_NAME: &str = "Demo User";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// At least one user existed; nothing was written.
    AlreadySeeded,
    Seeded {
        posts: usize,
        reminders: usize,
        messages: usize,
    },
}

struct PostFixture {
    platform: Platform,
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
    ai_detected: bool,
    deadline_days: Option<i64>,
}

const POSTS: &[PostFixture] = &[
    PostFixture {
        platform: Platform::Linkedin,
        title: "Senior React Developer at Tech Corp",
        summary: "Remote position with competitive salary and great benefits",
        tags: &["Job", "React", "Remote"],
        ai_detected: true,
        deadline_days: Some(7),
    },
    PostFixture {
        platform: Platform::Instagram,
        title: "48-Hour Code Challenge Starting Soon",
        summary: "Build the next big thing in tech with amazing prizes",
        tags: &["Hackathon", "Coding"],
        ai_detected: true,
        deadline_days: Some(3),
    },
    PostFixture {
        platform: Platform::Youtube,
        title: "Full Scholarship Program for CS Students",
        summary: "Apply now for full tuition coverage at top universities",
        tags: &["Scholarship", "Education"],
        ai_detected: false,
        deadline_days: Some(30),
    },
    PostFixture {
        platform: Platform::Twitter,
        title: "Machine Learning Study Group",
        summary: "Join our weekly ML study sessions and projects",
        tags: &["Study", "ML", "Group"],
        ai_detected: false,
        deadline_days: None,
    },
    PostFixture {
        platform: Platform::Linkedin,
        title: "Tech Conference 2024 - Early Bird Registration",
        summary: "Don't miss the biggest tech event of the year",
        tags: &["Events", "Conference", "Tech"],
        ai_detected: true,
        deadline_days: Some(14),
    },
];

// (title, description, due in days, urgent)
const REMINDERS: &[(&str, &str, i64, bool)] = &[
    (
        "Google Summer of Code Application",
        "Submit application for GSoC 2024 program",
        15,
        true,
    ),
    (
        "Tech Conference Registration",
        "Register for the annual tech conference",
        30,
        false,
    ),
    ("Portfolio Update", "Update portfolio with recent projects", 7, false),
    (
        "Scholarship Essay Submission",
        "Complete and submit scholarship essay",
        21,
        true,
    ),
];

// (text, from user, minutes ago)
const MESSAGES: &[(&str, bool, i64)] = &[
    (
        "Hi! I'm your AI assistant. How can I help you manage your saved content today?",
        false,
        30,
    ),
    ("Can you help me organize my job-related posts?", true, 25),
    (
        "Of course! I can see you have several job-related posts. Would you like me to create reminders for application deadlines?",
        false,
        24,
    ),
];

/// Populates an empty database with one demo user and their content. Does
/// nothing if any user already exists. Runs in a single transaction, so a
/// failure leaves the database untouched.
pub fn seed_demo_data(db: &Database) -> Result<SeedOutcome> {
    let result = db.with_transaction(|conn| {
        if query_first_user(conn)?.is_some() {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let now = timestamp::now();
        let user = insert_user(conn, DEMO_EMAIL, DEMO_NAME, now)?;

        for fixture in POSTS {
            let post = NewSavedPost {
                platform: fixture.platform,
                title: fixture.title.to_string(),
                summary: fixture.summary.to_string(),
                tags: fixture.tags.iter().map(|t| t.to_string()).collect(),
                has_deadline: fixture.deadline_days.is_some(),
                deadline: fixture.deadline_days.map(|days| now + Duration::days(days)),
                ai_detected: fixture.ai_detected,
                original_url: None,
            };
            insert_post(conn, user.id, post, now)?;
        }

        for &(title, description, due_days, is_urgent) in REMINDERS {
            let reminder = NewReminder {
                title: title.to_string(),
                description: description.to_string(),
                due_date: now + Duration::days(due_days),
                is_urgent,
            };
            insert_reminder(conn, user.id, reminder, now)?;
        }

        for &(text, is_user, minutes_ago) in MESSAGES {
            insert_chat_message(conn, user.id, text, is_user, now - Duration::minutes(minutes_ago))?;
        }

        Ok(SeedOutcome::Seeded {
            posts: POSTS.len(),
            reminders: REMINDERS.len(),
            messages: MESSAGES.len(),
        })
    });

    match &result {
        Ok(SeedOutcome::AlreadySeeded) => info!("Database already seeded"),
        Ok(SeedOutcome::Seeded { posts, reminders, messages }) => info!(
            "Seeded demo user {}: {} saved posts, {} reminders, {} chat messages",
            DEMO_EMAIL, posts, reminders, messages
        ),
        Err(e) => error!("Seeding failed, rolled back: {:#}", e),
    }

    result
}
