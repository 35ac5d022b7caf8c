use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (initial schema)");
        conn.execute_batch(
            "
            CREATE TABLE users (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                email       TEXT NOT NULL UNIQUE,
                name        TEXT NOT NULL,
                created_at  TEXT NOT NULL,
                is_active   INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE saved_posts (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id       INTEGER NOT NULL REFERENCES users(id),
                platform      TEXT NOT NULL
                    CHECK (platform IN ('linkedin', 'instagram', 'youtube', 'twitter')),
                title         TEXT NOT NULL,
                summary       TEXT NOT NULL,
                saved_at      TEXT NOT NULL,
                has_deadline  INTEGER NOT NULL DEFAULT 0,
                deadline      TEXT,
                ai_detected   INTEGER NOT NULL DEFAULT 0,
                original_url  TEXT
            );

            CREATE INDEX idx_saved_posts_user ON saved_posts(user_id);

            -- Tags keep their submitted order through `position`.
            CREATE TABLE post_tags (
                post_id   INTEGER NOT NULL REFERENCES saved_posts(id) ON DELETE CASCADE,
                position  INTEGER NOT NULL,
                tag       TEXT NOT NULL,
                PRIMARY KEY (post_id, position)
            );

            CREATE TABLE reminders (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id       INTEGER NOT NULL REFERENCES users(id),
                title         TEXT NOT NULL,
                description   TEXT NOT NULL,
                due_date      TEXT NOT NULL,
                is_completed  INTEGER NOT NULL DEFAULT 0,
                is_urgent     INTEGER NOT NULL DEFAULT 0,
                created_at    TEXT NOT NULL
            );

            CREATE INDEX idx_reminders_user_due ON reminders(user_id, due_date);

            CREATE TABLE chat_messages (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id    INTEGER NOT NULL REFERENCES users(id),
                message    TEXT NOT NULL,
                is_user    INTEGER NOT NULL,
                timestamp  TEXT NOT NULL
            );

            CREATE INDEX idx_chat_messages_user ON chat_messages(user_id, timestamp);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rerunning_is_a_no_op() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();
        run(&conn).unwrap();

        let versions: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |r| r.get(0))
            .unwrap();
        assert_eq!(versions, 1);
    }
}
