//! Usage: SQLite schema migrations (user_version + incremental upgrades).

mod v0_to_v1;

use rusqlite::Connection;

const LATEST_SCHEMA_VERSION: i64 = 1;

pub(super) fn apply_migrations(conn: &mut Connection) -> Result<(), String> {
    let mut user_version = read_user_version(conn)?;

    if !(0..=LATEST_SCHEMA_VERSION).contains(&user_version) {
        return Err(format!(
            "unsupported sqlite schema version: user_version={user_version} (expected 0..={LATEST_SCHEMA_VERSION})"
        ));
    }

    while user_version < LATEST_SCHEMA_VERSION {
        match user_version {
            0 => v0_to_v1::migrate_v0_to_v1(conn)?,
            v => {
                return Err(format!(
                    "unsupported sqlite schema version: user_version={v} (expected 0..={LATEST_SCHEMA_VERSION})"
                ))
            }
        }
        user_version = read_user_version(conn)?;
    }

    Ok(())
}

fn read_user_version(conn: &Connection) -> Result<i64, String> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| format!("failed to read sqlite user_version: {e}"))
}

fn set_user_version(tx: &rusqlite::Transaction<'_>, version: i64) -> Result<(), String> {
    tx.pragma_update(None, "user_version", version)
        .map_err(|e| format!("failed to update sqlite user_version: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_is_migrated_to_latest() {
        let mut conn = Connection::open_in_memory().expect("open in-memory sqlite");

        apply_migrations(&mut conn).expect("apply migrations");

        assert_eq!(
            read_user_version(&conn).expect("read user_version"),
            LATEST_SCHEMA_VERSION
        );

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'sessions'",
                [],
                |row| row.get(0),
            )
            .expect("count sessions table");
        assert_eq!(table_count, 1);
    }

    #[test]
    fn unversioned_database_with_existing_sessions_is_adopted() {
        let mut conn = Connection::open_in_memory().expect("open in-memory sqlite");

        conn.execute_batch(
            r#"
CREATE TABLE sessions (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  subject TEXT NOT NULL,
  start_time TEXT NOT NULL,
  end_time TEXT NOT NULL,
  notes TEXT,
  created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX idx_subject ON sessions(subject);
INSERT INTO sessions (name, subject, start_time, end_time) VALUES ('Old', 'History', '2023-05-01T08:00', '2023-05-01T09:00');
"#,
        )
        .expect("create legacy schema");

        apply_migrations(&mut conn).expect("apply migrations");

        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
            .expect("count sessions");
        assert_eq!(rows, 1);

        let has_start_time_index: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_start_time'",
                [],
                |row| row.get(0),
            )
            .expect("count start_time index");
        assert_eq!(has_start_time_index, 1);
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let mut conn = Connection::open_in_memory().expect("open in-memory sqlite");
        conn.pragma_update(None, "user_version", LATEST_SCHEMA_VERSION + 1)
            .expect("set user_version");

        let err = apply_migrations(&mut conn).expect_err("newer schema should fail");
        assert!(err.contains("unsupported sqlite schema version"));
    }

    #[test]
    fn migrations_are_noop_when_already_latest() {
        let mut conn = Connection::open_in_memory().expect("open in-memory sqlite");
        apply_migrations(&mut conn).expect("first run");
        apply_migrations(&mut conn).expect("second run");

        let index_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND tbl_name = 'sessions'",
                [],
                |row| row.get(0),
            )
            .expect("count indexes");
        assert_eq!(index_count, 2);
    }
}
