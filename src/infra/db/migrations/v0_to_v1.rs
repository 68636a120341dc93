//! Usage: SQLite migration v0->v1 (sessions table + indexes).

use rusqlite::Connection;

pub(super) fn migrate_v0_to_v1(conn: &mut Connection) -> Result<(), String> {
    const VERSION: i64 = 1;
    let tx = conn
        .transaction()
        .map_err(|e| format!("failed to start sqlite transaction: {e}"))?;

    // `IF NOT EXISTS` adopts database files written before user_version was tracked.
    tx.execute_batch(
        r#"
CREATE TABLE IF NOT EXISTS sessions (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  subject TEXT NOT NULL,
  start_time TEXT NOT NULL,
  end_time TEXT NOT NULL,
  notes TEXT,
  created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_subject ON sessions(subject);
CREATE INDEX IF NOT EXISTS idx_start_time ON sessions(start_time);
"#,
    )
    .map_err(|e| format!("failed to migrate v0->v1: {e}"))?;

    super::set_user_version(&tx, VERSION)?;

    tx.commit()
        .map_err(|e| format!("failed to commit migration: {e}"))?;

    Ok(())
}
