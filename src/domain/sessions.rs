//! Usage: Study session records and their persistence (create / list / delete).

use crate::db::{SessionStore, StoreError};
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Caller-supplied fields of a session. `id` and `createdAt` are assigned by the store,
/// so they are ignored when present in the input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub name: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewSession {
    fn validate(&self) -> Result<(), StoreError> {
        let required = [
            ("name", &self.name),
            ("subject", &self.subject),
            ("startTime", &self.start_time),
            ("endTime", &self.end_time),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(StoreError::Invalid(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

fn row_to_session(row: &rusqlite::Row<'_>) -> Result<Session, rusqlite::Error> {
    Ok(Session {
        id: row.get("id")?,
        name: row.get("name")?,
        subject: row.get("subject")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        notes: row.get("notes")?,
        created_at: row.get::<_, Option<String>>("created_at")?.unwrap_or_default(),
    })
}

/// Inserts a session and returns the store-assigned id.
pub fn create(store: &SessionStore, input: &NewSession) -> Result<i64, StoreError> {
    input.validate()?;
    let conn = store.connection()?;

    conn.execute(
        r#"
INSERT INTO sessions (name, subject, start_time, end_time, notes)
VALUES (?1, ?2, ?3, ?4, ?5)
"#,
        params![
            input.name,
            input.subject,
            input.start_time,
            input.end_time,
            input.notes
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn list_all(store: &SessionStore) -> Result<Vec<Session>, StoreError> {
    let conn = store.connection()?;

    let mut stmt = conn.prepare(
        r#"
SELECT
  id,
  name,
  subject,
  start_time,
  end_time,
  notes,
  created_at
FROM sessions
ORDER BY start_time DESC, id DESC
"#,
    )?;

    let rows = stmt.query_map([], row_to_session)?;

    let mut items = Vec::new();
    for row in rows {
        items.push(row?);
    }

    Ok(items)
}

pub fn delete(store: &SessionStore, session_id: i64) -> Result<(), StoreError> {
    let conn = store.connection()?;

    let changed = conn.execute("DELETE FROM sessions WHERE id = ?1", params![session_id])?;
    if changed == 0 {
        return Err(StoreError::NotFound(session_id));
    }

    Ok(())
}
