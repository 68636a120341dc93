//! Usage: SQLite connection lifecycle (open/close), schema migrations, and store error kinds.

mod migrations;

use rusqlite::{Connection, ErrorCode};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DB_FILE_NAME: &str = "app.db";
const BUSY_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DB_CLOSED: database is not open")]
    Closed,
    #[error("DB_OPEN: failed to open sqlite db at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("DB_CREATE_DIR: failed to create {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("DB_MIGRATION: {0}")]
    Migration(String),
    #[error("SEC_INVALID_INPUT: {0}")]
    Invalid(String),
    #[error("DB_CONSTRAINT: {0}")]
    Constraint(String),
    #[error("DB_NOT_FOUND: session id={0} not found")]
    NotFound(i64),
    #[error("DB_ERROR: {0}")]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Self::Constraint(err.to_string()),
            _ => Self::Sqlite(err),
        }
    }
}

/// Owns the single connection to the sessions database.
///
/// A store starts closed; `initialize` opens it and `close` releases it again.
#[derive(Debug, Default)]
pub struct SessionStore {
    conn: Option<Connection>,
    path: Option<PathBuf>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.initialize(path)?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let mut conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".to_string(),
            source,
        })?;
        migrations::apply_migrations(&mut conn).map_err(StoreError::Migration)?;
        Ok(Self {
            conn: Some(conn),
            path: None,
        })
    }

    /// Opens (creating if needed) the database at `path` and applies the schema.
    ///
    /// Calling it again reopens the connection; existing rows are kept.
    pub fn initialize(&mut self, path: &Path) -> Result<(), StoreError> {
        self.close()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let path_hint = path.to_string_lossy().to_string();
        let mut conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path_hint.clone(),
            source,
        })?;

        conn.busy_timeout(BUSY_TIMEOUT)
            .and_then(|_| configure_connection(&conn))
            .map_err(|source| StoreError::Open {
                path: path_hint.clone(),
                source,
            })?;

        migrations::apply_migrations(&mut conn)
            .map_err(|e| StoreError::Migration(format!("sqlite migration failed at {path_hint}: {e}")))?;

        tracing::info!(path = %path_hint, "session database opened");
        self.conn = Some(conn);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), StoreError> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };

        if let Err((conn, err)) = conn.close() {
            // Keep the handle so a later close can retry the flush.
            self.conn = Some(conn);
            return Err(StoreError::Sqlite(err));
        }

        if let Some(path) = self.path.as_deref() {
            tracing::info!(path = %path.display(), "session database closed");
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn connection(&self) -> Result<&Connection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::Closed)
    }
}

fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
PRAGMA journal_mode = WAL;
"#,
    )?;

    Ok(())
}
