//! Usage: UI-facing bridge over the session store and DND controller.
//!
//! Every operation returns a well-formed value: failures are logged and collapsed to
//! `false` (or `"[]"` for the session list) so nothing escapes to the webview.

use crate::db::{SessionStore, StoreError};
use crate::dnd::{DndController, DndStrategy};
use crate::sessions::{self, NewSession};
use crate::shared::mutex_ext::MutexExt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub const EMPTY_LIST_JSON: &str = "[]";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("BRIDGE_JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("BRIDGE_JSON: expected a JSON object, got {0}")]
    NotObject(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Bridge {
    store: Mutex<SessionStore>,
    dnd: DndController,
    dnd_active: AtomicBool,
}

impl Bridge {
    pub fn new(store: SessionStore, dnd: DndController) -> Self {
        Self {
            store: Mutex::new(store),
            dnd,
            dnd_active: AtomicBool::new(false),
        }
    }

    pub fn initialize_database(&self, path: &Path) -> bool {
        let mut store = self.store.lock_or_recover();
        match store.initialize(path) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(path = %path.display(), "database initialization failed: {err}");
                false
            }
        }
    }

    pub fn close_database(&self) -> bool {
        let mut store = self.store.lock_or_recover();
        match store.close() {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("database close failed: {err}");
                false
            }
        }
    }

    pub fn create_session(&self, json_text: &str) -> bool {
        match self.try_create_session(json_text) {
            Ok(id) => {
                tracing::debug!(session_id = id, "session created");
                true
            }
            Err(err) => {
                tracing::warn!("createSession failed: {err}");
                false
            }
        }
    }

    fn try_create_session(&self, json_text: &str) -> Result<i64, BridgeError> {
        let value: serde_json::Value = serde_json::from_str(json_text)?;
        if !value.is_object() {
            return Err(BridgeError::NotObject(json_kind(&value)));
        }
        let input: NewSession = serde_json::from_value(value)?;
        let store = self.store.lock_or_recover();
        Ok(sessions::create(&store, &input)?)
    }

    pub fn get_all_sessions(&self) -> String {
        self.try_get_all_sessions().unwrap_or_else(|err| {
            tracing::warn!("getAllSessions failed: {err}");
            EMPTY_LIST_JSON.to_string()
        })
    }

    fn try_get_all_sessions(&self) -> Result<String, BridgeError> {
        let items = {
            let store = self.store.lock_or_recover();
            sessions::list_all(&store)?
        };
        Ok(serde_json::to_string(&items)?)
    }

    pub fn delete_session(&self, id: i64) -> bool {
        let store = self.store.lock_or_recover();
        match sessions::delete(&store, id) {
            Ok(()) => true,
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(session_id = id, "deleteSession: nothing to delete");
                false
            }
            Err(err) => {
                tracing::warn!(session_id = id, "deleteSession failed: {err}");
                false
            }
        }
    }

    pub fn enable_do_not_disturb(&self) -> bool {
        self.set_do_not_disturb(true)
    }

    pub fn disable_do_not_disturb(&self) -> bool {
        self.set_do_not_disturb(false)
    }

    fn set_do_not_disturb(&self, enabled: bool) -> bool {
        match self.dnd.set_do_not_disturb(enabled) {
            Ok(mechanism) => {
                tracing::info!(mechanism = mechanism, enabled, "DND state applied");
                self.dnd_active.store(enabled, Ordering::Relaxed);
                true
            }
            Err(err) => {
                tracing::warn!(enabled, "DND toggle failed: {err}");
                false
            }
        }
    }

    pub fn dnd_strategy(&self) -> &DndStrategy {
        self.dnd.strategy()
    }

    /// Whether the last successful DND call from this bridge enabled it.
    pub fn dnd_active(&self) -> bool {
        self.dnd_active.load(Ordering::Relaxed)
    }
}

// Derived struct deserialization also accepts positional arrays.
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
