//! Usage: Study session Tauri commands.

use crate::app_state::BridgeState;
use crate::{blocking, EMPTY_LIST_JSON};

#[tauri::command]
pub(crate) async fn createSession(
    bridge: tauri::State<'_, BridgeState>,
    json_text: String,
) -> Result<bool, String> {
    let bridge = bridge.0.clone();
    let created = blocking::run("createSession", move || Ok(bridge.create_session(&json_text)))
        .await
        .unwrap_or_else(|err| {
            tracing::warn!("{err}");
            false
        });
    Ok(created)
}

#[tauri::command]
pub(crate) async fn getAllSessions(
    bridge: tauri::State<'_, BridgeState>,
) -> Result<String, String> {
    let bridge = bridge.0.clone();
    let items = blocking::run("getAllSessions", move || Ok(bridge.get_all_sessions()))
        .await
        .unwrap_or_else(|err| {
            tracing::warn!("{err}");
            EMPTY_LIST_JSON.to_string()
        });
    Ok(items)
}

#[tauri::command]
pub(crate) async fn deleteSession(
    bridge: tauri::State<'_, BridgeState>,
    id: i64,
) -> Result<bool, String> {
    let bridge = bridge.0.clone();
    let deleted = blocking::run("deleteSession", move || Ok(bridge.delete_session(id)))
        .await
        .unwrap_or_else(|err| {
            tracing::warn!("{err}");
            false
        });
    Ok(deleted)
}
