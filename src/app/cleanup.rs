//! Usage: Best-effort cleanup hook for the exit path (DND restore, database close).

use super::app_state::{BridgeState, SettingsState};
use crate::blocking;
use std::sync::atomic::{AtomicBool, Ordering};
use tauri::Manager;

static CLEANUP_STARTED: AtomicBool = AtomicBool::new(false);

pub(crate) async fn cleanup_before_exit(app: &tauri::AppHandle) {
    if CLEANUP_STARTED.swap(true, Ordering::SeqCst) {
        return;
    }

    let Some(bridge) = app.try_state::<BridgeState>().map(|s| s.0.clone()) else {
        return;
    };
    let restore_dnd = app
        .try_state::<SettingsState>()
        .map(|s| s.0.restore_dnd_on_exit)
        .unwrap_or(true);

    let result = blocking::run("cleanup_before_exit", move || {
        if restore_dnd && bridge.dnd_active() && !bridge.disable_do_not_disturb() {
            tracing::warn!("exit cleanup: failed to turn DND back off");
        }
        if !bridge.close_database() {
            tracing::warn!("exit cleanup: database close failed");
        }
        Ok(())
    })
    .await;

    match result {
        Ok(()) => tracing::info!("exit cleanup finished"),
        Err(err) => tracing::warn!("exit cleanup task failed: {err}"),
    }
}
