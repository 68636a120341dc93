//! Usage: Tauri-managed state shared by `commands/*` plus window/signal helpers.

use crate::{AppSettings, Bridge};
use std::sync::Arc;
use tauri::Manager;

const MAIN_WINDOW_LABEL: &str = "main";

pub(crate) struct BridgeState(pub(crate) Arc<Bridge>);

pub(crate) struct SettingsState(pub(crate) AppSettings);

pub(crate) fn focus_main_window(app: &tauri::AppHandle) {
    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::warn!("main window not found");
        return;
    };
    let _ = window.unminimize();
    let _ = window.show();
    let _ = window.set_focus();
}

/// Ctrl-C in the launching terminal goes through the same exit path as closing the window.
pub(crate) fn spawn_ctrl_c_watcher(app: tauri::AppHandle) {
    tauri::async_runtime::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Ctrl-C received, requesting exit");
                app.exit(0);
            }
            Err(err) => tracing::warn!("Ctrl-C handler unavailable: {err}"),
        }
    });
}
