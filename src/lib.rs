mod app;
mod bridge;
#[cfg(feature = "desktop")]
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use domain::sessions;
pub(crate) use infra::{db, dnd};

#[cfg(feature = "desktop")]
pub(crate) use app::{app_state, cleanup};
#[cfg(feature = "desktop")]
pub(crate) use infra::app_paths;
#[cfg(feature = "desktop")]
pub(crate) use shared::blocking;

pub use app::logging;
pub use infra::settings;
pub use bridge::{Bridge, BridgeError, EMPTY_LIST_JSON};
pub use db::{SessionStore, StoreError, DB_FILE_NAME};
pub use dnd::{
    CommandRunner, DndController, DndError, DndStrategy, HostProbe, LinuxDndBackend, Platform,
    ShellCommand, SystemHost, SystemRunner,
};
pub use sessions::{NewSession, Session};
pub use settings::AppSettings;

#[cfg(feature = "desktop")]
use app_state::{BridgeState, SettingsState};
#[cfg(feature = "desktop")]
use commands::*;
#[cfg(feature = "desktop")]
use std::sync::Arc;
#[cfg(feature = "desktop")]
use tauri::Manager;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default().plugin(tauri_plugin_opener::init());

    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
        app_state::focus_main_window(app);
    }));

    let app = builder
        .setup(|app| {
            let data_dir = app_paths::app_data_dir(app.handle())?;
            logging::init(&data_dir.join(logging::LOG_DIR_NAME));
            tracing::info!(dir = %data_dir.display(), "app data dir resolved");

            let settings = settings::read_or_default(&data_dir);
            let bridge = Arc::new(Bridge::new(
                SessionStore::new(),
                DndController::for_current_platform(settings.dnd_backend),
            ));
            tracing::info!(strategy = ?bridge.dnd_strategy(), "DND strategy selected");

            if !bridge.initialize_database(&data_dir.join(DB_FILE_NAME)) {
                tracing::error!("database unavailable; session operations will fail");
            }

            app.manage(BridgeState(bridge));
            app.manage(SettingsState(settings));

            app_state::spawn_ctrl_c_watcher(app.handle().clone());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            createSession,
            getAllSessions,
            deleteSession,
            enableDoNotDisturb,
            disableDoNotDisturb
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::ExitRequested { api, .. } = &event {
            tracing::info!("exit requested, running cleanup");
            api.prevent_exit();

            let app_handle = app_handle.clone();
            tauri::async_runtime::spawn(async move {
                cleanup::cleanup_before_exit(&app_handle).await;
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                std::process::exit(0);
            });
        }
    });
}
