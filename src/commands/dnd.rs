//! Usage: Do Not Disturb Tauri commands.

use crate::app_state::BridgeState;
use crate::blocking;

async fn toggle(bridge: &BridgeState, enabled: bool) -> bool {
    let bridge = bridge.0.clone();
    let label = if enabled {
        "enableDoNotDisturb"
    } else {
        "disableDoNotDisturb"
    };
    blocking::run(label, move || {
        Ok(if enabled {
            bridge.enable_do_not_disturb()
        } else {
            bridge.disable_do_not_disturb()
        })
    })
    .await
    .unwrap_or_else(|err| {
        tracing::warn!("{err}");
        false
    })
}

#[tauri::command]
pub(crate) async fn enableDoNotDisturb(
    bridge: tauri::State<'_, BridgeState>,
) -> Result<bool, String> {
    Ok(toggle(bridge.inner(), true).await)
}

#[tauri::command]
pub(crate) async fn disableDoNotDisturb(
    bridge: tauri::State<'_, BridgeState>,
) -> Result<bool, String> {
    Ok(toggle(bridge.inner(), false).await)
}
