//! Usage: Persisted application settings (schema + read/write helpers).

use crate::dnd::LinuxDndBackend;
use crate::shared::fs::{read_optional_file, write_file_atomic};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;
const SETTINGS_FILE_NAME: &str = "settings.json";
const DEFAULT_RESTORE_DND_ON_EXIT: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub schema_version: u32,
    // Turn DND back off on exit when this app turned it on.
    pub restore_dnd_on_exit: bool,
    // Linux only: probe just this backend instead of the built-in priority list.
    pub dnd_backend: Option<LinuxDndBackend>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            restore_dnd_on_exit: DEFAULT_RESTORE_DND_ON_EXIT,
            dnd_backend: None,
        }
    }
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILE_NAME)
}

fn parse_settings_json(content: &[u8]) -> Result<AppSettings, String> {
    let mut settings = serde_json::from_slice::<AppSettings>(content)
        .map_err(|e| format!("SETTINGS_INVALID: invalid settings.json: {e}"))?;

    if settings.schema_version > SCHEMA_VERSION {
        return Err(format!(
            "SETTINGS_INVALID: unsupported schema_version={} (expected <= {SCHEMA_VERSION})",
            settings.schema_version
        ));
    }
    settings.schema_version = SCHEMA_VERSION;
    Ok(settings)
}

/// Reads `settings.json` from `data_dir`. A missing file yields defaults, which are
/// written back best-effort so the file is discoverable.
pub fn read(data_dir: &Path) -> Result<AppSettings, String> {
    let path = settings_path(data_dir);

    let Some(content) = read_optional_file(&path)? else {
        let settings = AppSettings::default();
        if let Err(err) = write(data_dir, &settings) {
            tracing::warn!("failed to write default settings: {err}");
        }
        return Ok(settings);
    };

    parse_settings_json(&content)
}

/// Reads settings, falling back to defaults (with a warning) when the file is unreadable.
pub fn read_or_default(data_dir: &Path) -> AppSettings {
    read(data_dir).unwrap_or_else(|err| {
        tracing::warn!("settings read failed, using defaults: {err}");
        AppSettings::default()
    })
}

pub fn write(data_dir: &Path, settings: &AppSettings) -> Result<AppSettings, String> {
    let mut out = settings.clone();
    out.schema_version = SCHEMA_VERSION;

    let mut content = serde_json::to_vec_pretty(&out)
        .map_err(|e| format!("SETTINGS_WRITE: failed to serialize settings: {e}"))?;
    content.push(b'\n');

    write_file_atomic(&settings_path(data_dir), &content)?;
    Ok(out)
}
