//! Usage: Resolve the per-user app data directory (`<data dir>/TheHQProject`).

use std::path::{Path, PathBuf};
use tauri::Manager;

pub const APP_DIR_NAME: &str = "TheHQProject";
const APP_DIR_NAME_ENV: &str = "HQ_PROJECT_DATA_DIR_NAME";

fn is_safe_dir_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

fn dir_name_from_env(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| is_safe_dir_name(v))
        .unwrap_or_else(|| APP_DIR_NAME.to_string())
}

fn ensure_dir(base: &Path, name: &str) -> Result<PathBuf, String> {
    let dir = base.join(name);
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("APP_DIR: failed to create {}: {e}", dir.display()))?;
    Ok(dir)
}

pub fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    let base = app
        .path()
        .data_dir()
        .map_err(|e| format!("APP_DIR: failed to resolve data dir: {e}"))?;

    ensure_dir(&base, &dir_name_from_env(std::env::var(APP_DIR_NAME_ENV).ok()))
}
