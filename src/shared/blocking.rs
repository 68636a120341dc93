//! Usage: Run blocking work (SQLite, child processes) off the async runtime.

pub(crate) async fn run<T, F>(label: &'static str, f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(f)
        .await
        .map_err(|e| format!("TASK_JOIN: {label} task failed: {e}"))?
}
