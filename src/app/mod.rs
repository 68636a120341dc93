//! Usage: Application layer (logging bootstrap, Tauri-managed state, exit cleanup).

#[cfg(feature = "desktop")]
pub(crate) mod app_state;
#[cfg(feature = "desktop")]
pub(crate) mod cleanup;
pub mod logging;
