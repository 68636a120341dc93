//! Usage: Infrastructure adapters (filesystem paths, persistence, OS integration).

#[cfg(feature = "desktop")]
pub(crate) mod app_paths;
pub(crate) mod db;
pub(crate) mod dnd;
pub mod settings;
