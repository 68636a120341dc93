//! Usage: Tauri command handlers exposed to the webview (names match the UI's invoke calls).
#![allow(non_snake_case)]

mod dnd;
mod sessions;

pub(crate) use dnd::*;
pub(crate) use sessions::*;
