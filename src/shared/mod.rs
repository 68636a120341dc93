//! Usage: Cross-cutting utilities shared across layers (low-level helpers).

#[cfg(feature = "desktop")]
pub(crate) mod blocking;
pub(crate) mod fs;
pub(crate) mod mutex_ext;
