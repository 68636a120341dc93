//! Usage: Domain logic over the persistence layer.

pub(crate) mod sessions;
