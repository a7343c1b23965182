//! File-backed implementations of the service traits.

pub mod module_store;
