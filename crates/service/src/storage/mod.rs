//! Storage abstractions for service layer
//!
//! Contains the reusable file-backed map store that persists a whole
//! string-keyed map as one pretty-printed JSON object.

pub mod json_map_store;
