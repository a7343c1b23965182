//! Modules: the content units managed through the admin form.

pub mod domain;
pub mod intake;
pub mod memory;
pub mod store;
