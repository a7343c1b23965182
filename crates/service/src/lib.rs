//! Service layer for the module store.
//! - `storage` holds the generic JSON-file map.
//! - `modules` holds the domain types, the `ModuleStore` seam and request intake.
//! - `file` holds the production, file-backed store.

pub mod errors;
pub mod file;
pub mod modules;
pub mod runtime;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use file::module_store::FileModuleStore;
pub use modules::{
    domain::{Chapter, Module, ModuleMap},
    memory::InMemoryModuleStore,
    store::ModuleStore,
};
