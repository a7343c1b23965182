use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::modules::domain::ModuleMap;

/// Storage seam for the module store.
/// Implementations can be file-backed (production) or in-memory (tests).
#[async_trait]
pub trait ModuleStore: Send + Sync {
    /// Every stored module keyed by slug. An empty store is `Ok` with an empty map.
    async fn get_all(&self) -> Result<ModuleMap, ServiceError>;

    /// Shallow-merge `entries` over the store (same key replaces the whole record)
    /// and return the full merged map.
    async fn upsert(&self, entries: ModuleMap) -> Result<ModuleMap, ServiceError>;
}
