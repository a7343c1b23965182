use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::modules::domain::ModuleMap;
use crate::modules::store::ModuleStore;
use crate::storage::json_map_store::JsonMapStore;

/// Module store persisted as one pretty-printed JSON object (`data/modules.json` by default).
pub struct FileModuleStore {
    store: JsonMapStore<Value>,
}

impl FileModuleStore {
    /// Open the store at `path`, creating the directory and an empty `{}` file if needed.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::new(path);
        store.ensure_initialized().await?;
        info!(path = %store.path().display(), "module store ready");
        Ok(Arc::new(Self { store }))
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub async fn get_all(&self) -> Result<ModuleMap, ServiceError> {
        self.store.read_all().await
    }

    pub async fn upsert(&self, entries: ModuleMap) -> Result<ModuleMap, ServiceError> {
        let count = entries.len();
        let merged = self.store.merge(entries).await?;
        debug!(count, total = merged.len(), "modules merged into store");
        Ok(merged)
    }
}

#[async_trait]
impl ModuleStore for FileModuleStore {
    async fn get_all(&self) -> Result<ModuleMap, ServiceError> { self.get_all().await }
    async fn upsert(&self, entries: ModuleMap) -> Result<ModuleMap, ServiceError> { self.upsert(entries).await }
}
