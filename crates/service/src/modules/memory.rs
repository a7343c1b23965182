use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::modules::domain::ModuleMap;
use crate::modules::store::ModuleStore;

/// Process-local module store with the same merge semantics as the file store.
#[derive(Clone, Default)]
pub struct InMemoryModuleStore {
    inner: Arc<RwLock<ModuleMap>>,
}

impl InMemoryModuleStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_entries(entries: ModuleMap) -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(entries)) })
    }
}

#[async_trait]
impl ModuleStore for InMemoryModuleStore {
    async fn get_all(&self) -> Result<ModuleMap, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn upsert(&self, entries: ModuleMap) -> Result<ModuleMap, ServiceError> {
        let mut map = self.inner.write().await;
        map.extend(entries);
        Ok(map.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::module_json;

    #[tokio::test]
    async fn upsert_then_get_all() -> Result<(), anyhow::Error> {
        let store = InMemoryModuleStore::new();
        assert!(store.get_all().await?.is_empty());

        let merged = store.upsert([("intro".to_string(), module_json("intro", "Intro"))].into()).await?;
        assert_eq!(merged.len(), 1);

        let merged = store.upsert([("intro".to_string(), module_json("intro", "Intro v2"))].into()).await?;
        assert_eq!(merged.len(), 1);
        assert_eq!(store.get_all().await?["intro"]["title"], "Intro v2");
        Ok(())
    }

    #[tokio::test]
    async fn seeded_entries_are_visible() -> Result<(), anyhow::Error> {
        let store = InMemoryModuleStore::with_entries([("a".to_string(), module_json("a", "A"))].into());
        let merged = store.upsert([("b".to_string(), module_json("b", "B"))].into()).await?;
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        Ok(())
    }
}
