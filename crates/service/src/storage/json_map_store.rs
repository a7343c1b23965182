use std::{
    collections::BTreeMap,
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::Mutex};

use crate::errors::ServiceError;

/// Generic JSON file-backed string-keyed map.
///
/// The file on disk is the only copy of the data: every read goes back to the
/// file and every merge rewrites it in full. Merges issued through the same
/// instance are serialised; writers in other processes are not.
pub struct JsonMapStore<V> {
    file_path: PathBuf,
    write_lock: Mutex<()>,
    _value: PhantomData<fn() -> V>,
}

impl<V> JsonMapStore<V>
where
    V: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), write_lock: Mutex::new(()), _value: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Create the parent directory and an empty `{}` file if either is missing.
    pub async fn ensure_initialized(&self) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Write(format!("cannot create {}: {e}", parent.display())))?;
        }

        match fs::metadata(&self.file_path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => self.write_map(&BTreeMap::new()).await,
            Err(e) => Err(ServiceError::Read(format!("{}: {e}", self.file_path.display()))),
        }
    }

    /// Read the whole map. A missing file or whitespace-only content is an empty map.
    ///
    /// Waits for any in-flight merge so a half-written file is never observed.
    pub async fn read_all(&self) -> Result<BTreeMap<String, V>, ServiceError> {
        let _guard = self.write_lock.lock().await;
        self.read_unlocked().await
    }

    async fn read_unlocked(&self) -> Result<BTreeMap<String, V>, ServiceError> {
        let content = match fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(ServiceError::Read(format!("{}: {e}", self.file_path.display()))),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| ServiceError::Parse(format!("{}: {e}", self.file_path.display())))
    }

    /// Shallow-merge `entries` over the stored map, rewrite the file and return the result.
    pub async fn merge(&self, entries: BTreeMap<String, V>) -> Result<BTreeMap<String, V>, ServiceError> {
        let _guard = self.write_lock.lock().await;
        self.ensure_initialized().await?;
        let mut merged = self.read_unlocked().await?;
        merged.extend(entries);
        self.write_map(&merged).await?;
        Ok(merged)
    }

    async fn write_map(&self, map: &BTreeMap<String, V>) -> Result<(), ServiceError> {
        let data = serde_json::to_string_pretty(map).map_err(|e| ServiceError::Write(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Write(format!("{}: {e}", self.file_path.display())))
    }
}
