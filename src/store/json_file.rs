use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::error::AppResult;

/// A JSON array persisted in a single file
///
/// Every mutation is a read-modify-write of the whole file under the write
/// half of `lock`; readers take the read half. New content goes to a sibling
/// file that is renamed over the original, so the file on disk is always a
/// complete document.
pub(crate) struct JsonFile {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is empty; an unreadable one is
    /// logged and treated as empty.
    pub(crate) async fn read_all<T: DeserializeOwned>(&self) -> AppResult<Vec<T>> {
        let _guard = self.lock.read().await;
        self.load().await
    }

    /// Applies `mutate` to the current records and writes the result back
    pub(crate) async fn update<T, R, F>(&self, mutate: F) -> AppResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let _guard = self.lock.write().await;

        let mut records = self.load::<T>().await?;
        let result = mutate(&mut records);
        self.store(&records).await?;

        Ok(result)
    }

    async fn load<T: DeserializeOwned>(&self) -> AppResult<Vec<T>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Corrupt JSON store, treating as empty"
                );
                Ok(vec![])
            }
        }
    }

    /// Writes the sibling `.tmp` file, then renames it into place
    async fn store<T: Serialize>(&self, records: &[T]) -> AppResult<()> {
        let content = serde_json::to_string_pretty(records)?;

        let staging = self.staging_path();
        tokio::fs::write(&staging, content).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
