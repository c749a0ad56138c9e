use serde::Serialize;
use std::path::PathBuf;

use crate::{
    error::{AppError, AppResult},
    models::Fragrance,
};

use super::json_file::JsonFile;

/// Result of adding a fragrance to the inventory
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AddOutcome {
    Added,
    /// A fragrance with the same identifier is already in the inventory; nothing changed
    Duplicate,
}

/// The user's personal fragrance collection
pub struct InventoryStore {
    file: JsonFile,
}

impl InventoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub async fn read_all(&self) -> AppResult<Vec<Fragrance>> {
        self.file.read_all().await
    }

    /// Appends a fragrance unless its identifier is already present
    ///
    /// The duplicate check and the append happen under the same write lock.
    pub async fn add(&self, fragrance: Fragrance) -> AppResult<AddOutcome> {
        let fragrance_id = fragrance.id.clone();

        let outcome = self
            .file
            .update(|inventory: &mut Vec<Fragrance>| {
                if inventory.iter().any(|f| f.id == fragrance.id) {
                    AddOutcome::Duplicate
                } else {
                    inventory.push(fragrance);
                    AddOutcome::Added
                }
            })
            .await?;

        tracing::info!(
            fragrance_id = %fragrance_id,
            outcome = ?outcome,
            path = %self.file.path().display(),
            "Inventory add"
        );

        Ok(outcome)
    }

    /// Removes and returns the fragrance at `index`
    pub async fn remove_at(&self, index: usize) -> AppResult<Fragrance> {
        let removed = self
            .file
            .update(|inventory: &mut Vec<Fragrance>| {
                (index < inventory.len()).then(|| inventory.remove(index))
            })
            .await?;

        removed.ok_or_else(|| AppError::NotFound(format!("No inventory entry at index {}", index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::popularity::tests::fragrance;
    use tempfile::TempDir;
    use tokio_test::assert_err;

    fn create_test_store(temp_dir: &TempDir) -> InventoryStore {
        InventoryStore::new(temp_dir.path().join("inventory.json"))
    }

    #[tokio::test]
    async fn test_add_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        assert_eq!(store.add(fragrance("a")).await.unwrap(), AddOutcome::Added);
        assert_eq!(store.add(fragrance("b")).await.unwrap(), AddOutcome::Added);

        let ids: Vec<String> = store
            .read_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_duplicate_add_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.add(fragrance("a")).await.unwrap();
        let mut changed = fragrance("a");
        changed.price = 1.0;

        assert_eq!(store.add(changed).await.unwrap(), AddOutcome::Duplicate);
        let inventory = store.read_all().await.unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].price, 100.0);
    }

    #[tokio::test]
    async fn test_remove_at() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        for id in ["a", "b", "c"] {
            store.add(fragrance(id)).await.unwrap();
        }

        let removed = store.remove_at(1).await.unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(store.read_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        store.add(fragrance("a")).await.unwrap();

        let result = store.remove_at(5).await;
        assert_err!(&result);
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.read_all().await.unwrap().len(), 1);
    }

    #[test]
    fn test_add_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&AddOutcome::Duplicate).unwrap(),
            "\"duplicate\""
        );
    }
}
