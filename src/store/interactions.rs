use std::path::PathBuf;

use crate::{error::AppResult, models::Interaction};

use super::json_file::JsonFile;

/// Append-only log of user interactions
pub struct InteractionStore {
    file: JsonFile,
}

impl InteractionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    /// Appends an interaction to the end of the log
    pub async fn append(&self, interaction: Interaction) -> AppResult<()> {
        let fragrance_id = interaction.fragrance_id.clone();
        let kind = interaction.kind;

        let total = self
            .file
            .update(|log: &mut Vec<Interaction>| {
                log.push(interaction);
                log.len()
            })
            .await?;

        tracing::info!(
            fragrance_id = %fragrance_id,
            kind = ?kind,
            total,
            "Interaction recorded"
        );

        Ok(())
    }

    /// Returns the full log in recording order
    pub async fn read_all(&self) -> AppResult<Vec<Interaction>> {
        self.file.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionKind;
    use tempfile::TempDir;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = InteractionStore::new(temp_dir.path().join("log.json"));
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.json");

        let store = InteractionStore::new(path.clone());
        assert_ok!(store.append(Interaction::new("a", InteractionKind::View)).await);
        assert_ok!(store.append(Interaction::new("b", InteractionKind::Click)).await);
        assert_ok!(store.append(Interaction::new("a", InteractionKind::Favorite)).await);

        // A fresh handle sees what the first one wrote
        let reopened = InteractionStore::new(path);
        let log = reopened.read_all().await.unwrap();
        let ids: Vec<&str> = log.iter().map(|i| i.fragrance_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a"]);
        assert_eq!(log[2].kind, InteractionKind::Favorite);
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = InteractionStore::new(path);
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let temp_dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(InteractionStore::new(temp_dir.path().join("log.json")));

        let mut tasks = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .append(Interaction::new(format!("f{i}"), InteractionKind::View))
                    .await
            }));
        }
        for task in tasks {
            assert_ok!(task.await.unwrap());
        }

        assert_eq!(store.read_all().await.unwrap().len(), 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_during_appends_never_shrink() {
        let temp_dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(InteractionStore::new(temp_dir.path().join("log.json")));

        const SEEDED: usize = 200;
        const APPENDS: usize = 100;
        for i in 0..SEEDED {
            let seeded = Interaction::new(format!("s{i}"), InteractionKind::View);
            assert_ok!(store.append(seeded).await);
        }

        let mut writers = Vec::new();
        for i in 0..APPENDS {
            let store = store.clone();
            writers.push(tokio::spawn(async move {
                store
                    .append(Interaction::new(format!("w{i}"), InteractionKind::Click))
                    .await
            }));
        }

        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                let mut last = 0;
                while last < SEEDED + APPENDS {
                    let len = store.read_all().await.unwrap().len();
                    assert!(len >= SEEDED, "read saw {len} records");
                    assert!(len >= last, "log shrank from {last} to {len}");
                    last = len;
                    tokio::task::yield_now().await;
                }
            })
        };

        for writer in writers {
            assert_ok!(writer.await.unwrap());
        }
        reader.await.unwrap();

        assert_eq!(store.read_all().await.unwrap().len(), SEEDED + APPENDS);
    }
}
