pub mod interactions;
pub mod inventory;
mod json_file;

pub use interactions::InteractionStore;
pub use inventory::{AddOutcome, InventoryStore};

use std::path::Path;

use crate::error::AppResult;

const INTERACTIONS_FILE: &str = "user_interactions.json";
const INVENTORY_FILE: &str = "user_perfume_inventory.json";

/// Opens both JSON stores under `data_dir`, creating the directory if needed
pub async fn open(data_dir: &Path) -> AppResult<(InteractionStore, InventoryStore)> {
    tokio::fs::create_dir_all(data_dir).await?;

    let interactions = InteractionStore::new(data_dir.join(INTERACTIONS_FILE));
    let inventory = InventoryStore::new(data_dir.join(INVENTORY_FILE));

    tracing::info!(data_dir = %data_dir.display(), "Opened JSON stores");

    Ok((interactions, inventory))
}
