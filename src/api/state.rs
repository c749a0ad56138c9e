use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    services::{providers::CatalogProvider, Catalog},
    store::{InteractionStore, InventoryStore},
};

/// Shared application state
///
/// Per-user session data (filters, questionnaire answers, the fragrance being
/// viewed) is not kept here; it arrives with each request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub catalog: Arc<RwLock<Catalog>>,
    pub interactions: Arc<InteractionStore>,
    pub inventory: Arc<InventoryStore>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        catalog: Catalog,
        interactions: InteractionStore,
        inventory: InventoryStore,
    ) -> Self {
        Self {
            provider,
            catalog: Arc::new(RwLock::new(catalog)),
            interactions: Arc::new(interactions),
            inventory: Arc::new(inventory),
        }
    }
}
