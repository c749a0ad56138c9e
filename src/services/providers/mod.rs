//! Fragrance catalog provider abstraction
//!
//! The catalog lives in a third-party API. Providers fetch raw records and hand
//! back normalized [`Fragrance`] values, so nothing downstream sees the API's
//! field layout.
use crate::{error::AppResult, models::Fragrance};

pub mod fragella;

/// Maximum number of records a single search may return
pub const MAX_SEARCH_LIMIT: usize = 20;

/// Queries shorter than this are not sent to the catalog
pub const MIN_QUERY_LEN: usize = 3;

/// Trait for fragrance catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog by name, brand or note
    ///
    /// At most `min(limit, MAX_SEARCH_LIMIT)` records are returned. A single
    /// attempt is made; timeouts surface as errors.
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Fragrance>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
