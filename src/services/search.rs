use serde::Serialize;

use crate::{models::Fragrance, services::providers::CatalogProvider};

/// Outcome of a catalog search
///
/// A provider failure never escapes as an error: the results are empty and
/// the failure is described in `error` for the caller to report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<Fragrance>,
    pub error: Option<String>,
}

/// Searches the catalog provider, degrading failures into an empty outcome
pub async fn search_catalog(
    provider: &dyn CatalogProvider,
    query: &str,
    limit: usize,
) -> SearchOutcome {
    match provider.search(query, limit).await {
        Ok(results) => SearchOutcome {
            results,
            error: None,
        },
        Err(e) => {
            tracing::warn!(
                query = %query,
                provider = provider.name(),
                error = %e,
                "Catalog search failed, returning no results"
            );
            SearchOutcome {
                results: vec![],
                error: Some(e.to_string()),
            }
        }
    }
}
