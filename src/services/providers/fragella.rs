/// Fragella API provider
///
/// API Flow:
/// 1. Search: /api/v1/fragrances?search=<q>&limit=<n> → array of raw fragrance records
/// 2. Each record is normalized into a `Fragrance` via `From<RawFragrance>`
use crate::{
    error::{AppError, AppResult},
    models::{Fragrance, RawFragrance},
    services::providers::{CatalogProvider, MAX_SEARCH_LIMIT, MIN_QUERY_LEN},
};
use reqwest::Client as HttpClient;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct FragellaProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl FragellaProvider {
    /// Creates a new Fragella provider whose requests give up after `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/api/v1/fragrances", self.api_url.trim_end_matches('/'))
    }

    /// Converts the raw JSON array into fragrances, skipping records that do not parse
    fn parse_records(body: serde_json::Value) -> AppResult<Vec<Fragrance>> {
        let records = body.as_array().ok_or_else(|| {
            AppError::ExternalApi("Invalid Fragella response format".to_string())
        })?;

        Ok(records
            .iter()
            .filter_map(|record| {
                match serde_json::from_value::<RawFragrance>(record.clone()) {
                    Ok(raw) => Some(Fragrance::from(raw)),
                    Err(e) => {
                        tracing::debug!(error = %e, "Skipping malformed Fragella record");
                        None
                    }
                }
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl CatalogProvider for FragellaProvider {
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Fragrance>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(vec![]);
        }

        let limit = limit.min(MAX_SEARCH_LIMIT).to_string();

        let response = self
            .http_client
            .get(self.search_url())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("search", query), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Fragella API returned status {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let fragrances = Self::parse_records(body)?;

        tracing::info!(
            query = %query,
            results = fragrances.len(),
            provider = self.name(),
            "Catalog search completed"
        );

        Ok(fragrances)
    }

    fn name(&self) -> &'static str {
        "fragella"
    }
}
