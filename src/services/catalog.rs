use crate::{
    models::{Fragrance, SearchFilters},
    services::providers::{CatalogProvider, MAX_SEARCH_LIMIT},
};

/// Stop seeding once the snapshot holds this many fragrances
const SEED_TARGET: usize = 300;

/// Popular brands and notes used to populate a varied starting catalog
const SEED_TERMS: &[&str] = &[
    // Brands
    "Dior", "Chanel", "Gucci", "Versace", "Tom Ford",
    "Prada", "Armani", "Yves Saint Laurent", "Givenchy", "Burberry",
    "Dolce Gabbana", "Calvin Klein", "Hugo Boss", "Valentino", "Hermes",
    // Notes and families
    "Rose", "Oud", "Vanilla", "Lavender", "Jasmine",
    "Citrus", "Sandalwood", "Amber", "Musk", "Bergamot",
];

/// The session's snapshot of normalized catalog fragrances
///
/// Insertion order is preserved and identifiers are unique: when two records
/// share an identifier the first one seen wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Fragrance>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds fragrances whose identifiers are not yet present, returning how many were added
    pub fn merge(&mut self, fragrances: impl IntoIterator<Item = Fragrance>) -> usize {
        let before = self.items.len();
        for fragrance in fragrances {
            if self.get(&fragrance.id).is_none() {
                self.items.push(fragrance);
            }
        }
        self.items.len() - before
    }

    /// Merges search results and returns the catalog's entry for each distinct
    /// identifier, in the order the results first mention them
    pub fn merge_resolved(&mut self, fragrances: Vec<Fragrance>) -> Vec<Fragrance> {
        let mut ids: Vec<String> = Vec::with_capacity(fragrances.len());
        for fragrance in &fragrances {
            if !ids.contains(&fragrance.id) {
                ids.push(fragrance.id.clone());
            }
        }

        self.merge(fragrances);
        ids.iter().filter_map(|id| self.get(id).cloned()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Fragrance> {
        self.items.iter().find(|f| f.id == id)
    }

    pub fn all(&self) -> &[Fragrance] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fragrances whose name or brand contains `query` (case-insensitive) and
    /// that pass every active filter, in catalog order
    pub fn filter(&self, query: Option<&str>, filters: &SearchFilters) -> Vec<Fragrance> {
        let query = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        self.items
            .iter()
            .filter(|f| match &query {
                Some(q) => f.name.to_lowercase().contains(q) || f.brand.to_lowercase().contains(q),
                None => true,
            })
            .filter(|f| filters.matches(f))
            .cloned()
            .collect()
    }

    /// Populates a catalog from the seed terms
    ///
    /// A failing term is logged and skipped; seeding never fails as a whole.
    pub async fn seed(provider: &dyn CatalogProvider) -> Self {
        let mut catalog = Self::new();

        for term in SEED_TERMS {
            match provider.search(term, MAX_SEARCH_LIMIT).await {
                Ok(results) => {
                    let added = catalog.merge(results);
                    tracing::debug!(term = %term, added, "Seeded catalog term");
                }
                Err(e) => {
                    tracing::warn!(term = %term, error = %e, "Catalog seed search failed");
                }
            }

            if catalog.len() >= SEED_TARGET {
                break;
            }
        }

        tracing::info!(
            fragrances = catalog.len(),
            provider = provider.name(),
            "Catalog seeded"
        );

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Gender, ScentFamily};
    use crate::services::popularity::tests::fragrance;
    use crate::services::providers::MockCatalogProvider;

    #[test]
    fn test_merge_first_seen_wins() {
        let mut catalog = Catalog::new();
        let mut original = fragrance("a");
        original.brand = "Original".to_string();
        let mut duplicate = fragrance("a");
        duplicate.brand = "Duplicate".to_string();

        assert_eq!(catalog.merge(vec![original, fragrance("b")]), 2);
        assert_eq!(catalog.merge(vec![duplicate, fragrance("c")]), 1);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("a").unwrap().brand, "Original");
    }

    #[test]
    fn test_merge_resolved_dedupes_to_catalog_entries() {
        let mut catalog = Catalog::new();
        let mut known = fragrance("a");
        known.brand = "Original".to_string();
        catalog.merge(vec![known]);

        let mut stale = fragrance("a");
        stale.brand = "Duplicate".to_string();
        let results = catalog.merge_resolved(vec![
            fragrance("b"),
            stale,
            fragrance("b"),
        ]);

        let ids: Vec<&str> = results.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(results[1].brand, "Original");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_filter_by_query_and_filters() {
        let mut catalog = Catalog::new();
        let mut sauvage = fragrance("sauvage");
        sauvage.name = "Sauvage".to_string();
        sauvage.brand = "Dior".to_string();
        sauvage.gender = Gender::Male;
        let mut jadore = fragrance("jadore");
        jadore.name = "J'adore".to_string();
        jadore.brand = "Dior".to_string();
        jadore.gender = Gender::Female;
        jadore.scent_family = ScentFamily::Floral;
        catalog.merge(vec![sauvage, jadore, fragrance("other")]);

        let by_brand = catalog.filter(Some("dior"), &SearchFilters::default());
        assert_eq!(by_brand.len(), 2);

        let female = SearchFilters {
            genders: vec![Gender::Female],
            ..SearchFilters::default()
        };
        let results = catalog.filter(Some("DIOR"), &female);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "jadore");

        assert_eq!(catalog.filter(Some("  "), &SearchFilters::default()).len(), 3);
    }

    #[tokio::test]
    async fn test_seed_skips_failed_terms() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider.expect_search().returning(|term, _| {
            if term == "Dior" {
                Err(AppError::ExternalApi("rate limited".to_string()))
            } else {
                Ok(vec![fragrance(&term.to_lowercase())])
            }
        });

        let catalog = Catalog::seed(&provider).await;
        assert_eq!(catalog.len(), SEED_TERMS.len() - 1);
        assert!(catalog.get("dior").is_none());
        assert!(catalog.get("chanel").is_some());
    }
}
