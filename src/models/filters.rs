use serde::{Deserialize, Serialize};

use super::{Fragrance, Gender, ScentFamily};

/// Filters selected by the user while browsing
///
/// An empty set means the filter is not applied. The same struct is passed as
/// context to the similarity scorer so that items matching the active filters
/// get a boost. Brands are only used there; they never narrow a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilters {
    #[serde(default)]
    pub genders: Vec<Gender>,
    #[serde(default)]
    pub scent_families: Vec<ScentFamily>,
    #[serde(default)]
    pub brands: Vec<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.genders.is_empty() && self.scent_families.is_empty() && self.brands.is_empty()
    }

    /// Checks whether a fragrance passes the gender and scent family filters
    pub fn matches(&self, fragrance: &Fragrance) -> bool {
        (self.genders.is_empty() || self.genders.contains(&fragrance.gender))
            && (self.scent_families.is_empty()
                || self.scent_families.contains(&fragrance.scent_family))
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.brands.iter().any(|b| b == brand)
    }
}
