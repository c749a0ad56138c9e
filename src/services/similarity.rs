use std::cmp::Reverse;

use crate::models::{Fragrance, Gender, SearchFilters};

use super::popularity::PopularityRanker;

/// Maximum price difference for two fragrances to count as similarly priced
const PRICE_WINDOW: f64 = 30.0;

const SAME_FAMILY_POINTS: u32 = 3;
const GENDER_POINTS: u32 = 2;
const PRICE_POINTS: u32 = 1;
const CONTEXT_BRAND_POINTS: u32 = 1;
const CONTEXT_FAMILY_POINTS: u32 = 2;

/// Relevance of a candidate to the reference fragrance
///
/// The optional context is the filter set the user is currently browsing
/// with; matches on it nudge the candidate up.
pub fn similarity_score(
    reference: &Fragrance,
    candidate: &Fragrance,
    context: Option<&SearchFilters>,
) -> u32 {
    let mut score = 0;

    if candidate.scent_family == reference.scent_family {
        score += SAME_FAMILY_POINTS;
    }

    if candidate.gender == reference.gender
        || candidate.gender == Gender::Unisex
        || reference.gender == Gender::Unisex
    {
        score += GENDER_POINTS;
    }

    if (candidate.price - reference.price).abs() <= PRICE_WINDOW {
        score += PRICE_POINTS;
    }

    if let Some(context) = context {
        if !context.brands.is_empty() && context.has_brand(&candidate.brand) {
            score += CONTEXT_BRAND_POINTS;
        }
        if !context.scent_families.is_empty()
            && context.scent_families.contains(&candidate.scent_family)
        {
            score += CONTEXT_FAMILY_POINTS;
        }
    }

    score
}

/// Finds up to `limit` fragrances similar to the reference
///
/// Candidates are ordered by relevance first. The best `2 * limit` of them are
/// then reordered by popularity, so popularity only decides among already
/// relevant items.
pub fn find_similar(
    reference: &Fragrance,
    catalog: &[Fragrance],
    context: Option<&SearchFilters>,
    limit: usize,
    ranker: &PopularityRanker,
) -> Vec<Fragrance> {
    let mut scored: Vec<(&Fragrance, u32)> = catalog
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| (candidate, similarity_score(reference, candidate, context)))
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by_key(|(_, score)| Reverse(*score));

    let shortlist: Vec<Fragrance> = scored
        .into_iter()
        .take(limit.saturating_mul(2))
        .map(|(candidate, _)| candidate.clone())
        .collect();

    let mut similar = ranker.rank(shortlist);
    similar.truncate(limit);
    similar
}
