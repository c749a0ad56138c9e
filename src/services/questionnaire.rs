use std::cmp::Reverse;

use crate::models::ScentFamily::{Citrus, Floral, Fresh, Gourmand, Green, Leather, Oriental, Woody};
use crate::models::{Fragrance, Gender, QuestionnaireProfile, ScentFamily};

use super::popularity::PopularityRanker;

/// Minimum aggregate score for a fragrance to be recommended
pub const MATCH_THRESHOLD: u32 = 5;

/// Maximum number of questionnaire recommendations
pub const MAX_MATCHES: usize = 8;

const LIGHT_FAMILIES: &[ScentFamily] = &[Fresh, Citrus, Green];
const STRONG_FAMILIES: &[ScentFamily] = &[Oriental, Leather, Woody];
const WARM_FAMILIES: &[ScentFamily] = &[Oriental, Gourmand, Woody];
const DRY_FAMILIES: &[ScentFamily] = &[Green, Woody, Fresh];
const SWEET_FAMILIES: &[ScentFamily] = &[Gourmand, Floral];

const FAMILY_POINTS: u32 = 3;

/// Where an answer falls on its 1-5 axis
enum Leaning {
    Low,
    Neutral,
    High,
}

fn leaning(answer: u8) -> Leaning {
    match answer {
        0..=2 => Leaning::Low,
        3 => Leaning::Neutral,
        _ => Leaning::High,
    }
}

fn family_points(family: ScentFamily, families: &[ScentFamily]) -> u32 {
    if families.contains(&family) {
        FAMILY_POINTS
    } else {
        0
    }
}

/// Scores how well a fragrance matches the questionnaire answers
///
/// Each axis contributes independently and the contributions are summed.
pub fn match_score(profile: &QuestionnaireProfile, fragrance: &Fragrance) -> u32 {
    let family = fragrance.scent_family;

    let intensity = match leaning(profile.intensity) {
        Leaning::Low => family_points(family, LIGHT_FAMILIES),
        Leaning::High => family_points(family, STRONG_FAMILIES),
        Leaning::Neutral => 1,
    };

    let warmth = match leaning(profile.warmth) {
        Leaning::Low => family_points(family, LIGHT_FAMILIES),
        Leaning::High => family_points(family, WARM_FAMILIES),
        Leaning::Neutral => 0,
    };

    let sweetness = match leaning(profile.sweetness) {
        Leaning::Low => family_points(family, DRY_FAMILIES),
        Leaning::High => family_points(family, SWEET_FAMILIES),
        Leaning::Neutral => 0,
    };

    let occasion = match leaning(profile.occasion) {
        Leaning::Low => u32::from(fragrance.occasion.day),
        Leaning::High => u32::from(fragrance.occasion.night),
        Leaning::Neutral => 1,
    };

    let character = match (leaning(profile.character), fragrance.gender) {
        (Leaning::Low, Gender::Female) | (Leaning::High, Gender::Male) => 3,
        (Leaning::Low | Leaning::High, Gender::Unisex) => 1,
        (Leaning::Neutral, Gender::Unisex) => 3,
        _ => 0,
    };

    intensity + warmth + sweetness + occasion + character
}

/// Recommends catalog fragrances for a questionnaire profile
///
/// Keeps fragrances scoring at least [`MATCH_THRESHOLD`], takes the best
/// [`MAX_MATCHES`] and orders those by popularity.
pub fn match_profile(
    profile: &QuestionnaireProfile,
    catalog: &[Fragrance],
    ranker: &PopularityRanker,
) -> Vec<Fragrance> {
    let mut scored: Vec<(&Fragrance, u32)> = catalog
        .iter()
        .map(|fragrance| (fragrance, match_score(profile, fragrance)))
        .filter(|(_, score)| *score >= MATCH_THRESHOLD)
        .collect();

    scored.sort_by_key(|(_, score)| Reverse(*score));

    let top: Vec<Fragrance> = scored
        .into_iter()
        .take(MAX_MATCHES)
        .map(|(fragrance, _)| fragrance.clone())
        .collect();

    ranker.rank(top)
}
