use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::{Fragrance, Interaction};

/// Ranks fragrances by how often users have interacted with them
///
/// Scores are counted from the interaction log the ranker is built with; every
/// interaction kind counts once. Build a new ranker per request so that scores
/// always reflect the full, current log.
#[derive(Debug, Default)]
pub struct PopularityRanker {
    scores: HashMap<String, u32>,
}

impl PopularityRanker {
    pub fn from_events(events: &[Interaction]) -> Self {
        let mut scores = HashMap::new();
        for event in events {
            *scores.entry(event.fragrance_id.clone()).or_insert(0) += 1;
        }
        Self { scores }
    }

    /// Number of recorded interactions for a fragrance
    pub fn score(&self, fragrance_id: &str) -> u32 {
        self.scores.get(fragrance_id).copied().unwrap_or(0)
    }

    /// Sorts by descending popularity, keeping input order between equal scores
    pub fn rank(&self, mut items: Vec<Fragrance>) -> Vec<Fragrance> {
        // sort_by_key is stable
        items.sort_by_key(|item| Reverse(self.score(&item.id)));
        items
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{
        Gender, InteractionKind, OccasionScores, ScentFamily, Seasonality,
    };

    /// Builds a fragrance with neutral attributes for scorer tests
    pub(crate) fn fragrance(id: &str) -> Fragrance {
        Fragrance {
            id: id.to_string(),
            name: id.to_string(),
            brand: "Test House".to_string(),
            price: 100.0,
            size: "50ml".to_string(),
            description: String::new(),
            image_url: String::new(),
            gender: Gender::Unisex,
            scent_family: ScentFamily::Fresh,
            seasonality: Seasonality::default(),
            occasion: OccasionScores::default(),
            top_notes: vec![],
            heart_notes: vec![],
            base_notes: vec![],
            main_accords: vec![],
        }
    }

    fn events(ids: &[&str]) -> Vec<Interaction> {
        ids.iter()
            .map(|id| Interaction::new(*id, InteractionKind::Click))
            .collect()
    }

    fn ids(items: &[Fragrance]) -> Vec<&str> {
        items.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_score_counts_every_kind_once() {
        let log = vec![
            Interaction::new("a", InteractionKind::View),
            Interaction::new("a", InteractionKind::Favorite),
            Interaction::new("a", InteractionKind::AddToInventory),
            Interaction::new("b", InteractionKind::Click),
        ];
        let ranker = PopularityRanker::from_events(&log);
        assert_eq!(ranker.score("a"), 3);
        assert_eq!(ranker.score("b"), 1);
        assert_eq!(ranker.score("missing"), 0);
    }

    #[test]
    fn test_score_is_monotonic_as_events_are_appended() {
        let mut log = events(&["a", "b"]);
        let before = PopularityRanker::from_events(&log).score("a");
        log.extend(events(&["a", "c"]));
        let after = PopularityRanker::from_events(&log).score("a");
        assert!(after >= before);
        assert_eq!(after, 2);
    }

    #[test]
    fn test_empty_log_keeps_input_order() {
        let ranker = PopularityRanker::from_events(&[]);
        let items = vec![fragrance("c"), fragrance("a"), fragrance("b")];
        assert_eq!(ids(&ranker.rank(items)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_rank_descending_by_score() {
        let ranker = PopularityRanker::from_events(&events(&["b", "c", "c", "b", "c"]));
        let items = vec![fragrance("a"), fragrance("b"), fragrance("c")];
        assert_eq!(ids(&ranker.rank(items)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranker = PopularityRanker::from_events(&events(&["x", "y", "z", "z"]));
        let items = vec![
            fragrance("y"),
            fragrance("q"),
            fragrance("x"),
            fragrance("z"),
            fragrance("p"),
        ];
        assert_eq!(ids(&ranker.rank(items)), vec!["z", "y", "x", "q", "p"]);
    }
}
