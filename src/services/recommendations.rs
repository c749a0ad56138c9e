use crate::models::{Fragrance, Interaction, QuestionnaireProfile, SearchFilters};

use super::{popularity::PopularityRanker, questionnaire, similarity};

/// Default number of "you might also like" suggestions
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Recommendation entry points over one catalog and interaction-log snapshot
///
/// Holds no state of its own beyond the popularity scores counted from the
/// snapshot it was built with. Build one per request, after any interaction
/// for that request has been recorded.
pub struct Recommender<'a> {
    catalog: &'a [Fragrance],
    ranker: PopularityRanker,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a [Fragrance], interactions: &[Interaction]) -> Self {
        Self {
            catalog,
            ranker: PopularityRanker::from_events(interactions),
        }
    }

    pub fn popularity(&self, fragrance_id: &str) -> u32 {
        self.ranker.score(fragrance_id)
    }

    /// Orders fragrances by popularity, keeping the given order among ties
    pub fn popular(&self, fragrances: Vec<Fragrance>) -> Vec<Fragrance> {
        self.ranker.rank(fragrances)
    }

    /// Fragrances similar to `reference`, boosted by the user's active filters
    pub fn similar(
        &self,
        reference: &Fragrance,
        context: Option<&SearchFilters>,
        limit: usize,
    ) -> Vec<Fragrance> {
        let similar =
            similarity::find_similar(reference, self.catalog, context, limit, &self.ranker);

        tracing::info!(
            reference = %reference.id,
            candidates = self.catalog.len(),
            results = similar.len(),
            "Similar fragrances computed"
        );

        similar
    }

    /// Fragrances matching a questionnaire profile
    pub fn for_profile(&self, profile: &QuestionnaireProfile) -> Vec<Fragrance> {
        let matches = questionnaire::match_profile(profile, self.catalog, &self.ranker);

        tracing::info!(
            candidates = self.catalog.len(),
            results = matches.len(),
            "Questionnaire recommendations computed"
        );

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, InteractionKind, ScentFamily};
    use crate::services::popularity::tests::fragrance;

    fn catalog() -> Vec<Fragrance> {
        let mut woody = fragrance("woody");
        woody.scent_family = ScentFamily::Woody;
        woody.gender = Gender::Male;

        let mut cedar = fragrance("cedar");
        cedar.scent_family = ScentFamily::Woody;
        cedar.gender = Gender::Male;

        let mut vetiver = fragrance("vetiver");
        vetiver.scent_family = ScentFamily::Woody;
        vetiver.gender = Gender::Unisex;

        vec![woody, cedar, vetiver]
    }

    #[test]
    fn test_empty_log_is_order_preserving() {
        let catalog = catalog();
        let recommender = Recommender::new(&catalog, &[]);
        let ids: Vec<String> = recommender
            .popular(catalog.clone())
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["woody", "cedar", "vetiver"]);
        assert_eq!(recommender.popularity("woody"), 0);
    }

    #[test]
    fn test_similar_uses_log_for_ordering() {
        let catalog = catalog();
        let log = vec![Interaction::new("vetiver", InteractionKind::Favorite)];
        let recommender = Recommender::new(&catalog, &log);

        let similar = recommender.similar(&catalog[0], None, DEFAULT_SIMILAR_LIMIT);
        let ids: Vec<&str> = similar.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["vetiver", "cedar"]);
    }

    #[test]
    fn test_for_profile() {
        let catalog = catalog();
        let recommender = Recommender::new(&catalog, &[]);
        let masculine = QuestionnaireProfile {
            intensity: 5,
            character: 5,
            ..QuestionnaireProfile::new()
        };

        // woody male: intensity 3 + occasion 1 + male 3 = 7; unisex gets 5
        let ids: Vec<String> = recommender
            .for_profile(&masculine)
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["woody", "cedar", "vetiver"]);
    }
}
