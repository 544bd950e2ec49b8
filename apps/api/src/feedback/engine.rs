//! Feedback generation — turns one ad and an ordered list of personality ids
//! into one `FeedbackRecord` per id, in the same order.
//!
//! The engine reads the catalog and writes nothing. Randomness is supplied by
//! the caller so tests can pin the rating draws.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::{CatalogError, PersonalityCatalog};
use crate::feedback::effectiveness::Effectiveness;
use crate::feedback::emotions::is_known_emotion;
use crate::feedback::rules::classify;
use crate::models::advertisement::Advertisement;
use crate::models::feedback::FeedbackRecord;
use crate::models::personality::Personality;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Either a description or an image is required")]
    InvalidAdvertisement,

    #[error("At least one personality must be selected")]
    EmptyPersonalitySelection,

    #[error("Unknown personality: {0}")]
    UnknownPersonality(String),
}

#[derive(Clone)]
pub struct FeedbackEngine {
    catalog: Arc<dyn PersonalityCatalog>,
}

impl FeedbackEngine {
    pub fn new(catalog: Arc<dyn PersonalityCatalog>) -> Self {
        FeedbackEngine { catalog }
    }

    /// Resolves every id against the catalog, in order.
    ///
    /// Fails on the first id that does not resolve; nothing is returned for the others.
    pub fn resolve(&self, personality_ids: &[String]) -> Result<Vec<Personality>, FeedbackError> {
        if personality_ids.is_empty() {
            return Err(FeedbackError::EmptyPersonalitySelection);
        }

        personality_ids
            .iter()
            .map(|id| {
                self.catalog.get_by_id(id).map_err(|e| match e {
                    CatalogError::NotFound(id) => FeedbackError::UnknownPersonality(id),
                })
            })
            .collect()
    }

    /// Produces one feedback record per id, preserving input order.
    ///
    /// All-or-nothing: an unknown id anywhere in the list yields an error and no records.
    /// The HTTP handler calls `resolve` and `generate_for` separately to keep the profiles.
    #[allow(dead_code)]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        ad: &Advertisement,
        personality_ids: &[String],
        rng: &mut R,
    ) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        let personalities = self.resolve(personality_ids)?;
        Ok(generate_for(ad, &personalities, rng))
    }
}

/// Builds one record per already-resolved personality, in order.
pub fn generate_for<R: Rng + ?Sized>(
    ad: &Advertisement,
    personalities: &[Personality],
    rng: &mut R,
) -> Vec<FeedbackRecord> {
    let records: Vec<FeedbackRecord> = personalities
        .iter()
        .map(|p| build_record(ad, p, &mut *rng))
        .collect();

    debug!(
        "Generated {} feedback records for ad {}",
        records.len(),
        ad.id
    );
    records
}

fn build_record<R: Rng + ?Sized>(
    ad: &Advertisement,
    personality: &Personality,
    rng: &mut R,
) -> FeedbackRecord {
    let category = classify(&personality.personality_traits);
    let template = category.pick_template(rng);
    let rating = template.rating.draw(rng);
    debug_assert!(template.rating.contains(rating));
    debug_assert!(template.emotions.iter().all(|e| is_known_emotion(e)));

    let effectiveness = Effectiveness::from_rating(rating);
    debug!(
        "Personality {} -> {} ({}), rating {} [{}]",
        personality.id,
        category.as_str(),
        template.variant,
        rating,
        effectiveness.label()
    );

    FeedbackRecord {
        id: Uuid::new_v4(),
        ad_id: ad.id,
        personality_id: personality.id.clone(),
        category,
        rating,
        thought: template.thought.to_string(),
        emotional_response: template.emotional_response.to_string(),
        emotions: template.emotions.iter().map(|e| e.to_string()).collect(),
        categories: template.categories.iter().map(|c| c.to_string()).collect(),
        effectiveness,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::make_personality;
    use crate::catalog::InMemoryCatalog;
    use crate::feedback::rules::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> FeedbackEngine {
        FeedbackEngine::new(Arc::new(InMemoryCatalog::new(vec![
            make_personality("p1", &["Professional", "Creative", "Analytical"]),
            make_personality("p2", &["Creative", "Detail-oriented"]),
            make_personality("p3", &["Casual", "Thoughtful"]),
            make_personality("p4", &["Technical"]),
            make_personality("p5", &["Creative", "Professional"]),
        ])))
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn furniture_ad() -> Advertisement {
        Advertisement::new(Some("Minimalist furniture ad".to_string()), None).unwrap()
    }

    #[test]
    fn test_professional_end_to_end() {
        let ad = furniture_ad();
        let mut rng = StdRng::seed_from_u64(42);
        let records = engine().generate(&ad, &ids(&["p1"]), &mut rng).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.category, Category::Professional);
        assert_eq!(record.ad_id, ad.id);
        assert_eq!(record.personality_id, "p1");
        assert!((7..=10).contains(&record.rating), "got {}", record.rating);
        assert_eq!(record.emotions, vec!["Interested", "Confident", "Respected"]);
        assert!(record.thought.contains("value proposition"));
    }

    #[test]
    fn test_priority_order_prefers_professional() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = engine()
            .generate(&furniture_ad(), &ids(&["p5"]), &mut rng)
            .unwrap();
        assert_eq!(records[0].category, Category::Professional);
    }

    #[test]
    fn test_professional_band_holds_over_many_draws() {
        let engine = engine();
        let ad = furniture_ad();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..10_000 {
            let record = engine
                .generate(&ad, &ids(&["p1"]), &mut rng)
                .unwrap()
                .remove(0);
            assert!((7..=10).contains(&record.rating), "escaped band: {}", record.rating);
            assert_eq!(record.category, Category::Professional);
            assert_eq!(
                record.thought,
                "This ad effectively communicates the product's value proposition with a clean, professional aesthetic."
            );
            assert_eq!(record.emotions, vec!["Interested", "Confident", "Respected"]);
            assert_eq!(record.categories, vec!["Design", "Messaging", "Professional Appeal"]);
        }
    }

    #[test]
    fn test_generate_for_resolved_personalities_keeps_order() {
        let engine = engine();
        let resolved = engine.resolve(&ids(&["p3", "p4", "p1"])).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        let records = generate_for(&furniture_ad(), &resolved, &mut rng);

        let categories: Vec<Category> = records.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![Category::Casual, Category::Neutral, Category::Professional]
        );
    }

    #[test]
    fn test_generate_for_empty_slice_is_empty() {
        let mut rng = StdRng::seed_from_u64(12);
        assert!(generate_for(&furniture_ad(), &[], &mut rng).is_empty());
    }

    #[test]
    fn test_all_ratings_within_one_to_ten() {
        let engine = engine();
        let ad = furniture_ad();
        let mut rng = StdRng::seed_from_u64(99);
        let all = ids(&["p1", "p2", "p3", "p4", "p5"]);
        for _ in 0..2_000 {
            for record in engine.generate(&ad, &all, &mut rng).unwrap() {
                assert!((1..=10).contains(&record.rating));
                assert_eq!(record.effectiveness, Effectiveness::from_rating(record.rating));
            }
        }
    }

    #[test]
    fn test_order_and_cardinality_preserved() {
        let requested = ids(&["p4", "p2", "p1", "p3", "p1"]);
        let mut rng = StdRng::seed_from_u64(5);
        let records = engine()
            .generate(&furniture_ad(), &requested, &mut rng)
            .unwrap();

        assert_eq!(records.len(), requested.len());
        for (record, id) in records.iter().zip(&requested) {
            assert_eq!(&record.personality_id, id);
        }
    }

    #[test]
    fn test_unknown_id_fails_whole_call() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = engine().generate(&furniture_ad(), &ids(&["p1", "ghost", "p2"]), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            FeedbackError::UnknownPersonality("ghost".to_string())
        );
    }

    #[test]
    fn test_first_unknown_id_is_reported() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = engine().generate(&furniture_ad(), &ids(&["p1", "x", "y"]), &mut rng);
        assert_eq!(
            result.unwrap_err(),
            FeedbackError::UnknownPersonality("x".to_string())
        );
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            engine()
                .generate(&furniture_ad(), &[], &mut rng)
                .unwrap_err(),
            FeedbackError::EmptyPersonalitySelection
        );
    }

    #[test]
    fn test_unmatched_traits_get_neutral_template() {
        let mut rng = StdRng::seed_from_u64(8);
        let records = engine()
            .generate(&furniture_ad(), &ids(&["p4"]), &mut rng)
            .unwrap();
        assert_eq!(records[0].category, Category::Neutral);
        assert_eq!(records[0].emotions, vec!["Interested", "Thoughtful", "Curious"]);
        assert!((4..=7).contains(&records[0].rating));
    }

    #[test]
    fn test_casual_template() {
        let mut rng = StdRng::seed_from_u64(8);
        let records = engine()
            .generate(&furniture_ad(), &ids(&["p3"]), &mut rng)
            .unwrap();
        assert_eq!(records[0].category, Category::Casual);
        assert_eq!(records[0].emotions, vec!["Happy", "Excited", "Eager"]);
        assert!((8..=10).contains(&records[0].rating));
    }

    #[test]
    fn test_creative_rating_matches_chosen_variant() {
        let engine = engine();
        let ad = furniture_ad();
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..500 {
            let record = engine
                .generate(&ad, &ids(&["p2"]), &mut rng)
                .unwrap()
                .remove(0);
            assert_eq!(record.category, Category::Creative);
            if record.emotions.contains(&"Hopeful".to_string()) {
                assert!((6..=9).contains(&record.rating));
            } else {
                assert_eq!(record.emotions, vec!["Disappointed", "Bored", "Indifferent"]);
                assert!((2..=5).contains(&record.rating));
            }
        }
    }

    #[test]
    fn test_same_seed_same_output_text_and_rating() {
        let engine = engine();
        let ad = furniture_ad();
        let all = ids(&["p1", "p2", "p3", "p4"]);
        let a = engine
            .generate(&ad, &all, &mut StdRng::seed_from_u64(77))
            .unwrap();
        let b = engine
            .generate(&ad, &all, &mut StdRng::seed_from_u64(77))
            .unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.rating, y.rating);
            assert_eq!(x.thought, y.thought);
            assert_ne!(x.id, y.id);
        }
    }
}
