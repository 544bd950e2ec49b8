//! In-process retention of submitted ads and the feedback generated for them.
//! Nothing here survives a restart.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::advertisement::Advertisement;
use crate::models::feedback::FeedbackRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSubmission {
    pub advertisement: Advertisement,
    pub feedback: Vec<FeedbackRecord>,
}

/// Carried in `AppState` as `Arc<dyn AdRepository>`.
#[async_trait]
pub trait AdRepository: Send + Sync {
    async fn insert(&self, submission: AdSubmission);

    async fn get(&self, id: Uuid) -> Option<AdSubmission>;

    /// Every stored ad, oldest first.
    async fn list(&self) -> Vec<Advertisement>;

    /// Every feedback record across all ads, in submission order.
    async fn all_feedback(&self) -> Vec<FeedbackRecord>;

    /// Feedback a single personality has given, oldest first.
    async fn feedback_for_personality(&self, personality_id: &str) -> Vec<FeedbackRecord>;
}

#[derive(Default)]
pub struct InMemoryAdRepository {
    submissions: RwLock<Vec<AdSubmission>>,
}

impl InMemoryAdRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdRepository for InMemoryAdRepository {
    async fn insert(&self, submission: AdSubmission) {
        self.submissions.write().await.push(submission);
    }

    async fn get(&self, id: Uuid) -> Option<AdSubmission> {
        self.submissions
            .read()
            .await
            .iter()
            .find(|s| s.advertisement.id == id)
            .cloned()
    }

    async fn list(&self) -> Vec<Advertisement> {
        self.submissions
            .read()
            .await
            .iter()
            .map(|s| s.advertisement.clone())
            .collect()
    }

    async fn all_feedback(&self) -> Vec<FeedbackRecord> {
        self.submissions
            .read()
            .await
            .iter()
            .flat_map(|s| s.feedback.iter().cloned())
            .collect()
    }

    async fn feedback_for_personality(&self, personality_id: &str) -> Vec<FeedbackRecord> {
        self.submissions
            .read()
            .await
            .iter()
            .flat_map(|s| s.feedback.iter())
            .filter(|f| f.personality_id == personality_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::tests::make_personality;
    use crate::feedback::engine::generate_for;

    fn submission(text: &str) -> AdSubmission {
        AdSubmission {
            advertisement: Advertisement::new(Some(text.to_string()), None).unwrap(),
            feedback: vec![],
        }
    }

    fn rated_submission(text: &str, ids: &[&str]) -> AdSubmission {
        let advertisement = Advertisement::new(Some(text.to_string()), None).unwrap();
        let personalities: Vec<_> = ids
            .iter()
            .map(|id| make_personality(id, &["Casual"]))
            .collect();
        let feedback = generate_for(&advertisement, &personalities, &mut StdRng::seed_from_u64(3));
        AdSubmission {
            advertisement,
            feedback,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let repo = InMemoryAdRepository::new();
        let s = submission("Spring sale");
        let id = s.advertisement.id;
        repo.insert(s).await;

        let found = repo.get(id).await.unwrap();
        assert_eq!(found.advertisement.description.as_deref(), Some("Spring sale"));
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let repo = InMemoryAdRepository::new();
        assert!(repo.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_list_is_oldest_first() {
        let repo = InMemoryAdRepository::new();
        for text in ["first", "second", "third"] {
            repo.insert(submission(text)).await;
        }
        let descriptions: Vec<String> = repo
            .list()
            .await
            .into_iter()
            .filter_map(|ad| ad.description)
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_all_feedback_spans_submissions() {
        let repo = InMemoryAdRepository::new();
        repo.insert(rated_submission("first", &["p1", "p2"])).await;
        repo.insert(submission("unrated")).await;
        repo.insert(rated_submission("second", &["p3"])).await;

        let ids: Vec<String> = repo
            .all_feedback()
            .await
            .into_iter()
            .map(|f| f.personality_id)
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_feedback_for_personality_filters_by_id() {
        let repo = InMemoryAdRepository::new();
        let first = rated_submission("first", &["p1", "p2"]);
        let second = rated_submission("second", &["p2"]);
        let (first_id, second_id) = (first.advertisement.id, second.advertisement.id);
        repo.insert(first).await;
        repo.insert(second).await;

        let ads: Vec<Uuid> = repo
            .feedback_for_personality("p2")
            .await
            .into_iter()
            .map(|f| f.ad_id)
            .collect();
        assert_eq!(ads, vec![first_id, second_id]);

        assert_eq!(repo.feedback_for_personality("p1").await.len(), 1);
        assert!(repo.feedback_for_personality("p9").await.is_empty());
    }
}
