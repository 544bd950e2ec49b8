use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::engine::FeedbackError;

/// A submitted ad. Carries a description, an image reference, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: Uuid,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Advertisement {
    /// Creates an ad with a fresh id.
    ///
    /// Blank descriptions are treated as absent; an ad with neither a description
    /// nor an image is rejected.
    pub fn new(
        description: Option<String>,
        image_url: Option<String>,
    ) -> Result<Self, FeedbackError> {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let image_url = image_url.filter(|u| !u.trim().is_empty());

        if description.is_none() && image_url.is_none() {
            return Err(FeedbackError::InvalidAdvertisement);
        }

        Ok(Advertisement {
            id: Uuid::new_v4(),
            description,
            image_url,
            created_at: Utc::now(),
        })
    }
}
