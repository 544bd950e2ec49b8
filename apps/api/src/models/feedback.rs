use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::effectiveness::Effectiveness;
use crate::feedback::rules::Category;

/// Simulated reaction of one personality to one ad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub ad_id: Uuid,
    pub personality_id: String,
    pub category: Category,
    pub rating: u8, // 1 – 10
    pub thought: String,
    pub emotional_response: String,
    pub emotions: Vec<String>,
    pub categories: Vec<String>,
    pub effectiveness: Effectiveness,
    pub created_at: DateTime<Utc>,
}
