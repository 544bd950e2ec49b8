use serde::{Deserialize, Serialize};

/// An audience profile that ads are evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub id: String,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub job_title: Option<String>,
    pub industry: Option<String>,
    pub personality_traits: Vec<String>,
    pub summary: Option<String>,
}
