//! Personality Catalog — read-only lookup of the audience profiles ads are rated against.
//!
//! `AppState` holds an `Arc<dyn PersonalityCatalog>`; the default backend is
//! `InMemoryCatalog`, seeded once at startup from `seed::seed_personalities()`.

pub mod handlers;
pub mod seed;

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::models::personality::Personality;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("personality '{0}' not found")]
    NotFound(String),
}

/// Implement this to back the catalog with another store without touching
/// the feedback engine or the handlers.
pub trait PersonalityCatalog: Send + Sync {
    /// Every known personality, in catalog order.
    fn list_all(&self) -> Vec<Personality>;

    fn get_by_id(&self, id: &str) -> Result<Personality, CatalogError>;
}

/// Fixed, in-process catalog. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    personalities: Vec<Personality>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Builds a catalog from `personalities`, keeping the first record for any duplicated id.
    pub fn new(personalities: Vec<Personality>) -> Self {
        let mut kept = Vec::with_capacity(personalities.len());
        let mut index = HashMap::with_capacity(personalities.len());

        for personality in personalities {
            if index.contains_key(&personality.id) {
                warn!("Skipping duplicate personality id '{}'", personality.id);
                continue;
            }
            index.insert(personality.id.clone(), kept.len());
            kept.push(personality);
        }

        InMemoryCatalog {
            personalities: kept,
            index,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_personalities())
    }

    pub fn len(&self) -> usize {
        self.personalities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personalities.is_empty()
    }
}

impl PersonalityCatalog for InMemoryCatalog {
    fn list_all(&self) -> Vec<Personality> {
        self.personalities.clone()
    }

    fn get_by_id(&self, id: &str) -> Result<Personality, CatalogError> {
        self.index
            .get(id)
            .map(|&i| self.personalities[i].clone())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
