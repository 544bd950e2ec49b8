use std::sync::Arc;

use crate::ads::repository::AdRepository;
use crate::catalog::PersonalityCatalog;
use crate::config::Config;
use crate::feedback::engine::FeedbackEngine;
use crate::uploads::store::ImageStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup. Default: InMemoryCatalog seeded from `catalog::seed`.
    pub catalog: Arc<dyn PersonalityCatalog>,
    pub engine: FeedbackEngine,
    /// Pluggable image backend. Local disk by default, S3 when STORAGE_BACKEND=s3.
    pub images: Arc<dyn ImageStore>,
    pub ads: Arc<dyn AdRepository>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<dyn PersonalityCatalog>,
        images: Arc<dyn ImageStore>,
        ads: Arc<dyn AdRepository>,
    ) -> Self {
        let engine = FeedbackEngine::new(catalog.clone());
        AppState {
            config,
            catalog,
            engine,
            images,
            ads,
        }
    }
}
