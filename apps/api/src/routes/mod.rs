pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::ads::handlers as ads;
use crate::catalog::handlers as catalog;
use crate::config::StorageBackend;
use crate::feedback::handlers as feedback;
use crate::state::AppState;
use crate::uploads::store::LOCAL_PUBLIC_PREFIX;

/// Headroom on top of the image cap for the other form fields and multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;
    let local_uploads = match state.config.storage {
        StorageBackend::Local => Some(state.config.upload_dir.clone()),
        StorageBackend::S3(_) => None,
    };

    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Personality catalog
        .route("/api/personalities", get(catalog::handle_list_personalities))
        .route(
            "/api/personalities/:id",
            get(catalog::handle_get_personality),
        )
        .route(
            "/api/personalities/:id/feedback",
            get(catalog::handle_personality_feedback),
        )
        .route(
            "/api/categories/:name/personalities",
            get(catalog::handle_category_personalities),
        )
        // Ads and feedback
        .route(
            "/api/feedback",
            get(feedback::handle_list_feedback).post(feedback::handle_submit_feedback),
        )
        .route(
            "/api/ads",
            get(ads::handle_list_ads).post(ads::handle_create_ad),
        )
        .route("/api/ads/:id", get(ads::handle_get_ad))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    match local_uploads {
        Some(dir) => router.nest_service(LOCAL_PUBLIC_PREFIX, ServeDir::new(dir)),
        None => router,
    }
}
