//! Axum route handlers for stored ads.

use axum::{
    extract::multipart::MultipartRejection,
    extract::rejection::PathRejection,
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::ads::repository::AdSubmission;
use crate::errors::AppError;
use crate::models::advertisement::Advertisement;
use crate::state::AppState;
use crate::uploads::form::AdSubmissionForm;

/// POST /api/ads
///
/// Creates an ad from `description`/`copy` and/or `image` without generating feedback.
pub async fn handle_create_ad(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Advertisement>), AppError> {
    let multipart = multipart?;
    let form = AdSubmissionForm::from_multipart(multipart, state.config.max_upload_bytes).await?;
    let advertisement = form.into_advertisement(state.images.as_ref()).await?;

    state
        .ads
        .insert(AdSubmission {
            advertisement: advertisement.clone(),
            feedback: vec![],
        })
        .await;

    info!("Created ad {}", advertisement.id);
    Ok((StatusCode::CREATED, Json(advertisement)))
}

/// GET /api/ads
pub async fn handle_list_ads(State(state): State<AppState>) -> Json<Vec<Advertisement>> {
    Json(state.ads.list().await)
}

/// GET /api/ads/:id
///
/// Returns the ad together with any feedback generated for it.
pub async fn handle_get_ad(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<AdSubmission>, AppError> {
    let Path(id) = path?;
    state
        .ads
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Ad {id} not found")))
}
