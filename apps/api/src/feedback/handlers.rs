//! Axum route handler for feedback submissions.

use std::collections::BTreeMap;

use axum::{
    extract::multipart::MultipartRejection,
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::ads::repository::AdSubmission;
use crate::errors::AppError;
use crate::feedback::engine::{generate_for, FeedbackError};
use crate::models::advertisement::Advertisement;
use crate::models::feedback::FeedbackRecord;
use crate::models::personality::Personality;
use crate::state::AppState;
use crate::uploads::form::AdSubmissionForm;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub ad_id: Uuid,
    pub advertisement: Advertisement,
    /// One record per requested personality id, in request order.
    pub feedback: Vec<FeedbackRecord>,
    pub personalities: BTreeMap<String, Personality>,
}

/// POST /api/feedback
///
/// Multipart: `description`/`copy`, optional `image`, and `personalities` (JSON array)
/// or `personality_ids` (comma-separated). Everything is validated before the image
/// is written.
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<FeedbackResponse>), AppError> {
    let multipart = multipart?;
    let form = AdSubmissionForm::from_multipart(multipart, state.config.max_upload_bytes).await?;
    let personality_ids = form.personality_ids()?;

    if !form.has_content() {
        return Err(FeedbackError::InvalidAdvertisement.into());
    }
    let selected = state.engine.resolve(&personality_ids)?;

    let advertisement = form.into_advertisement(state.images.as_ref()).await?;

    let mut rng = StdRng::from_entropy();
    let feedback = generate_for(&advertisement, &selected, &mut rng);

    let personalities: BTreeMap<String, Personality> =
        selected.into_iter().map(|p| (p.id.clone(), p)).collect();

    state
        .ads
        .insert(AdSubmission {
            advertisement: advertisement.clone(),
            feedback: feedback.clone(),
        })
        .await;

    info!(
        "Generated feedback for ad {} from {} personalities",
        advertisement.id,
        feedback.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            ad_id: advertisement.id,
            advertisement,
            feedback,
            personalities,
        }),
    ))
}

/// GET /api/feedback
///
/// All feedback generated so far, in submission order.
pub async fn handle_list_feedback(State(state): State<AppState>) -> Json<Vec<FeedbackRecord>> {
    Json(state.ads.all_feedback().await)
}
