use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::feedback::rules::{classify, Category};
use crate::models::feedback::FeedbackRecord;
use crate::models::personality::Personality;
use crate::state::AppState;

/// GET /api/personalities
pub async fn handle_list_personalities(State(state): State<AppState>) -> Json<Vec<Personality>> {
    Json(state.catalog.list_all())
}

/// GET /api/personalities/:id
pub async fn handle_get_personality(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Personality>, AppError> {
    Ok(Json(state.catalog.get_by_id(&id)?))
}

/// GET /api/personalities/:id/feedback
///
/// Every rating this personality has given, oldest first. Unknown ids are a 404
/// rather than an empty list.
pub async fn handle_personality_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FeedbackRecord>>, AppError> {
    let personality = state.catalog.get_by_id(&id)?;
    Ok(Json(state.ads.feedback_for_personality(&personality.id).await))
}

/// GET /api/categories/:name/personalities
pub async fn handle_category_personalities(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Personality>>, AppError> {
    let category = Category::from_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Category {name} not found")))?;

    let members = state
        .catalog
        .list_all()
        .into_iter()
        .filter(|p| classify(&p.personality_traits) == category)
        .collect();
    Ok(Json(members))
}
