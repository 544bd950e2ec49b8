//! Multipart form accepted by the submission endpoints.
//!
//! Field names from both generations of the web client are accepted:
//! `description` or `copy` for ad text, and either `personalities` (a JSON array
//! of ids) or `personality_ids` (comma-separated).

use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;
use crate::feedback::engine::FeedbackError;
use crate::models::advertisement::Advertisement;
use crate::uploads::store::ImageStore;
use crate::uploads::{ImageKind, ImageUpload};

#[derive(Debug, Default)]
pub struct AdSubmissionForm {
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
    personalities_json: Option<String>,
    personality_ids_csv: Option<String>,
}

impl AdSubmissionForm {
    /// Drains `multipart`, validating any image against the type whitelist and `max_image_bytes`.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_image_bytes: usize,
    ) -> Result<Self, AppError> {
        let mut form = AdSubmissionForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "description" | "copy" => {
                    let text = field.text().await?;
                    if !text.trim().is_empty() {
                        form.description = Some(text);
                    }
                }
                "image" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?;

                    // Browsers send an empty file part when nothing was picked.
                    if data.is_empty() {
                        continue;
                    }
                    if data.len() > max_image_bytes {
                        return Err(AppError::PayloadTooLarge(format!(
                            "Image exceeds the {max_image_bytes} byte limit"
                        )));
                    }

                    let kind = match content_type.as_deref() {
                        Some(mime) if mime != "application/octet-stream" => {
                            ImageKind::from_mime(mime)
                        }
                        _ => file_name.as_deref().and_then(ImageKind::from_extension),
                    }
                    .ok_or_else(|| {
                        AppError::UnsupportedMediaType(
                            "Invalid file type. Only JPG, PNG, and GIF are allowed.".to_string(),
                        )
                    })?;

                    form.image = Some(ImageUpload {
                        file_name,
                        kind,
                        data,
                    });
                }
                "personalities" => form.personalities_json = Some(field.text().await?),
                "personality_ids" => form.personality_ids_csv = Some(field.text().await?),
                other => debug!("Ignoring unexpected form field '{other}'"),
            }
        }

        Ok(form)
    }

    pub fn has_content(&self) -> bool {
        self.description.is_some() || self.image.is_some()
    }

    /// Stores the image (if any) and builds the ad.
    ///
    /// Content is checked first so a rejected submission never leaves a file behind.
    pub async fn into_advertisement(
        self,
        images: &dyn ImageStore,
    ) -> Result<Advertisement, AppError> {
        if !self.has_content() {
            return Err(FeedbackError::InvalidAdvertisement.into());
        }

        let image_url = match &self.image {
            Some(upload) => Some(images.save(upload).await?),
            None => None,
        };

        Ok(Advertisement::new(self.description, image_url)?)
    }

    pub fn personality_ids(&self) -> Result<Vec<String>, AppError> {
        parse_personality_ids(
            self.personalities_json.as_deref(),
            self.personality_ids_csv.as_deref(),
        )
    }
}

/// Parses the selected personality ids. The JSON array form wins when both are present.
/// Blank entries are dropped; order and duplicates are kept.
pub fn parse_personality_ids(
    json: Option<&str>,
    csv: Option<&str>,
) -> Result<Vec<String>, AppError> {
    let ids: Vec<String> = match (json.map(str::trim), csv) {
        (Some(raw), _) if !raw.is_empty() => serde_json::from_str::<Vec<String>>(raw)
            .map_err(|e| {
                AppError::Validation(format!(
                    "personalities must be a JSON array of id strings: {e}"
                ))
            })?,
        (_, Some(raw)) => raw.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    Ok(ids
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect())
}
