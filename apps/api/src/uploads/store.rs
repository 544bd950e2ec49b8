//! Image storage — pluggable, trait-based backends for uploaded ad images.
//!
//! Default: `LocalImageStore` (files under `UPLOAD_DIR`, served at `/uploads`).
//! `S3ImageStore` writes to a bucket instead; picked at startup via `STORAGE_BACKEND`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::uploads::ImageUpload;

/// URL prefix the local backend's files are served under.
pub const LOCAL_PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("S3 upload failed: {0}")]
    S3(String),
}

/// Carried in `AppState` as `Arc<dyn ImageStore>`.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists `upload` under a fresh name and returns the reference clients use to fetch it.
    async fn save(&self, upload: &ImageUpload) -> Result<String, StorageError>;

    fn backend(&self) -> &'static str;
}

fn stored_file_name(upload: &ImageUpload) -> String {
    format!("{}.{}", Uuid::new_v4(), upload.extension())
}

// ────────────────────────────────────────────────────────────────────────────
// Local filesystem
// ────────────────────────────────────────────────────────────────────────────

pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Creates the upload directory if it does not exist yet.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(LocalImageStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, upload: &ImageUpload) -> Result<String, StorageError> {
        let file_name = stored_file_name(upload);
        let path = self.root.join(&file_name);
        tokio::fs::write(&path, &upload.data).await?;

        info!("Stored {} byte image at {}", upload.data.len(), path.display());
        Ok(format!("{LOCAL_PUBLIC_PREFIX}/{file_name}"))
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// S3 / MinIO
// ────────────────────────────────────────────────────────────────────────────

pub struct S3ImageStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3ImageStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, endpoint: String) -> Self {
        S3ImageStore {
            client,
            bucket,
            endpoint,
        }
    }

    fn object_key(upload: &ImageUpload) -> String {
        format!("uploads/{}", stored_file_name(upload))
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            key
        )
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn save(&self, upload: &ImageUpload) -> Result<String, StorageError> {
        let key = Self::object_key(upload);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(upload.kind.mime())
            .body(ByteStream::from(upload.data.clone()))
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;

        info!("Uploaded ad image to s3://{}/{}", self.bucket, key);
        Ok(self.object_url(&key))
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
