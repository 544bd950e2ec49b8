mod ads;
mod catalog;
mod config;
mod errors;
mod feedback;
mod models;
mod routes;
mod state;
mod uploads;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ads::repository::InMemoryAdRepository;
use crate::catalog::InMemoryCatalog;
use crate::config::{Config, S3Settings, StorageBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::uploads::store::{ImageStore, LocalImageStore, S3ImageStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AdLens API v{}", env!("CARGO_PKG_VERSION"));

    // Personality catalog is seeded once and read-only afterwards
    let catalog = Arc::new(InMemoryCatalog::seeded());
    if catalog.is_empty() {
        warn!("Personality catalog is empty; every feedback request will be rejected");
    } else {
        info!("Personality catalog seeded with {} entries", catalog.len());
    }

    let images: Arc<dyn ImageStore> = match &config.storage {
        StorageBackend::Local => {
            let store = LocalImageStore::new(&config.upload_dir).await?;
            info!("Storing uploads under {}", store.root().display());
            Arc::new(store)
        }
        StorageBackend::S3(settings) => {
            let client = build_s3_client(settings).await;
            info!("Storing uploads in S3 bucket '{}'", settings.bucket);
            Arc::new(S3ImageStore::new(
                client,
                settings.bucket.clone(),
                settings.endpoint.clone(),
            ))
        }
    };

    info!("Image storage backend: {}", images.backend());

    let state = AppState::new(
        config.clone(),
        catalog,
        images,
        Arc::new(InMemoryAdRepository::new()),
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(settings: &S3Settings) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &settings.access_key_id,
        &settings.secret_access_key,
        None,
        None,
        "adlens-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&settings.endpoint)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}
