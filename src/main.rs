//! Medi-Bot Server
//!
//! A self-hosted medicine information server: drug lookup by typed names or
//! an uploaded prescription photo, with short generated summaries per match.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medibot_server::catalog::{self, Catalog};
use medibot_server::config::Config;
use medibot_server::ocr::{OcrService, OcrServiceConfig};
use medibot_server::routes;
use medibot_server::state::AppState;
use medibot_server::summary::{GenerationParams, OllamaGenerator, PromptBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medibot_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Starting Medi-Bot Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Catalog path: {}", config.catalog.path);

    // Load the medicine catalog. A missing or malformed file is non-fatal:
    // the server stays up with an empty catalog and surfaces the error on
    // the home page.
    let (catalog, catalog_error) = match catalog::load(&config.catalog.path) {
        Ok(catalog) => {
            tracing::info!("Catalog loaded with {} medicines", catalog.len());
            (catalog, None)
        }
        Err(e) => {
            tracing::warn!("Failed to load catalog: {}. Serving with an empty catalog", e);
            (Catalog::empty(), Some(e.to_string()))
        }
    };

    // Initialize OCR and generation services
    let ocr = OcrService::new(OcrServiceConfig {
        backends: config.ocr.backends.clone(),
        ollama_url: config.ocr.ollama_url.clone(),
        ollama_model: config.ocr.ollama_model.clone(),
        language: config.ocr.language.clone(),
    });

    let generator = Arc::new(OllamaGenerator::new(
        &config.generation.ollama_url,
        &config.generation.model,
        GenerationParams {
            max_tokens: config.generation.max_tokens,
            repeat_penalty: config.generation.repeat_penalty,
        },
    ));

    // Create application state
    let port = config.server.port;
    let state = AppState::new(
        config,
        catalog,
        catalog_error,
        ocr,
        PromptBuilder::new(),
        generator,
    );

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Medi-Bot Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
