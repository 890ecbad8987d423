//! Chess bot web server.
//!
//! Minimal HTTP server exposing the move selector.
//! Endpoints:
//! - GET  /health - Health check
//! - POST /move   - Recommend a move for a FEN position
//! - GET  /model  - Get info about the loaded evaluation model

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use minimax::{Evaluator, MoveSelector};

mod handlers;
mod types;

use bot_config::load_config;
use handlers::{get_model_info, health, select_move};

/// Info about the evaluation model behind the selector, fixed at startup.
pub struct ModelInfo {
    pub loaded: bool,
    pub path: Option<String>,
}

/// Shared application state
pub struct AppState {
    /// Move selector owning the evaluation model
    pub selector: MoveSelector<Box<dyn Evaluator>>,
    /// Search depth used when a request does not specify one
    pub default_depth: u32,
    /// Largest depth accepted from requests
    pub max_depth: u32,
    /// Loaded model info for the /model endpoint
    pub model: ModelInfo,
}

/// Create the application router with the given state.
/// This is separated out for testing purposes.
pub fn create_app(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let cors = if allowed_origins.is_empty() {
        warn!("CORS: allowing all origins (development mode)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health))
        .route("/move", post(select_move))
        .route("/model", get(get_model_info))
        .layer(cors)
        .with_state(state)
}

/// Create application state for testing (material evaluator, no model file)
#[cfg(test)]
pub fn create_test_state() -> Arc<AppState> {
    let evaluator: Box<dyn Evaluator> = Box::new(minimax::MaterialEvaluator::new());
    Arc::new(AppState {
        selector: MoveSelector::new(evaluator),
        default_depth: 1,
        max_depth: 4,
        model: ModelInfo {
            loaded: false,
            path: None,
        },
    })
}

/// Creates a future that completes when a shutdown signal is received.
/// Handles Ctrl+C on all platforms.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received, stopping server...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("web=info".parse().unwrap())
                .add_directive("ort=warn".parse().unwrap()),
        )
        .init();

    // Load configuration from config.toml with env var overrides
    let config = load_config();
    info!(
        "Configuration: depth={}, max_depth={}, model={}",
        config.search.depth, config.search.max_depth, config.model.path
    );
    anyhow::ensure!(
        config.search.depth >= 1 && config.search.depth <= config.search.max_depth,
        "search.depth must be between 1 and search.max_depth ({})",
        config.search.max_depth
    );

    // The model is loaded once at startup; a missing or unreadable model
    // is fatal because the search has no defined behavior without it.
    #[cfg(feature = "onnx")]
    let (evaluator, model): (Box<dyn Evaluator>, ModelInfo) = {
        use anyhow::Context;
        let evaluator =
            minimax::OnnxEvaluator::load(&config.model.path, config.model.onnx_intra_threads)
                .with_context(|| {
                    format!("failed to load evaluation model from {}", config.model.path)
                })?;
        info!("Loaded evaluation model from {}", config.model.path);
        (
            Box::new(evaluator),
            ModelInfo {
                loaded: true,
                path: Some(config.model.path.clone()),
            },
        )
    };

    #[cfg(not(feature = "onnx"))]
    let (evaluator, model): (Box<dyn Evaluator>, ModelInfo) = {
        warn!("Built without the onnx feature - using material evaluation");
        (
            Box::new(minimax::MaterialEvaluator::new()),
            ModelInfo {
                loaded: false,
                path: None,
            },
        )
    };

    let state = Arc::new(AppState {
        selector: MoveSelector::new(evaluator),
        default_depth: config.search.depth,
        max_depth: config.search.max_depth,
        model,
    });

    // Build router
    let app = create_app(state, &config.web.allowed_origins);

    let addr = format!("{}:{}", config.web.host, config.web.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

// ============================================================================
// Integration Tests
// ============================================================================
