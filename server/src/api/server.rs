//! HTTP dev server for RAG Load.
//!
//! Serves the built frontend and relays uploads to the processing service.
//! Document processing itself happens in that external service.
//!
//! # API Endpoints
//!
//! | Method | Path                  | Description                              |
//! |--------|-----------------------|------------------------------------------|
//! | GET    | `/health`             | Health check                             |
//! | POST   | `/api/process-files`  | Relay upload to the processing service   |
//! | GET    | `/*`                  | Frontend assets (SPA fallback)           |

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use ragload::PROCESS_ENDPOINT;
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use super::relay::process_files;
use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared state of the request handlers.
#[derive(Debug)]
pub struct AppState {
    /// Client used to reach the processing service
    pub http: reqwest::Client,
    /// Where uploads are forwarded
    pub processor_url: String,
}

impl AppState {
    pub fn new(processor_url: impl Into<String>) -> ServerResult<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            processor_url: processor_url.into(),
        })
    }
}

/// Build the application router.
pub fn create_router(config: &ServerConfig) -> ServerResult<Router> {
    let state = Arc::new(AppState::new(config.processor_url.clone())?);

    // CORS permissif pour le développement
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let index = config.dist_dir.join("index.html");
    let assets = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        .route("/health", get(health))
        .route(
            PROCESS_ENDPOINT,
            post(process_files).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .fallback_service(assets)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let app = create_router(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🚀 RAG Load server running on http://localhost:{}", config.port);
    tracing::info!("   POST {} -> {}", PROCESS_ENDPOINT, config.processor_url);
    tracing::info!("   GET  /health");
    tracing::info!("   GET  /*  (frontend from {})", config.dist_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "ragload",
        "version": env!("CARGO_PKG_VERSION"),
        "processor": state.processor_url,
        "endpoints": {
            "process": format!("POST {}", PROCESS_ENDPOINT),
            "health": "GET /health"
        }
    }))
}
