//! HTTP API server.
//!
//! Exposes the summarization pipeline as a single endpoint plus a liveness
//! check, with permissive CORS for browser frontends.

use crate::config::Settings;
use crate::orchestrator::{Orchestrator, SummarySource};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Shared application state.
pub struct AppState {
    pub orchestrator: Orchestrator,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/summarize", post(summarize))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(settings)?;
    let app = router(Arc::new(AppState { orchestrator }));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct SummarizeRequest {
    /// Video URL or bare identifier
    url: String,
}

#[derive(Serialize)]
struct SummarizeResponse {
    summary: String,
    source: SummarySource,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

// === Handlers ===

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "sammendrag is running; POST a video URL to /summarize"
    }))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    match state.orchestrator.summarize_video(&req.url).await {
        Ok(result) => Json(SummarizeResponse {
            summary: result.summary,
            source: result.source,
        })
        .into_response(),
        Err(e) => {
            error!("Summarization request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
