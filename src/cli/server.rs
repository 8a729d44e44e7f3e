//! HTTP server mode for REST API access to the generator

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::generator::{GenerateRequest, Generator};
use crate::profile::ProfileRegistry;
use crate::types::TypeTag;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Profiles the server can generate for
    pub registry: ProfileRegistry,
}

/// App state shared across handlers
struct AppState {
    generator: Generator,
}

/// Query string of the languages endpoint
#[derive(Debug, Default, Deserialize)]
struct LangsQuery {
    code: Option<String>,
    name: Option<String>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the application router
pub fn router(config: ServerConfig) -> Router {
    let state = AppState {
        generator: Generator::new(config.registry),
    };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/langs", get(list_langs))
        .route("/types", get(list_types))
        .route("/generate", post(generate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List languages, optionally filtered by code or name
async fn list_langs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangsQuery>,
) -> impl IntoResponse {
    let langs = state
        .generator
        .registry()
        .list(query.code.as_deref(), query.name.as_deref());
    (
        StatusCode::OK,
        Json(ApiResponse::success(json!({ "langs": langs }))),
    )
}

/// List the lattice tags a profile maps
async fn list_types() -> impl IntoResponse {
    let required: Vec<&str> = TypeTag::BASE.iter().map(|t| t.as_str()).collect();
    let optional: Vec<&str> = TypeTag::EXTENDED.iter().map(|t| t.as_str()).collect();
    (
        StatusCode::OK,
        Json(ApiResponse::success(json!({
            "required": required,
            "optional": optional
        }))),
    )
}

/// Run one generation request
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    match state.generator.generate(&request) {
        Ok(response) => (StatusCode::OK, Json(ApiResponse::success(response))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Generation failed");
            let status = if e.is_user_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}
