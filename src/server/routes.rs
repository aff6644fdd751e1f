//! Axum route handlers for the chatbot HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`   — Returns `{"status": "ok", "version": "0.1.0"}`
//! - `POST /api/chat` — Accepts `ChatRequest`, returns the selected reply
//!
//! Request bodies that fail to decode (missing `message`, invalid JSON) are
//! rejected by the `Json` extractor as client errors; the reply selector
//! only ever sees well-formed requests.

use axum::{
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::chat::rules::select_reply;
use crate::chat::types::{ChatRequest, ChatResponse};
use crate::config::ServerConfig;

/// Build the axum router with all routes.
pub fn app_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS layer from the configured origin allow-list.
///
/// Methods and headers mirror the request rather than using the wildcard:
/// tower-http refuses `Any` combined with `allow_credentials(true)`, and
/// mirroring grants the same "anything goes" surface to allow-listed origins.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.allowed_origins.len());
    for origin in &config.allowed_origins {
        match origin.parse() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(origin = %origin, "skipping unparseable CORS origin"),
        }
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "chatbot-api",
    }))
}

/// POST /api/chat — run the message through the rule table.
async fn chat_handler(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    tracing::debug!(user = request.user.as_deref(), "chat request received");
    Json(select_reply(&request))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
