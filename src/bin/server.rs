//! Chatbot API server binary.
//!
//! Starts an axum HTTP server exposing the rule-based chat endpoint.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 8000)
//! - `CHATBOT_ALLOWED_ORIGINS` — comma-separated CORS allow-list
//!   (default: the two local development origins)
//! - `RUST_LOG` — Tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use chatbot_api::server::app_router;
use chatbot_api::ServerConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatbot_api=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");
    let bind_addr = format!("0.0.0.0:{}", config.port);

    let app = app_router(&config);

    tracing::info!("chatbot-api server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health   — liveness probe");
    tracing::info!("  POST /api/chat — rule-based chat reply");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
