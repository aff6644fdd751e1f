//! Server configuration.
//!
//! Loaded from the environment once at process start and never mutated
//! afterwards. Everything has a default suited to local development.

use thiserror::Error;

/// Default origins: the React dev server and the Spring Boot backend.
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:8080"];

const DEFAULT_PORT: u16 = 8000;

/// Errors from reading configuration out of the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind on all interfaces.
    pub port: u16,
    /// CORS origin allow-list.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load from environment variables.
    ///
    /// - `PORT` — HTTP port (default: 8000)
    /// - `CHATBOT_ALLOWED_ORIGINS` — comma-separated CORS allow-list
    ///   (default: the two local development origins)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = match std::env::var("CHATBOT_ALLOWED_ORIGINS") {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => Self::default_origins(),
        };

        Ok(Self {
            port,
            allowed_origins,
        })
    }

    fn default_origins() -> Vec<String> {
        DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: Self::default_origins(),
        }
    }
}
