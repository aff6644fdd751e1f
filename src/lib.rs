//! # Chatbot API
//!
//! A rule-based demo chatbot served over HTTP.
//!
//! The whole system is one endpoint: `POST /api/chat` takes a message (and an
//! optional user name), runs it through an ordered table of substring rules,
//! and returns the first matching canned reply. The reply is a pure function
//! of the request; nothing outlives a single request.

pub mod chat;
pub mod config;
pub mod server;

pub use chat::rules::select_reply;
pub use chat::types::{ChatRequest, ChatResponse};
pub use config::ServerConfig;

/// Crate version, reported by `GET /health`.
pub const VERSION: &str = "0.1.0";
