//! HTTP server for the chatbot.
//!
//! # Endpoints
//!
//! - `GET  /health`   — Liveness probe
//! - `POST /api/chat` — Rule-based chat reply

pub mod routes;

pub use routes::app_router;
