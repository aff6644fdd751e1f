//! Chat module — the reply selector behind `POST /api/chat`.
//!
//! ```text
//! User message
//!   → normalize (trim + lowercase)
//!   → walk the ordered rule table, first match wins
//!   → render the matched template from the original request
//! ```

pub mod rules;
pub mod types;

pub use rules::select_reply;
pub use types::{ChatRequest, ChatResponse};
