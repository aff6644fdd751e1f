//! The reply selector — an ordered table of substring rules.
//!
//! Each rule pairs a trigger predicate over the *normalized* message text
//! with a response template over the *original* request. `select_reply`
//! walks the table in order and the first matching rule wins; when nothing
//! matches, the fallback template answers.
//!
//! Matching is plain substring containment, not word-boundary matching:
//! "shinier" contains "hi" and greets the user. That is the intended
//! behavior, not an oversight.

use crate::chat::types::{ChatRequest, ChatResponse};

/// A single chat rule.
pub struct Rule {
    /// Stable name, used in debug logs.
    pub name: &'static str,
    /// Trigger predicate. Only ever sees normalized text.
    trigger: fn(&str) -> bool,
    /// Response template. Renders from the original, unnormalized request.
    respond: fn(&ChatRequest) -> String,
}

/// The rule table, in evaluation order. First match wins.
pub static RULES: &[Rule] = &[
    Rule {
        name: "empty",
        trigger: |text| text.is_empty(),
        respond: |_| "Please say something so I can help you.".to_string(),
    },
    Rule {
        name: "greeting",
        trigger: |text| text.contains("hello") || text.contains("hi"),
        respond: greeting_reply,
    },
    Rule {
        name: "help",
        trigger: |text| text.contains("help"),
        respond: |_| {
            "I am a simple demo bot. Try asking about the app, login, or signup.".to_string()
        },
    },
    Rule {
        name: "account",
        trigger: |text| {
            text.contains("login") || text.contains("signup") || text.contains("sign up")
        },
        respond: |_| {
            "You can create an account on the signup page, then log in to access the chat."
                .to_string()
        },
    },
];

/// Normalize message text for rule matching: trim, then lowercase.
///
/// Applied exactly once, before any trigger runs.
fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

fn greeting_reply(request: &ChatRequest) -> String {
    // An empty user string greets "there", same as an absent one.
    let name = request
        .user
        .as_deref()
        .filter(|user| !user.is_empty())
        .unwrap_or("there");
    format!("Hello, {}! How can I help you today?", name)
}

fn fallback_reply(request: &ChatRequest) -> String {
    format!(
        "You said: '{}'. I am a simple demo bot, but I'm listening!",
        request.message
    )
}

/// Pick the reply for a chat request.
///
/// Pure and stateless: identical requests always produce identical replies.
pub fn select_reply(request: &ChatRequest) -> ChatResponse {
    let text = normalize(&request.message);

    let reply = match RULES.iter().find(|rule| (rule.trigger)(&text)) {
        Some(rule) => {
            tracing::debug!(rule = rule.name, "chat rule matched");
            (rule.respond)(request)
        }
        None => {
            tracing::debug!(rule = "fallback", "no chat rule matched");
            fallback_reply(request)
        }
    };

    ChatResponse { reply }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: &str, user: Option<&str>) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            user: user.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_message() {
        let reply = select_reply(&request("", None)).reply;
        assert_eq!(reply, "Please say something so I can help you.");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        // The empty rule fires regardless of user.
        let reply = select_reply(&request("   \t  ", Some("Ana"))).reply;
        assert_eq!(reply, "Please say something so I can help you.");
    }

    #[test]
    fn test_greeting_without_user() {
        let reply = select_reply(&request("  HELLO there", None)).reply;
        assert_eq!(reply, "Hello, there! How can I help you today?");
    }

    #[test]
    fn test_greeting_with_user() {
        let reply = select_reply(&request("Hi", Some("Ana"))).reply;
        assert_eq!(reply, "Hello, Ana! How can I help you today?");
    }

    #[test]
    fn test_greeting_with_empty_user_falls_back_to_there() {
        let reply = select_reply(&request("hello", Some(""))).reply;
        assert_eq!(reply, "Hello, there! How can I help you today?");
    }

    #[test]
    fn test_help() {
        let reply = select_reply(&request("I need help", None)).reply;
        assert_eq!(
            reply,
            "I am a simple demo bot. Try asking about the app, login, or signup."
        );
    }

    #[test]
    fn test_account_sign_up_with_space() {
        let reply = select_reply(&request("how do I sign up", None)).reply;
        assert_eq!(
            reply,
            "You can create an account on the signup page, then log in to access the chat."
        );
    }

    #[test]
    fn test_account_login() {
        let reply = select_reply(&request("where is the LOGIN page?", None)).reply;
        assert_eq!(
            reply,
            "You can create an account on the signup page, then log in to access the chat."
        );
    }

    #[test]
    fn test_fallback_echoes_original_message() {
        let reply = select_reply(&request("what's the weather", None)).reply;
        assert_eq!(
            reply,
            "You said: 'what's the weather'. I am a simple demo bot, but I'm listening!"
        );
    }

    #[test]
    fn test_fallback_preserves_casing_and_whitespace() {
        // Templates see the original message, never the normalized one.
        let reply = select_reply(&request("  What Is RUST  ", None)).reply;
        assert_eq!(
            reply,
            "You said: '  What Is RUST  '. I am a simple demo bot, but I'm listening!"
        );
    }

    #[test]
    fn test_greeting_wins_over_help() {
        // Rule order is load-bearing: "hi, can you help" matches both the
        // greeting and help triggers, and the greeting comes first.
        let reply = select_reply(&request("hi, can you help", None)).reply;
        assert_eq!(reply, "Hello, there! How can I help you today?");
    }

    #[test]
    fn test_substring_match_inside_word() {
        // "shinier" contains "hi" — substring containment is the contract.
        let reply = select_reply(&request("shinier", None)).reply;
        assert_eq!(reply, "Hello, there! How can I help you today?");
    }

    #[test]
    fn test_idempotent() {
        let req = request("Hi", Some("Ana"));
        assert_eq!(select_reply(&req).reply, select_reply(&req).reply);
    }
}
