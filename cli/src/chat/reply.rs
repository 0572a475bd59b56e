//! # Reply Composer
//!
//! File: cli/src/chat/reply.rs
//!
//! Turns a matcher result into the text sent back to the user. A non-empty
//! matched answer is returned verbatim; anything else gets `FALLBACK_REPLY`.
//!
use crate::knowledge::KnowledgeBase;
use tracing::info;

/// Reply sent when no knowledge base entry answers the message.
pub const FALLBACK_REPLY: &str = "I'm sorry, I don't have an answer for that.";

/// Maps a lookup result to the final reply text.
pub fn compose_reply(answer: Option<&str>) -> String {
    match answer {
        Some(answer) if !answer.is_empty() => answer.to_string(),
        _ => FALLBACK_REPLY.to_string(),
    }
}

/// Looks `message` up in `kb` and composes the reply.
pub fn respond(kb: &KnowledgeBase, message: &str) -> String {
    let answer = kb.find_answer(message);
    info!(matched = answer.is_some(), "Composed reply");
    compose_reply(answer)
}
