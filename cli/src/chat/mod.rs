//! # kbchat Message Handling
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! Everything between a raw request body and the reply text, independent of
//! the transport:
//! - `normalize`: raw body bytes → `NormalizedMessage` (JSON, form or plain text)
//! - `reply`: knowledge base lookup → reply text, with the fixed fallback
//!
//! `handle_body` chains the two; the HTTP handler and `kbchat ask` both call it.
//!
use crate::core::error::KbchatError;
use crate::knowledge::KnowledgeBase;

pub mod normalize;
pub mod reply;

pub use normalize::normalize_body;
pub use reply::respond;

/// Normalizes `body` and returns the reply for the extracted message.
pub fn handle_body(kb: &KnowledgeBase, body: &[u8]) -> Result<String, KbchatError> {
    let message = normalize_body(body)?;
    Ok(respond(kb, &message.text))
}
