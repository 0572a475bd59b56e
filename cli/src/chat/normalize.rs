//! # Request Body Normalizer
//!
//! File: cli/src/chat/normalize.rs
//!
//! ## Overview
//!
//! Reduces a raw request body to the single text message the matcher works
//! on. Callers do not declare a content type; the body is sniffed in a fixed
//! order and the first interpretation that succeeds is used:
//!
//! 1. **JSON**: the text parses as JSON. The `message` field is used when the
//!    value is an object holding a string there; otherwise the whole text is
//!    the message (arrays, scalars, `null`, or a missing/non-string field).
//! 2. **Form**: the text is not JSON but contains `=`. It is decoded as
//!    `application/x-www-form-urlencoded` and the first non-empty `message`
//!    value is used, falling back to the whole text.
//! 3. **Text**: anything else is the message verbatim.
//!
//! The only failure is a body that is not valid UTF-8.
//!
use crate::core::error::KbchatError;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Name of the field carrying the message in JSON and form bodies.
const MESSAGE_FIELD: &str = "message";

/// How the body was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
    Text,
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyFormat::Json => "json",
            BodyFormat::Form => "form",
            BodyFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// The message extracted from one request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    pub text: String,
    pub format: BodyFormat,
}

/// Decodes `body` as UTF-8 and extracts the message from it.
pub fn normalize_body(body: &[u8]) -> Result<NormalizedMessage, KbchatError> {
    let decoded = std::str::from_utf8(body)?;
    let normalized = normalize_text(decoded);
    debug!(
        format = %normalized.format,
        len = normalized.text.len(),
        "Normalized request body"
    );
    Ok(normalized)
}

/// Extracts the message from already-decoded body text. Never fails.
pub fn normalize_text(decoded: &str) -> NormalizedMessage {
    if let Ok(value) = serde_json::from_str::<Value>(decoded) {
        let text = json_message(&value).unwrap_or(decoded).to_string();
        return NormalizedMessage {
            text,
            format: BodyFormat::Json,
        };
    }

    if decoded.contains('=') {
        let text = form_message(decoded).unwrap_or_else(|| decoded.to_string());
        return NormalizedMessage {
            text,
            format: BodyFormat::Form,
        };
    }

    NormalizedMessage {
        text: decoded.to_string(),
        format: BodyFormat::Text,
    }
}

/// `message` as a string when `value` is an object that has one.
fn json_message(value: &Value) -> Option<&str> {
    value.as_object()?.get(MESSAGE_FIELD)?.as_str()
}

/// First non-empty `message` value of a form-encoded body.
fn form_message(decoded: &str) -> Option<String> {
    url::form_urlencoded::parse(decoded.as_bytes())
        .find(|(key, value)| key == MESSAGE_FIELD && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
