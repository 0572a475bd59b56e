//! # kbchat Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout kbchat. It provides a
//! consistent approach to error management with specific variants for the
//! failures the domain knows about, and a flexible `Result` alias for
//! command-level code.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `KbchatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Request body decoding errors
//! - Knowledge base loading errors
//! - Configuration errors
//!
//! The HTTP layer converts these into its own response type
//! (`commands::serve::error::ApiError`), so nothing here knows about status codes.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !value.is_array() {
//!     return Err(KbchatError::KnowledgeBase("expected a JSON array".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read knowledge base: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for kbchat.
#[derive(Error, Debug)]
pub enum KbchatError {
    #[error("Request body is not valid UTF-8: {source}")]
    Decoding {
        #[from]
        source: std::str::Utf8Error,
    },

    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
