//! # kbchat Chat Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! This module provides the HTTP front end of the chatbot. It loads the
//! knowledge base once, then answers `POST /chat` requests until shut down.
//! Configurable options:
//! - Knowledge base file
//! - Host interface and port binding (with automatic fallback if the port is in use)
//! - CORS (Cross-Origin Resource Sharing)
//!
//! ## Architecture
//!
//! - `config.rs`: Flag/file/default merging into a `ServerConfig`
//! - `handlers.rs`: Route handlers and shared state
//! - `error.rs`: The uniform `{"detail": ...}` error response
//! - `server_logic.rs`: Router assembly, port selection, serving and shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Serve ./knowledge_base.json on 0.0.0.0:8000
//! kbchat serve
//!
//! # Pick the file and port explicitly, without CORS headers
//! kbchat serve --kb faq.json --port 9000 --no-cors
//!
//! curl -X POST localhost:9000/chat -d '{"message": "what is your refund policy?"}'
//! ```
//!
use crate::core::error::Result;
use crate::knowledge::KnowledgeBase;
use std::sync::Arc;
use tracing::{info, warn};

pub use config::ServeArgs;

/// Handles configuration loading and merging for the chat server.
pub mod config;

/// Uniform JSON error responses.
pub mod error;

/// Route handlers and application state.
pub mod handlers;

/// Contains the core Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// 1. Resolves the effective configuration.
/// 2. Loads the knowledge base; a missing or malformed file aborts startup.
/// 3. Logs diagnostics for entries that can never be returned.
/// 4. Runs the server until shutdown.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(&args)?;
    info!("Effective server config: {:?}", config);

    let kb = KnowledgeBase::load(&config.knowledge_base)?;
    if kb.is_empty() {
        warn!("Knowledge base is empty; every message will get the fallback reply.");
    }
    log_diagnostics(&kb);

    server_logic::run_server(config, Arc::new(kb)).await
}

fn log_diagnostics(kb: &KnowledgeBase) {
    let report = kb.diagnostics();
    for index in &report.blank {
        warn!(entry = index + 1, "Entry has an empty question and is never matched");
    }
    for index in &report.empty_answers {
        warn!(entry = index + 1, "Entry has an empty answer; matches get the fallback reply");
    }
    for shadowed in &report.shadowed {
        warn!(
            entry = shadowed.index + 1,
            shadowed_by = shadowed.by + 1,
            "Entry is unreachable: an earlier question is contained in it"
        );
    }
}
