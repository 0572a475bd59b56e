//! # kbchat HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! This module runs the chat service for `kbchat serve`:
//! - Port availability checking with automatic fallback
//! - CORS configuration
//! - Request tracing and panic isolation
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! The server uses Axum and follows these steps:
//! 1. Find an available port if the requested one is in use
//! 2. Build the router around the shared, read-only knowledge base
//! 3. Start the server with graceful shutdown handlers
//! 4. Display connection information
//!
use super::config::ServerConfig;
use super::handlers::{self, AppState};
use crate::core::error::Result;
use crate::knowledge::KnowledgeBase;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Consecutive ports tried before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the first available port starting at `config.port`, prints the
/// endpoint summary and serves until Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// - No available port within `MAX_PORT_ATTEMPTS` attempts.
/// - Binding the `TcpListener` fails.
/// - The Axum server encounters a fatal error.
pub async fn run_server(config: ServerConfig, kb: Arc<KnowledgeBase>) -> Result<()> {
    let addr = find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let entries = kb.len();

    let app = create_app(&config, kb);

    println!("\n=================================================================");
    println!("📚 Knowledge base:    {} ({} entries)", config.knowledge_base.display(), entries);
    println!("💬 Chat endpoint:     POST http://localhost:{}/chat", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!("Starting chat server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port` and then the following ports, up to `max_attempts`
/// in total, returning the first address that can be bound.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    warn!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Routes plus middleware: tracing first, then CORS, then panic isolation
/// closest to the handlers.
pub fn create_app(config: &ServerConfig, kb: Arc<KnowledgeBase>) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(AppState { kb })
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer)
                .layer(CatchPanicLayer::custom(handlers::handle_panic)),
        )
}
