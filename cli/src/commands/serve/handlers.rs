//! # kbchat HTTP Handlers
//!
//! File: cli/src/commands/serve/handlers.rs
//!
//! ## Overview
//!
//! Route handlers for the chat service:
//! - `POST /chat`: body → normalized message → knowledge base lookup → `{"reply": ...}`
//! - `GET /health`: liveness plus the number of loaded entries
//! - fallback: `404 {"detail": "Not Found"}`
//!
//! The knowledge base lives in `AppState` behind an `Arc` and is only read.
//! The raw body is taken as bytes regardless of `Content-Type`; the chat
//! module decides how to interpret it.
//!
use super::error::ApiError;
use crate::chat;
use crate::knowledge::KnowledgeBase;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub kb: Arc<KnowledgeBase>,
}

/// Successful `/chat` response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub entries: usize,
}

/// `POST /chat`
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let reply = chat::handle_body(&state.kb, &body?)?;
    Ok(Json(ChatReply { reply }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        entries: state.kb.len(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Converts a handler panic into a `500` with the panic message as detail.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };
    ApiError::Internal(detail).into_response()
}
