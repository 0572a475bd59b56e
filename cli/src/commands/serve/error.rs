//! # HTTP Error Responses
//!
//! File: cli/src/commands/serve/error.rs
//!
//! Every failure leaving the HTTP service has the same shape:
//! a non-2xx status and a JSON body `{"detail": "<reason>"}`.
//!
use crate::core::error::KbchatError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Chat(#[from] KbchatError),

    #[error("{0}")]
    Body(#[from] BytesRejection),

    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Chat(KbchatError::Decoding { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Chat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        if status.is_server_error() {
            error!(%status, %detail, "Request failed");
        } else {
            warn!(%status, %detail, "Request rejected");
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_error_is_bad_request() {
        let utf8_err = std::str::from_utf8(&[0xff]).unwrap_err();
        let err = ApiError::from(KbchatError::from(utf8_err));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Request body is not valid UTF-8"));
    }

    #[test]
    fn test_other_statuses() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Chat(KbchatError::KnowledgeBase("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_detail() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
