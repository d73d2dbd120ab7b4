// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("missing query")]
    MissingQuery,

    #[error("missing Coze credentials")]
    MissingCredentials,

    #[error("upstream returned {status}: {detail}")]
    UpstreamStatus { status: u16, detail: String },

    #[error("upstream request timed out")]
    UpstreamTimeout,

    #[error("upstream connection failed: {0}")]
    UpstreamConnect(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            AppError::InvalidJson(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON", "details": details }),
            ),
            AppError::MissingQuery => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Missing query" }))
            }
            // Deliberately does not say which secret is absent.
            AppError::MissingCredentials => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Missing Coze credentials" }),
            ),
            AppError::UpstreamStatus { status, detail } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": format!("Upstream returned {status}"), "details": detail }),
            ),
            AppError::UpstreamTimeout => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Upstream timeout" }),
            ),
            AppError::UpstreamConnect(details) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Upstream connection failed", "details": details }),
            ),
            AppError::Upstream(details) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Upstream request failed", "details": details }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
