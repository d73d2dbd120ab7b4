use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, CozeChatRequest, CozeChatResponse},
    services::coze,
    state::SharedState,
};

/// Single entry point for the proxy paths. The method gate lives here so
/// disallowed methods get a JSON body instead of axum's bare 405.
pub async fn coze_proxy_handler(
    State(state): State<SharedState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        // CORS preflight: empty 204, headers come from the router middleware.
        Ok(StatusCode::NO_CONTENT.into_response())
    } else if method == Method::GET {
        Ok(liveness_handler().await.into_response())
    } else if method == Method::POST {
        handle_chat(state, body).await.map(IntoResponse::into_response)
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

pub async fn liveness_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "running" }))
}

async fn handle_chat(state: SharedState, body: Bytes) -> Result<Json<ChatResponse>, AppError> {
    // A missing body counts as an object with no fields, so the query
    // check below is what rejects it.
    let body = if body.is_empty() { Bytes::from_static(b"{}") } else { body };

    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("rejected request body: {}", e);
        AppError::InvalidJson(e.to_string())
    })?;

    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(AppError::MissingQuery)?;

    let (bot_id, token) = state.config.credentials()?;

    let payload = CozeChatRequest {
        bot_id,
        user_id: &request.user_id,
        query,
        stream: false,
    };

    let raw = coze::send_chat(&state.client, &state.config.chat_url(), token, &payload).await?;

    let echo = state.config.debug.then(|| raw.clone());
    let upstream: CozeChatResponse = serde_json::from_value(raw)
        .map_err(|e| AppError::Upstream(format!("unexpected payload shape: {e}")))?;

    let reply = coze::extract_reply(&upstream)
        .unwrap_or(coze::FALLBACK_REPLY)
        .to_string();

    Ok(Json(ChatResponse { reply, raw: echo }))
}
