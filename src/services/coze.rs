// src/services/coze.rs
use reqwest::Client;

use crate::error::AppError;
use crate::message::{CozeChatRequest, CozeChatResponse};

/// Returned when the upstream answer contains no usable assistant message.
pub const FALLBACK_REPLY: &str = "no reply";

const DETAIL_LIMIT: usize = 200;

/// Issues the single outbound call. One attempt, no retries; the client's
/// timeout bounds the whole exchange.
pub async fn send_chat(
    client: &Client,
    url: &str,
    token: &str,
    request: &CozeChatRequest<'_>,
) -> Result<serde_json::Value, AppError> {
    tracing::debug!(bot_id = request.bot_id, user_id = request.user_id, "forwarding query to Coze");

    let response = client
        .post(url)
        .bearer_auth(token)
        .json(request)
        .send()
        .await
        .map_err(classify_request_error)?;

    let status = response.status();
    if !status.is_success() {
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::error!(status = status.as_u16(), %detail, "Coze returned an error status");
        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            detail: truncate_detail(&detail),
        });
    }

    response.json().await.map_err(classify_request_error)
}

/// First assistant message wins; entries that carry a `type` other than
/// `answer` (follow_up, verbose) are skipped.
pub fn extract_reply(response: &CozeChatResponse) -> Option<&str> {
    response
        .messages
        .iter()
        .find(|m| m.role == "assistant" && m.msg_type.as_deref().is_none_or(|t| t == "answer"))
        .map(|m| m.content.as_str())
}

fn classify_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::error!("Coze request timed out");
        AppError::UpstreamTimeout
    } else if err.is_connect() {
        tracing::error!("could not connect to Coze: {}", err);
        AppError::UpstreamConnect(err.to_string())
    } else {
        tracing::error!("Coze request failed: {}", err);
        AppError::Upstream(err.to_string())
    }
}

fn truncate_detail(text: &str) -> String {
    text.chars().take(DETAIL_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::CozeMessage;

    fn message(role: &str, msg_type: Option<&str>, content: &str) -> CozeMessage {
        CozeMessage {
            role: role.to_string(),
            msg_type: msg_type.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn picks_first_assistant_message() {
        let response = CozeChatResponse {
            messages: vec![
                message("user", None, "hi"),
                message("assistant", None, "hello"),
                message("assistant", None, "later"),
            ],
        };
        assert_eq!(extract_reply(&response), Some("hello"));
    }

    #[test]
    fn skips_non_answer_assistant_messages() {
        let response = CozeChatResponse {
            messages: vec![
                message("assistant", Some("follow_up"), "anything else?"),
                message("assistant", Some("answer"), "42"),
            ],
        };
        assert_eq!(extract_reply(&response), Some("42"));
    }

    #[test]
    fn no_assistant_message_yields_none() {
        let response = CozeChatResponse {
            messages: vec![message("user", None, "hi")],
        };
        assert_eq!(extract_reply(&response), None);
    }

    #[test]
    fn empty_messages_yields_none() {
        assert_eq!(extract_reply(&CozeChatResponse::default()), None);
    }

    #[test]
    fn detail_is_truncated() {
        let long = "x".repeat(500);
        assert_eq!(truncate_detail(&long).len(), 200);
        assert_eq!(truncate_detail("short"), "short");
    }
}
