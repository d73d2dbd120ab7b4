// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "default_user".to_string()
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Raw upstream payload, echoed only when DEBUG is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

/// Outbound payload for the Coze chat endpoint.
#[derive(Debug, Serialize)]
pub struct CozeChatRequest<'a> {
    pub bot_id: &'a str,
    pub user_id: &'a str,
    pub query: &'a str,
    pub stream: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CozeChatResponse {
    #[serde(default)]
    pub messages: Vec<CozeMessage>,
}

#[derive(Debug, Deserialize)]
pub struct CozeMessage {
    pub role: String,
    #[serde(rename = "type", default)]
    pub msg_type: Option<String>,
    #[serde(default)]
    pub content: String,
}
