// src/config.rs
use std::{env, time::Duration};

use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "https://api.coze.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read once from the environment at startup.
///
/// Credentials stay optional: a missing secret surfaces per request as a
/// 500 after validation, and the error never names which secret is absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub base_url: String,
    pub bot_id: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Duration,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let base_url = env::var("COZE_BASE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let bot_id = env::var("COZE_BOT_ID").ok().filter(|v| !v.is_empty());
        let access_token = env::var("COZE_ACCESS_TOKEN").ok().filter(|v| !v.is_empty());

        let timeout_secs = env::var("COZE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let debug = env::var("DEBUG").map(|v| flag_enabled(&v)).unwrap_or(false);

        Config {
            port,
            base_url,
            bot_id,
            access_token,
            timeout: Duration::from_secs(timeout_secs),
            debug,
        }
    }

    /// Upstream chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/v1/bot/chat", self.base_url.trim_end_matches('/'))
    }

    /// Both secrets, or the single non-leaking misconfiguration error.
    pub fn credentials(&self) -> Result<(&str, &str), AppError> {
        match (self.bot_id.as_deref(), self.access_token.as_deref()) {
            (Some(bot_id), Some(token)) => Ok((bot_id, token)),
            _ => Err(AppError::MissingCredentials),
        }
    }
}

fn flag_enabled(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
