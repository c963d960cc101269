// src/services/chat_client.rs
use reqwest::{Client, Url, header};
use tracing::{info, warn};

use crate::config::ApiKey;
use crate::error::GatewayError;
use crate::message::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

pub const CHAT_MODEL: &str = "deepseek-chat";
pub const CHAT_TEMPERATURE: f64 = 0.7;
pub const CHAT_MAX_TOKENS: u32 = 1000;

pub const INSUFFICIENT_BALANCE_ERROR: &str = "Insufficient Balance";
pub const INSUFFICIENT_BALANCE_MESSAGE: &str = "账户余额不足，请充值后再试。";
pub const FALLBACK_MESSAGE: &str = "对不起，我无法回答这个问题。请稍后再试。";

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    base_url: Url,
}

impl ChatClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn completions_url(&self) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::UpstreamCallFailed(format!(
                    "chat base url cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["v1", "chat", "completions"]);
        Ok(url)
    }

    /// Sends one prompt and returns display-ready text. Upstream-reported
    /// errors come back as `Ok` text; only transport failures are `Err`.
    pub async fn ask(&self, api_key: &ApiKey, prompt: &str) -> Result<String, GatewayError> {
        let url = self.completions_url()?;
        let body = ChatCompletionRequest {
            model: CHAT_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: CHAT_TEMPERATURE,
            max_tokens: CHAT_MAX_TOKENS,
        };

        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        info!(status = status.as_u16(), bytes = bytes.len(), "chat upstream responded");

        let payload: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(normalize_reply(payload))
    }
}

/// Maps a decoded upstream payload to the text handed back to the caller.
pub fn normalize_reply(payload: ChatCompletionResponse) -> String {
    if let Some(error) = payload.error {
        match error.message {
            Some(message) if message == INSUFFICIENT_BALANCE_ERROR => {
                warn!("chat upstream reports insufficient balance");
                return INSUFFICIENT_BALANCE_MESSAGE.to_string();
            }
            Some(message) => {
                warn!(upstream_error = %message, "chat upstream reported an error");
                return message;
            }
            None => {
                warn!("chat upstream reported an error without a message");
                return FALLBACK_MESSAGE.to_string();
            }
        }
    }

    payload
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
