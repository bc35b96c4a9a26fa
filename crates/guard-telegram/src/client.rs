//! reqwest implementation of `BotApi`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use guard_common::TelegramConfig;
use guard_core::error::DomainError;
use guard_core::traits::{BotApi, MemberMethod, OutgoingMessage, RemoteResult};
use guard_core::value_objects::{BotToken, ChatId};

/// Public Bot API endpoint
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Stateless Bot API client
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Serialize)]
struct MemberPayload<'a> {
    chat_id: &'a ChatId,
    user_id: &'a ChatId,
}

impl TelegramClient {
    /// Create a client against `base_url` with a request timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        Self::with_http_client(http, base_url)
    }

    /// Create a client reusing an existing reqwest client
    #[must_use]
    pub fn with_http_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Create a client from application config
    #[must_use]
    pub fn from_config(config: &TelegramConfig) -> Self {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, token: &BotToken, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, token.expose(), method)
    }

    /// POST a JSON payload and return the body text whatever the status
    async fn call<T: Serialize + ?Sized>(
        &self,
        token: &BotToken,
        method: &str,
        payload: &T,
    ) -> RemoteResult<String> {
        let response = self
            .http
            .post(self.method_url(token, method))
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the token
                let e = e.without_url();
                warn!(method, error = %e, "Bot API request failed");
                DomainError::RemoteUnavailable(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::RemoteUnavailable(e.without_url().to_string())
        })?;

        debug!(method, status = status.as_u16(), "Bot API responded");
        Ok(body)
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl BotApi for TelegramClient {
    #[instrument(skip(self, token, method), fields(method = method.as_str()))]
    async fn member_action(
        &self,
        token: &BotToken,
        method: MemberMethod,
        chat: &ChatId,
        user: &ChatId,
    ) -> RemoteResult<String> {
        let payload = MemberPayload {
            chat_id: chat,
            user_id: user,
        };
        self.call(token, method.as_str(), &payload).await
    }

    #[instrument(skip(self, token, message), fields(chat_id = %message.chat_id))]
    async fn send_message(
        &self,
        token: &BotToken,
        message: &OutgoingMessage,
    ) -> RemoteResult<String> {
        self.call(token, "sendMessage", message).await
    }
}
