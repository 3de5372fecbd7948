//! HTTP client for the Discord REST endpoints the recap reads.
//!
//! Wraps `reqwest` with bot-token auth and typed response deserialization.
//! Covers exactly two read paths: resolving the target channel and walking
//! its message history backward in pages of 100.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::error::DiscordError;
use crate::types::{Channel, Message, GUILD_TEXT};

const DEFAULT_BASE_URL: &str = "https://discord.com/api/v10";

/// Messages requested per history page. Discord caps the `limit` query
/// parameter at 100.
pub const PAGE_LIMIT: u32 = 100;

/// Client for the Discord REST API.
///
/// Use [`DiscordClient::new`] for production or
/// [`DiscordClient::with_base_url`] to point at a mock server in tests.
pub struct DiscordClient {
    client: Client,
    token: String,
    base_url: String,
}

impl DiscordClient {
    /// Creates a client pointed at the production Discord API.
    ///
    /// # Errors
    ///
    /// Returns [`DiscordError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, DiscordError> {
        Self::with_base_url(token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DiscordError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, DiscordError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches the channel object by ID.
    ///
    /// # Errors
    ///
    /// - [`DiscordError::UnexpectedStatus`] on any non-2xx response.
    /// - [`DiscordError::Http`] on network failure.
    /// - [`DiscordError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_channel(&self, channel_id: &str) -> Result<Channel, DiscordError> {
        let url = self.channel_url(channel_id);
        let body = self.request_json(&url, &[]).await?;
        serde_json::from_value(body).map_err(|e| DiscordError::Deserialize {
            context: format!("getChannel(id={channel_id})"),
            source: e,
        })
    }

    /// Resolves the target channel and verifies it is a guild text channel.
    ///
    /// This is the pre-flight check the run performs before any history
    /// fetching; a failure here is fatal for the process.
    ///
    /// # Errors
    ///
    /// - [`DiscordError::ChannelNotFound`] if the API returns 404.
    /// - [`DiscordError::NotATextChannel`] if the channel type is not 0.
    /// - Any error from [`Self::get_channel`].
    pub async fn resolve_text_channel(&self, channel_id: &str) -> Result<Channel, DiscordError> {
        let channel = match self.get_channel(channel_id).await {
            Err(DiscordError::UnexpectedStatus { status: 404, .. }) => {
                return Err(DiscordError::ChannelNotFound {
                    channel_id: channel_id.to_owned(),
                })
            }
            other => other?,
        };

        if channel.kind != GUILD_TEXT {
            return Err(DiscordError::NotATextChannel {
                channel_id: channel_id.to_owned(),
                kind: channel.kind,
            });
        }

        Ok(channel)
    }

    /// Fetches one page of channel history, newest first, optionally bounded
    /// to messages older than `before`.
    ///
    /// # Errors
    ///
    /// - [`DiscordError::UnexpectedStatus`] on any non-2xx response.
    /// - [`DiscordError::Http`] on network failure.
    /// - [`DiscordError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_messages_page(
        &self,
        channel_id: &str,
        before: Option<&str>,
    ) -> Result<Vec<Message>, DiscordError> {
        let url = self.channel_messages_url(channel_id);
        let mut query: Vec<(&str, String)> = vec![("limit", PAGE_LIMIT.to_string())];
        if let Some(cursor) = before {
            query.push(("before", cursor.to_owned()));
        }

        let body = self.request_json(&url, &query).await?;
        serde_json::from_value(body).map_err(|e| DiscordError::Deserialize {
            context: format!("getChannelMessages(id={channel_id})"),
            source: e,
        })
    }

    /// Walks the channel history backward from the newest message and returns
    /// every message created at or after `since`, in retrieval order (newest
    /// first).
    ///
    /// The walk stops at the first batch containing a message older than
    /// `since`, assuming everything on later pages is older still.
    /// Precondition: pagination with `before` yields monotonically decreasing
    /// creation times across batches, which holds for backward history scans.
    /// A service that interleaved backfilled messages would have the tail of
    /// the window silently dropped.
    ///
    /// # Errors
    ///
    /// Propagates the first error from the underlying page requests; no
    /// partial result is returned.
    pub async fn fetch_history_since(
        &self,
        channel_id: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<Message>, DiscordError> {
        let mut messages: Vec<Message> = Vec::new();
        let mut before: Option<String> = None;

        loop {
            let batch = self
                .fetch_messages_page(channel_id, before.as_deref())
                .await?;
            let Some(oldest) = batch.last() else {
                break;
            };
            let cursor = oldest.id.clone();
            let batch_len = batch.len();

            let in_window: Vec<Message> =
                batch.into_iter().filter(|m| m.timestamp >= since).collect();
            let crossed_boundary = in_window.len() < batch_len;

            tracing::debug!(
                page_size = batch_len,
                kept = in_window.len(),
                cursor = %cursor,
                "fetched history page"
            );
            messages.extend(in_window);

            if crossed_boundary {
                break;
            }
            before = Some(cursor);
        }

        Ok(messages)
    }

    fn channel_url(&self, channel_id: &str) -> String {
        format!("{}/channels/{channel_id}", self.base_url)
    }

    fn channel_messages_url(&self, channel_id: &str) -> String {
        format!("{}/channels/{channel_id}/messages", self.base_url)
    }

    async fn request_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, DiscordError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bot {}", self.token),
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscordError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
