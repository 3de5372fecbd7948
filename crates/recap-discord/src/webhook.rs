//! Delivery client for the summary webhook.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::DiscordError;

/// POSTs a JSON body to a fixed webhook URL. Generic over the payload type so
/// this crate stays agnostic of the summary's shape.
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    /// Creates a delivery client for the given webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`DiscordError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, DiscordError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    /// Delivers the payload. Any 2xx response counts as delivered.
    ///
    /// # Errors
    ///
    /// - [`DiscordError::WebhookStatus`] on a non-2xx response.
    /// - [`DiscordError::Http`] on a transport failure.
    pub async fn execute<T>(&self, payload: &T) -> Result<(), DiscordError>
    where
        T: Serialize + Sync,
    {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscordError::WebhookStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
