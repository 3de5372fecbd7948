use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("channel {channel_id} not found")]
    ChannelNotFound { channel_id: String },

    #[error("channel {channel_id} is not a guild text channel (type {kind})")]
    NotATextChannel { channel_id: String, kind: u8 },

    #[error("webhook delivery failed with status {status}")]
    WebhookStatus { status: u16 },
}
