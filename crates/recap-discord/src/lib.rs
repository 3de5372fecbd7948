//! Thin HTTP collaborators for the recap pipeline: Discord channel
//! resolution, paginated message-history retrieval, and webhook delivery.

pub mod client;
pub mod error;
pub mod types;
pub mod webhook;

pub use client::{DiscordClient, PAGE_LIMIT};
pub use error::DiscordError;
pub use types::{Channel, Embed, EmbedAuthor, Message, GUILD_TEXT};
pub use webhook::WebhookClient;
