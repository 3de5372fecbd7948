//! Wire types for the Discord REST objects the recap reads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Channel type discriminant for a guild text channel.
pub const GUILD_TEXT: u8 = 0;

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub name: Option<String>,
}

/// One message from the channel history, reduced to the fields the pipeline
/// uses. A read-only snapshot; never mutated after retrieval.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub author: Option<EmbedAuthor>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default)]
    pub name: Option<String>,
}
