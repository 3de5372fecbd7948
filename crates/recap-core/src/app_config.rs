use std::path::PathBuf;

/// Runtime configuration for one recap run.
#[derive(Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub webhook_url: String,
    pub channel_id: String,
    pub report_dir: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub profile_link_base: String,
    pub recap_link_base: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The webhook URL embeds its own secret, so it is redacted along with
        // the bot token.
        f.debug_struct("AppConfig")
            .field("bot_token", &"[redacted]")
            .field("webhook_url", &"[redacted]")
            .field("channel_id", &self.channel_id)
            .field("report_dir", &self.report_dir)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("profile_link_base", &self.profile_link_base)
            .field("recap_link_base", &self.recap_link_base)
            .finish()
    }
}
