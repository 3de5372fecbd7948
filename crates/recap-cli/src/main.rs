//! Weekly contributor recap CLI.
//!
//! One invocation performs one run: resolve the feed channel, scan the
//! current week's history, tally contributors, persist the per-week report,
//! and deliver the top-5 summary. Scheduled externally (cron or similar);
//! re-running for the same week overwrites the report, so a failed run can
//! simply be triggered again.

use std::path::PathBuf;

use clap::Parser;

mod run;

#[derive(Debug, Parser)]
#[command(name = "recap-cli")]
#[command(about = "Weekly wiki-contributor recap")]
struct Cli {
    /// Override the channel scanned for contributor activity.
    #[arg(long)]
    channel_id: Option<String>,

    /// Override the directory the per-week JSON report is written to.
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Compute and persist the report but skip webhook delivery.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match recap_core::load_app_config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(channel_id) = cli.channel_id {
        config.channel_id = channel_id;
    }
    if let Some(report_dir) = cli.report_dir {
        config.report_dir = report_dir;
    }

    init_tracing(&config.log_level);

    let discord = recap_discord::DiscordClient::new(
        &config.bot_token,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let webhook = recap_discord::WebhookClient::new(
        &config.webhook_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    // Resolution failures are the only fatal exit: nothing has been fetched
    // or written yet. Everything after this point is logged and the process
    // still exits cleanly.
    let channel = match discord.resolve_text_channel(&config.channel_id).await {
        Ok(channel) => channel,
        Err(e) => {
            tracing::error!(channel_id = %config.channel_id, error = %e, "cannot resolve target channel");
            std::process::exit(1);
        }
    };
    tracing::info!(channel_id = %channel.id, "recap starting");

    let now = chrono::Local::now();
    if let Err(e) = run::run_recap(&discord, &webhook, &config, &now, cli.dry_run).await {
        tracing::error!(error = %e, "recap run failed");
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
