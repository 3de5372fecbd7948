//! The single-run recap pipeline.

use chrono::{DateTime, TimeZone, Utc};
use recap_core::{
    build_summary, extract_contributor, tally_names, week_label, week_start, AppConfig,
    EmbedContent, WeeklyReport,
};
use recap_discord::{DiscordClient, Embed, WebhookClient};

/// Runs one recap for the week containing `now`: compute the window, walk the
/// channel history, tally contributors, write the per-week report file, then
/// deliver the summary.
///
/// Delivery is attempted after the file is written and a delivery failure is
/// logged, not propagated — the report on disk is the durable artifact.
/// With `dry_run` set, delivery is skipped entirely.
///
/// # Errors
///
/// Returns an error if history retrieval or the report write fails; in that
/// case no partial report is left for the week (retrieval failures happen
/// before the write, and a failed write is surfaced as-is).
pub(crate) async fn run_recap<Tz: TimeZone>(
    discord: &DiscordClient,
    webhook: &WebhookClient,
    config: &AppConfig,
    now: &DateTime<Tz>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let start = week_start(now);
    tracing::info!(week_start = %start.naive_local(), "fetching messages for the current week");

    let since = start.with_timezone(&Utc);
    let messages = discord
        .fetch_history_since(&config.channel_id, since)
        .await?;
    tracing::info!(count = messages.len(), "fetched messages");

    let names = messages
        .iter()
        .filter_map(|m| m.embeds.first())
        .filter_map(|e| extract_contributor(&embed_content(e)));
    let counts = tally_names(names);

    let report = WeeklyReport::new(week_label(&start), counts);
    let path = recap_core::write_report(&config.report_dir, &report)?;
    tracing::info!(
        path = %path.display(),
        total = report.total_messages,
        contributors = report.counts.len(),
        "report written"
    );

    let payload = build_summary(
        &report,
        &start,
        now,
        &config.profile_link_base,
        &config.recap_link_base,
    );

    if dry_run {
        tracing::info!("dry-run: skipping webhook delivery");
        return Ok(());
    }

    if let Err(e) = webhook.execute(&payload).await {
        tracing::error!(error = %e, "webhook delivery failed; report file is retained");
    } else {
        tracing::info!("summary delivered");
    }

    Ok(())
}

/// Lifts the first embed's fields out of the wire type for extraction. Only
/// the first embed of a message is ever considered.
fn embed_content(embed: &Embed) -> EmbedContent {
    EmbedContent {
        author_name: embed.author.as_ref().and_then(|a| a.name.clone()),
        title: embed.title.clone(),
        description: embed.description.clone(),
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
