//! Top-N summary embed for webhook delivery.

use chrono::{DateTime, Duration, TimeZone};
use serde::Serialize;

use crate::report::WeeklyReport;

/// How many contributors the delivered summary lists.
pub const TOP_N: usize = 5;

/// Green accent used for the summary embed.
const SUMMARY_COLOR: u32 = 0x00ff00;

/// Body shape expected by the webhook endpoint:
/// `{ "embeds": [ { title, description, footer: { text }, color } ] }`.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<SummaryEmbed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryEmbed {
    pub title: String,
    pub description: String,
    pub footer: EmbedFooter,
    pub color: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Formats the top-5 summary for a finished report.
///
/// Each line links the contributor's profile (`profile_link_base` + name) and
/// pluralizes the edit count; a trailing link points at the published per-week
/// JSON (`recap_link_base` + `<week>.json`). The footer spans the window's
/// Monday through the day before `now`, both as `DD/MM/YYYY`.
pub fn build_summary<Tz: TimeZone>(
    report: &WeeklyReport,
    start: &DateTime<Tz>,
    now: &DateTime<Tz>,
    profile_link_base: &str,
    recap_link_base: &str,
) -> WebhookPayload {
    let lines: Vec<String> = report
        .counts
        .iter()
        .take(TOP_N)
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{rank}. [{name}]({profile_link_base}{name}) - {count} edit{suffix}",
                rank = i + 1,
                name = entry.name,
                count = entry.count,
                suffix = if entry.count == 1 { "" } else { "s" },
            )
        })
        .collect();

    let description = format!(
        "{}\n\n[📊 View full recap]({recap_link_base}{week}.json)",
        lines.join("\n"),
        week = report.week,
    );

    let period_end = now.clone() - Duration::days(1);
    let footer = EmbedFooter {
        text: format!(
            "Top {TOP_N} contributors from {} to {}",
            format_day(start),
            format_day(&period_end),
        ),
    };

    WebhookPayload {
        embeds: vec![SummaryEmbed {
            title: "This Week's Top Contributors".to_owned(),
            description,
            footer,
            color: SUMMARY_COLOR,
        }],
    }
}

fn format_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.date_naive().format("%d/%m/%Y").to_string()
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
