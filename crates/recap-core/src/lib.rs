//! Domain logic for the weekly contributor recap: report-window computation,
//! contributor-name extraction, tallying, report persistence, and summary
//! formatting. No network I/O lives here.

pub mod app_config;
pub mod config;
pub mod extract;
pub mod report;
pub mod summary;
pub mod tally;
pub mod window;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use extract::{extract_contributor, EmbedContent};
pub use report::{write_report, ReportError, WeeklyReport};
pub use summary::{build_summary, EmbedFooter, SummaryEmbed, WebhookPayload, TOP_N};
pub use tally::{tally_names, TallyEntry};
pub use window::{week_label, week_start};
