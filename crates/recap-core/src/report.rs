//! Per-week report model and file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tally::TallyEntry;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted per-week artifact.
///
/// The JSON shape is a durable contract read by downstream tooling: top-level
/// `week`, `totalMessages`, and `counts` — an object whose key order is the
/// descending-count ranking. Each run builds one report and fully replaces
/// any prior file for the same week label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    pub week: String,
    #[serde(rename = "totalMessages")]
    pub total_messages: u64,
    #[serde(with = "ranked_counts")]
    pub counts: Vec<TallyEntry>,
}

impl WeeklyReport {
    /// Builds the report for a week label from a ranked tally.
    /// `total_messages` is the number of messages that yielded a name, i.e.
    /// the sum of all counts.
    #[must_use]
    pub fn new(week: String, counts: Vec<TallyEntry>) -> Self {
        let total_messages = counts.iter().map(|e| e.count).sum();
        Self {
            week,
            total_messages,
            counts,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.week)
    }
}

/// Writes the report to `<dir>/<week>.json`, creating `dir` if absent and
/// replacing any previous file for the same week.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory cannot be created or the file
/// cannot be written, and [`ReportError::Serialize`] if encoding fails.
pub fn write_report(dir: &Path, report: &WeeklyReport) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(report.file_name());
    let body = serde_json::to_string_pretty(report)?;
    fs::write(&path, body).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Serde adapter keeping `counts` an ordered JSON object: keys are written in
/// rank order and read back in document order.
mod ranked_counts {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::TallyEntry;

    pub fn serialize<S>(counts: &[TallyEntry], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(counts.len()))?;
        for entry in counts {
            map.serialize_entry(&entry.name, &entry.count)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<TallyEntry>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = Vec<TallyEntry>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of contributor name to count")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, count)) = access.next_entry::<String, u64>()? {
                    counts.push(TallyEntry { name, count });
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
