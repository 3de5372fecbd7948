//! Report-period computation.
//!
//! The recap covers the current week, defined as Monday at local midnight up
//! to "now". The lower bound is derived purely from the reference instant, so
//! a run is reproducible for a given clock reading.

use chrono::{DateTime, Datelike, Days, Duration, MappedLocalTime, NaiveTime, TimeZone};

/// Returns the Monday-at-midnight instant of the week containing `now`, in
/// `now`'s time zone.
///
/// Monday is treated as day 0 and Sunday as day 6, so a Sunday reference maps
/// six days back and a Monday maps to its own date. If midnight falls inside a
/// DST gap, the earliest valid instant of that date is used instead.
pub fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let days_back = u64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Days::new(days_back);

    let mut candidate = monday.and_time(NaiveTime::MIN);
    loop {
        match now.timezone().from_local_datetime(&candidate) {
            MappedLocalTime::Single(dt) | MappedLocalTime::Ambiguous(dt, _) => return dt,
            MappedLocalTime::None => candidate += Duration::hours(1),
        }
    }
}

/// Formats the window's Monday as the `YYYY-MM-DD` label that keys the
/// persisted report file.
pub fn week_label<Tz: TimeZone>(start: &DateTime<Tz>) -> String {
    start.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[path = "window_test.rs"]
mod tests;
