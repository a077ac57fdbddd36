//! Timestamp parsing against an ordered list of candidate layouts.
//!
//! Invariants:
//! - Layouts are tried in order; the first that parses wins.
//! - Layouts without an offset are interpreted as UTC.
//! - Layouts without a date use year 0, January 1; stamp layouts without a
//!   year use year 0.

use chrono::format::{Parsed, StrftimeItems, parse as parse_items};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};

/// Accepted timestamp layouts, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// `2006-01-02T15:04:05Z07:00`, with optional fractional seconds.
    Rfc3339,
    /// `2006-01-02 15:04:05`
    DateTime,
    /// `2006-01-02`
    DateOnly,
    /// `15:04:05`
    TimeOnly,
    /// `3:04PM`
    Kitchen,
    /// `Jan _2 15:04:05`, with optional `.000`, `.000000`, `.000000000`.
    Stamp,
}

const LAYOUTS: [Layout; 6] = [
    Layout::Rfc3339,
    Layout::DateTime,
    Layout::DateOnly,
    Layout::TimeOnly,
    Layout::Kitchen,
    Layout::Stamp,
];

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

fn year_zero() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(0, 1, 1)
}

fn from_naive(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    naive.and_utc().with_timezone(&utc_offset())
}

impl Layout {
    fn parse(self, value: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            Layout::Rfc3339 => {
                // chrono also takes a space or lowercase `t`/`z`; the layout does not.
                if value.as_bytes().get(10) != Some(&b'T') || value.ends_with('z') {
                    return None;
                }
                DateTime::parse_from_rfc3339(value).ok()
            }
            Layout::DateTime => NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(from_naive),
            Layout::DateOnly => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| from_naive(date.and_time(NaiveTime::MIN))),
            Layout::TimeOnly => {
                let time = NaiveTime::parse_from_str(value, "%H:%M:%S").ok()?;
                Some(from_naive(year_zero()?.and_time(time)))
            }
            Layout::Kitchen => {
                let time = NaiveTime::parse_from_str(value, "%I:%M%p").ok()?;
                Some(from_naive(year_zero()?.and_time(time)))
            }
            Layout::Stamp => {
                // `Jan _2` pads the day with a space; collapse runs of spaces first.
                let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
                let mut parsed = Parsed::new();
                parse_items(&mut parsed, &collapsed, StrftimeItems::new("%b %d %H:%M:%S%.f"))
                    .ok()?;
                parsed.set_year(0).ok()?;
                let date = parsed.to_naive_date().ok()?;
                let time = parsed.to_naive_time().ok()?;
                Some(from_naive(date.and_time(time)))
            }
        }
    }
}

/// Parses `value` with the first matching layout, or returns `None`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    LAYOUTS.iter().find_map(|layout| layout.parse(value))
}
