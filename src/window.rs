//! Date range partitioning.
//!
//! The search endpoint stops returning results past roughly 500 hits for a
//! single query, so a long date range is cut into windows no wider than a
//! caller-chosen interval and each window is queried on its own.

use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeDelta, TimeZone, Utc};

use crate::error::{Error, Result};

/// Number of weeks covered by a window when no interval is given
pub const DEFAULT_INTERVAL_WEEKS: i64 = 52;

/// YouTube was founded on this date, so no video can be older
pub fn platform_floor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2005, 2, 14, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Parse a `yyyy-mm-dd` date as midnight UTC
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidDate(raw.to_string()))
}

/// Format a timestamp the way the search endpoint expects it
pub fn rfc3339(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Widest span a single window may cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval(TimeDelta);

impl Interval {
    pub fn new(span: TimeDelta) -> Result<Self> {
        if span <= TimeDelta::zero() {
            return Err(Error::InvalidInterval);
        }
        Ok(Self(span))
    }

    /// A raw interval count is a number of days
    pub fn days(days: u32) -> Result<Self> {
        Self::new(TimeDelta::days(i64::from(days)))
    }

    pub fn span(&self) -> TimeDelta {
        self.0
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self(TimeDelta::weeks(DEFAULT_INTERVAL_WEEKS))
    }
}

/// Validated `earliest..=latest` range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    earliest: DateTime<Utc>,
    latest: DateTime<Utc>,
}

impl DateRange {
    pub fn new(earliest: DateTime<Utc>, latest: DateTime<Utc>) -> Result<Self> {
        if latest < earliest {
            return Err(Error::InvalidRange { earliest, latest });
        }
        Ok(Self { earliest, latest })
    }

    pub fn earliest(&self) -> DateTime<Utc> {
        self.earliest
    }

    pub fn latest(&self) -> DateTime<Utc> {
        self.latest
    }

    /// Split the range into windows, most recent first
    pub fn windows(&self, interval: Interval) -> Windows {
        Windows {
            earliest: self.earliest,
            upper: self.latest,
            interval: interval.span(),
            finished: false,
        }
    }
}

/// One `[published_after, published_before)` query window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub published_after: DateTime<Utc>,
    pub published_before: DateTime<Utc>,
    /// Set on the last window, whose lower bound is the range's earliest date
    pub is_final: bool,
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            rfc3339(&self.published_before),
            rfc3339(&self.published_after)
        )
    }
}

/// Iterator over the windows of a [`DateRange`]
#[derive(Debug, Clone)]
pub struct Windows {
    earliest: DateTime<Utc>,
    upper: DateTime<Utc>,
    interval: TimeDelta,
    finished: bool,
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.finished {
            return None;
        }

        let lower = match self.upper.checked_sub_signed(self.interval) {
            Some(lower) if lower > self.earliest => lower,
            // Clamp to the earliest date; this is the last round-trip
            _ => self.earliest,
        };
        let is_final = lower == self.earliest;

        let window = Window {
            published_after: lower,
            published_before: self.upper,
            is_final,
        };

        self.finished = is_final;
        self.upper = lower;
        Some(window)
    }
}

impl std::iter::FusedIterator for Windows {}
