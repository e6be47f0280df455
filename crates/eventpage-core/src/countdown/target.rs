//! Target instant parsing.
//!
//! Date strings follow what a browser's `Date` parser accepts for ISO-8601:
//! an explicit offset (or `Z`) gives an absolute instant, a date-time without
//! an offset is read in the host's local time, and a bare date is UTC midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{PageError, PageResult};

/// Naive date-time layouts tried after RFC 3339.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Where a target instant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// Parsed from the configured date string
    Configured,
    /// Configured value was unusable; the compiled-in default is used
    Fallback,
}

/// The absolute point in time the countdown counts down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMoment {
    instant: DateTime<Utc>,
    source: TargetSource,
}

impl TargetMoment {
    /// Wrap an already-known instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            source: TargetSource::Configured,
        }
    }

    /// Parse a date string, reading offset-less values in host-local time.
    pub fn parse(input: &str) -> PageResult<Self> {
        Self::parse_in(input, &Local)
    }

    /// Parse a date string, reading offset-less values in `tz`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::Config` when the string is empty, matches none of
    /// the accepted layouts, or names a local time that does not exist in `tz`.
    pub fn parse_in<Tz: TimeZone>(input: &str, tz: &Tz) -> PageResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PageError::Config("empty date string".to_string()));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::at(dt.with_timezone(&Utc)));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return resolve_local(&naive, tz).map(Self::at).ok_or_else(|| {
                    PageError::Config(format!("local time {} does not exist", naive))
                });
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self::at(date.and_time(chrono::NaiveTime::MIN).and_utc()));
        }

        Err(PageError::Config(format!("unrecognized date: {:?}", input)))
    }

    /// Resolve the configured date string, falling back on failure.
    pub fn from_config(input: &str) -> Self {
        Self::from_config_in(input, &Local)
    }

    /// Resolve the configured date string in `tz`, falling back on failure.
    ///
    /// Never fails: an unusable value is logged and replaced by
    /// [`TargetMoment::fallback_in`].
    pub fn from_config_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Self {
        match Self::parse_in(input, tz) {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!("Invalid event date, using fallback: {}", e);
                Self::fallback_in(tz)
            }
        }
    }

    /// The compiled-in default: 2026-01-11 09:00:00 local time.
    pub fn fallback() -> Self {
        Self::fallback_in(&Local)
    }

    /// The compiled-in default, read in `tz`.
    pub fn fallback_in<Tz: TimeZone>(tz: &Tz) -> Self {
        let naive = NaiveDate::from_ymd_opt(2026, 1, 11)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap_or_default();
        let instant = resolve_local(&naive, tz).unwrap_or_else(|| naive.and_utc());
        Self {
            instant,
            source: TargetSource::Fallback,
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    pub fn source(&self) -> TargetSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == TargetSource::Fallback
    }

    /// Milliseconds from `now` until the target (negative once passed).
    pub fn millis_until(&self, now: DateTime<Utc>) -> i64 {
        (self.instant - now).num_milliseconds()
    }
}

fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
