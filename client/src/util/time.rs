//! Timestamp parsing and human-readable durations.
//!
//! The backend emits naive ISO-8601 timestamps (UTC, no offset, microsecond
//! precision). Everything here works on Unix milliseconds so pages can pass a
//! single `now_ms()` reading through their derived values and tests can pin
//! the clock.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub const MS_PER_MINUTE: i64 = 60 * 1000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Current wall-clock time in Unix milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Parse an RFC 3339 or offset-less ISO-8601 timestamp (assumed UTC).
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Parse a timestamp into Unix milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn timestamp_ms(raw: &str) -> Option<i64> {
    parse_timestamp(raw).map(|dt| (dt.unix_timestamp_nanos() / 1_000_000) as i64)
}

/// Whole minutes elapsed since `created`. Missing, unparseable or future
/// timestamps count as zero.
pub fn minutes_since(created: Option<&str>, now_ms: i64) -> i64 {
    created
        .and_then(timestamp_ms)
        .map_or(0, |then| (now_ms - then).max(0) / MS_PER_MINUTE)
}

/// Whole hours elapsed since `created`, with the same fallbacks as `minutes_since`.
pub fn hours_since(created: Option<&str>, now_ms: i64) -> i64 {
    minutes_since(created, now_ms) / 60
}

/// Compact unresolved duration: `"3d 4h"` from a day up, `"7h"` below.
pub fn format_unresolved(hours: i64) -> String {
    if hours >= 24 {
        format!("{}d {}h", hours / 24, hours % 24)
    } else {
        format!("{hours}h")
    }
}

/// Long-form date such as `"02 Jan 2025, 10:11"`. Unparseable input is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    let format = format_description!("[day] [month repr:short] [year], [hour]:[minute]");
    parse_timestamp(raw)
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// [`format_date`] for a Unix-millisecond instant.
pub fn format_date_ms(ms: i64) -> String {
    let format = format_description!("[day] [month repr:short] [year], [hour]:[minute]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_default()
}

/// `HH:MM:SS` (UTC) for a Unix-millisecond instant.
pub fn format_clock(ms: i64) -> String {
    let format = format_description!("[hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_default()
}

/// Uptime as `"14d 7h 23m"`.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    format!("{days}d {hours}h {minutes}m")
}
