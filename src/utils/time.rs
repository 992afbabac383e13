//! Reference-timezone helpers: every record key is derived at a fixed UTC+8
//! offset so the archive stays stable when the device roams across timezones.

use chrono::{DateTime, FixedOffset, Utc};

/// Fixed reference offset, in hours east of UTC.
pub const REF_UTC_OFFSET_HOURS: i32 = 8;

pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REF_UTC_OFFSET_HOURS * 3600).unwrap()
}

/// Convert an epoch-millisecond timestamp into the reference timezone.
/// Timestamps outside chrono's range fall back to the epoch.
pub fn to_reference(ms: i64) -> DateTime<FixedOffset> {
    DateTime::from_timestamp_millis(ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&reference_offset())
}

/// Calendar-day key (`YYYY-MM-DD`) of a timestamp in the reference timezone.
pub fn day_key(ms: i64) -> String {
    to_reference(ms).format("%Y-%m-%d").to_string()
}

/// Month key (`YYYY-MM`) of a timestamp in the reference timezone.
pub fn month_key(ms: i64) -> String {
    to_reference(ms).format("%Y-%m").to_string()
}

/// Clock-face rendering (`HH:MM`) of a timestamp in the reference timezone.
pub fn clock_key(ms: i64) -> String {
    to_reference(ms).format("%H:%M").to_string()
}

/// Full rendering (`YYYY-MM-DD HH:MM`) in the reference timezone.
pub fn minute_key(ms: i64) -> String {
    to_reference(ms).format("%Y-%m-%d %H:%M").to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse a raw epoch-millisecond string (the hidden `--at` test override).
pub fn parse_millis(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}
