//! Validity window parsing and expiry computation.

use chrono::{DateTime, Duration, Utc};

/// Validity applied when the submitted value is missing or unusable.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Resolves the raw validity text typed by a user into a positive number of minutes.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the leading run
/// of decimal digits is used. Anything after the digits is ignored, so `"15min"`
/// yields 15. Missing, blank, non-numeric and non-positive values fall back to
/// [`DEFAULT_VALIDITY_MINUTES`].
pub fn resolve_validity_minutes(raw: Option<&str>) -> i64 {
    raw.and_then(parse_leading_integer)
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_VALIDITY_MINUTES)
}

/// Returns `now + minutes`, saturating at the largest representable instant.
pub fn expiry_after(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    Duration::try_minutes(minutes)
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Values beyond i64 still mean "very long"; the expiry saturates later.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);

    Some(if negative { -magnitude } else { magnitude })
}
