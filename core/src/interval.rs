//! Refresh interval parsing
//!
//! Intervals are written in decimal seconds (`5`, `0.1`, `3.25`). The first
//! fractional digit counts tenths of a second, each following digit a tenth of
//! the previous one. Digits past nanosecond precision are dropped.

use std::time::Duration;

use crate::error::IntervalError;

const NANOS_PER_DECISEC: u32 = 100_000_000;

/// Parse a decimal-seconds string into an exact duration.
pub fn parse_interval(text: &str) -> Result<Duration, IntervalError> {
    if text.is_empty() {
        return Err(IntervalError::Empty);
    }

    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut secs: u64 = 0;

    while let Some(&b) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        secs = secs
            .checked_mul(10)
            .and_then(|s| s.checked_add(u64::from(b - b'0')))
            .ok_or(IntervalError::OutOfRange)?;
        pos += 1;
    }

    match bytes.get(pos) {
        None => return Ok(Duration::from_secs(secs)),
        Some(b'.') if pos == 0 => return Err(IntervalError::MissingInteger),
        Some(b'.') => pos += 1,
        Some(_) => return Err(unexpected(text, pos)),
    }

    let fraction_start = pos;
    let mut nanos: u32 = 0;
    let mut weight = NANOS_PER_DECISEC;

    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            return Err(unexpected(text, pos));
        }
        // weight hits zero after the ninth digit, so the rest add nothing
        nanos += u32::from(b - b'0') * weight;
        weight /= 10;
        pos += 1;
    }

    if pos == fraction_start {
        return Err(IntervalError::MissingFraction);
    }

    Ok(Duration::new(secs, nanos))
}

/// Render a duration in the same grammar `parse_interval` accepts.
///
/// Trailing zeros of the fraction are trimmed, so `100ms` becomes `0.1`.
pub fn format_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    let nanos = interval.subsec_nanos();
    if nanos == 0 {
        return secs.to_string();
    }

    let fraction = format!("{nanos:09}");
    format!("{secs}.{}", fraction.trim_end_matches('0'))
}

fn unexpected(text: &str, position: usize) -> IntervalError {
    // everything before `position` is ASCII, so it sits on a char boundary
    let found = text[position..].chars().next().unwrap_or('\0');
    IntervalError::UnexpectedCharacter { found, position }
}
