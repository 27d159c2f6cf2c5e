//! Positional parsing of comma-delimited trip record lines.
//!
//! A record line carries at least six comma-separated fields. Field 1 is the
//! pickup zone and field 3 the pickup timestamp; every other field is
//! ignored. Fields are unquoted, so a plain delimiter scan is sufficient.
//! Any structural or format failure rejects the line with `None` — ingestion
//! is best-effort and one bad line never aborts a file.

use trip_core::models::{TimestampLayout, TripRecord};

/// Parse one raw line into a [`TripRecord`], or `None` when the line fails
/// any validation check.
///
/// Checks, in order: at least 5 delimiters; a non-empty trimmed zone between
/// the 1st and 2nd delimiter; a non-empty trimmed timestamp between the 3rd
/// and 4th delimiter (or to end-of-line when there is no 4th); an hour in
/// `[0, 23]` extracted per `layout`.
pub fn parse_line(line: &str, layout: TimestampLayout) -> Option<TripRecord> {
    if line.bytes().filter(|&b| b == b',').count() < 5 {
        return None;
    }

    let comma1 = line.find(',')?;
    let comma2 = find_delimiter(line, comma1 + 1)?;
    let comma3 = find_delimiter(line, comma2 + 1)?;
    let comma4 = find_delimiter(line, comma3 + 1);

    let zone = trim_field(&line[comma1 + 1..comma2]);
    if zone.is_empty() {
        return None;
    }

    let timestamp = match comma4 {
        Some(c4) => &line[comma3 + 1..c4],
        None => &line[comma3 + 1..],
    };
    let timestamp = trim_field(timestamp);
    if timestamp.is_empty() {
        return None;
    }

    let hour = match layout {
        TimestampLayout::DateTime => hour_from_datetime(timestamp)?,
        TimestampLayout::TimeOfDay => hour_from_time_of_day(timestamp)?,
    };

    Some(TripRecord {
        zone: zone.to_string(),
        hour,
    })
}

/// Position of the next `,` at or after `start`.
fn find_delimiter(line: &str, start: usize) -> Option<usize> {
    line[start..].find(',').map(|i| start + i)
}

/// Trim the whitespace the record format allows around fields.
fn trim_field(field: &str) -> &str {
    field.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Extract the hour from a combined `YYYY-MM-DD HH:MM:SS`-like timestamp.
///
/// Only the structure around the hour is checked (separator offsets and hour
/// digits), not calendar validity.
fn hour_from_datetime(timestamp: &str) -> Option<u8> {
    let bytes = timestamp.as_bytes();
    if bytes.len() < 16 || bytes[10] != b' ' {
        return None;
    }
    hour_from_digits(bytes[11], bytes[12], bytes[13])
}

/// Extract the hour from the legacy dialect: a date token, a space, then a
/// standalone `HH:MM` time token.
fn hour_from_time_of_day(timestamp: &str) -> Option<u8> {
    let space = timestamp.find(' ')?;
    if space + 3 > timestamp.len() {
        return None;
    }

    let time = trim_field(&timestamp[space + 1..]);
    let bytes = time.as_bytes();
    if bytes.len() < 3 {
        return None;
    }
    hour_from_digits(bytes[0], bytes[1], bytes[2])
}

/// Combine two ASCII hour digits followed by a `:` separator into an hour,
/// rejecting anything outside `[0, 23]`.
fn hour_from_digits(tens: u8, ones: u8, separator: u8) -> Option<u8> {
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() || separator != b':' {
        return None;
    }
    let hour = (tens - b'0') * 10 + (ones - b'0');
    (hour <= 23).then_some(hour)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
