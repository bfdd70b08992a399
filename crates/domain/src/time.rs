//! Time and timestamp helpers.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

/// Wall-clock instant carrying the offset it was observed in.
///
/// The dashboard always works in the viewer's local offset; naive server
/// timestamps are interpreted in the offset of the "now" they are compared to.
pub type Timestamp = DateTime<FixedOffset>;

/// Naive formats the sensor API is known to emit.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}

/// Parse a server timestamp.
///
/// RFC 3339 values keep their own offset; naive values are placed in
/// `local`. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str, local: FixedOffset) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| local.from_local_datetime(&naive).single())
}

/// Render a timestamp the way an en-US browser locale prints a date-time,
/// e.g. `3/14/2025, 9:05:00 AM`, in the offset of `local`.
#[must_use]
pub fn format_local(ts: Timestamp, local: FixedOffset) -> String {
    ts.with_timezone(&local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_plus_6() -> FixedOffset {
        FixedOffset::east_opt(6 * 3600).unwrap()
    }

    #[test]
    fn should_parse_naive_timestamp_in_local_offset() {
        let ts = parse_timestamp("2025-03-14 09:05:00", utc_plus_6()).unwrap();
        assert_eq!(ts.offset(), &utc_plus_6());
        assert_eq!(ts.to_rfc3339(), "2025-03-14T09:05:00+06:00");
    }

    #[test]
    fn should_keep_offset_of_rfc3339_timestamp() {
        let ts = parse_timestamp("2025-03-14T03:05:00Z", utc_plus_6()).unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 0);
    }

    #[test]
    fn should_accept_t_separated_naive_timestamp() {
        assert!(parse_timestamp("2025-03-14T09:05:00", utc_plus_6()).is_some());
    }

    #[test]
    fn should_return_none_when_timestamp_is_garbage() {
        assert!(parse_timestamp("yesterday-ish", utc_plus_6()).is_none());
        assert!(parse_timestamp("", utc_plus_6()).is_none());
    }

    #[test]
    fn should_format_like_en_us_locale() {
        let ts = parse_timestamp("2025-03-14T03:05:00Z", utc_plus_6()).unwrap();
        assert_eq!(format_local(ts, utc_plus_6()), "3/14/2025, 9:05:00 AM");
    }
}
