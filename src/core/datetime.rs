use crate::utils::error::{HelperError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";
pub const DEFAULT_DATETIME_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// Naive timestamps are stored in UTC.
pub fn ensure_aware(dt: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&dt)
}

pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: Display,
{
    dt.format(format).to_string()
}

/// Formats `dt` in the viewer's timezone.
pub fn localized_datetime<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    offset: &FixedOffset,
    format: &str,
) -> String {
    dt.with_timezone(offset).format(format).to_string()
}

/// Parses an RFC 3339 timestamp; a missing offset is rejected.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|e| HelperError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_ensure_aware_uses_utc() {
        let aware = ensure_aware(naive());
        assert_eq!(aware.naive_utc(), naive());
        assert_eq!(format_date(&aware, DEFAULT_DATE_FORMAT), "Mar 15, 2024");
    }

    #[test]
    fn test_localized_datetime_shifts_date() {
        let aware = ensure_aware(naive());
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            localized_datetime(&aware, &offset, DEFAULT_DATETIME_FORMAT),
            "Mar 16, 2024, 1:30 AM"
        );
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("2024-03-15T12:00:00+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 7200);
        assert!(parse_timestamp("2024-03-15 12:00:00").is_err());
    }
}
