use crate::core::catalog::Catalog;
use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt;

pub const DEFAULT_THRESHOLD_DAYS: i64 = 5;

const CHUNKS: [(i64, &str, &str); 6] = [
    (60 * 60 * 24 * 365, "year", "years"),
    (60 * 60 * 24 * 30, "month", "months"),
    (60 * 60 * 24 * 7, "week", "weeks"),
    (60 * 60 * 24, "day", "days"),
    (60 * 60, "hour", "hours"),
    (60, "minute", "minutes"),
];

/// Result of [`time_since`]: either a phrase or, past the threshold, a plain date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativeTime {
    Phrase(String),
    Date(NaiveDate),
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::Phrase(phrase) => f.write_str(phrase),
            RelativeTime::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl PartialEq<&str> for RelativeTime {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, RelativeTime::Phrase(phrase) if phrase == other)
    }
}

const MINUTES: usize = CHUNKS.len() - 1;
const DAYS: usize = 3;

/// `(count, chunk index)` pairs for the two most significant units.
fn delta_parts(since: i64) -> Vec<(i64, usize)> {
    for (i, (seconds, _, _)) in CHUNKS.iter().enumerate() {
        let count = since / seconds;
        if count <= 0 {
            continue;
        }
        let mut parts = vec![(count, i)];
        if let Some((seconds2, _, _)) = CHUNKS.get(i + 1) {
            let count2 = (since - seconds * count) / seconds2;
            if count2 != 0 {
                parts.push((count2, i + 1));
            }
        }
        return parts;
    }
    vec![(0, MINUTES)]
}

fn render_parts(parts: &[(i64, usize)], catalog: &Catalog) -> String {
    parts
        .iter()
        .map(|&(count, i)| {
            let (_, singular, plural) = CHUNKS[i];
            format!("{} {}", count, catalog.ngettext(singular, plural, count))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Elapsed time between `value` and `now` in its two most significant units,
/// e.g. `"3 days 2 hours"`. Non-positive spans read `"0 minutes"`.
pub fn time_delta<Tz: TimeZone, Nz: TimeZone>(
    value: &DateTime<Tz>,
    now: &DateTime<Nz>,
    catalog: &Catalog,
) -> String {
    let since = now.clone().signed_duration_since(value.clone()).num_seconds();
    render_parts(&delta_parts(since), catalog)
}

/// Short relative phrase for a timestamp, as shown next to events.
///
/// `None` renders "never"; timestamps older than `threshold_days` fall back to
/// their date.
pub fn time_since<Tz: TimeZone, Nz: TimeZone>(
    value: Option<&DateTime<Tz>>,
    now: &DateTime<Nz>,
    threshold_days: i64,
    catalog: &Catalog,
) -> RelativeTime {
    let Some(value) = value else {
        return RelativeTime::Phrase(catalog.gettext("never"));
    };

    let age = now.clone().signed_duration_since(value.clone());
    // an out-of-range threshold never triggers the date fallback
    let past_threshold =
        chrono::Duration::try_days(threshold_days).is_some_and(|limit| age > limit);
    if past_threshold {
        return RelativeTime::Date(value.date_naive());
    }

    let parts = delta_parts(age.num_seconds());
    match parts.as_slice() {
        [(0, MINUTES)] => RelativeTime::Phrase(catalog.gettext("just now")),
        [(1, DAYS)] => RelativeTime::Phrase(catalog.gettext("yesterday")),
        _ => RelativeTime::Phrase(format!(
            "{}{}",
            render_parts(&parts, catalog),
            catalog.gettext(" ago")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn since(value: DateTime<Utc>) -> RelativeTime {
        time_since(Some(&value), &now(), DEFAULT_THRESHOLD_DAYS, &Catalog::new())
    }

    #[test]
    fn test_never() {
        let result = time_since::<Utc, Utc>(None, &now(), DEFAULT_THRESHOLD_DAYS, &Catalog::new());
        assert_eq!(result, "never");
    }

    #[test]
    fn test_just_now() {
        assert_eq!(since(now() - Duration::seconds(30)), "just now");
        assert_eq!(since(now() + Duration::minutes(5)), "just now");
    }

    #[test]
    fn test_yesterday() {
        assert_eq!(since(now() - Duration::days(1)), "yesterday");
    }

    #[test]
    fn test_two_units() {
        assert_eq!(
            since(now() - Duration::days(3) - Duration::hours(2)),
            "3 days 2 hours ago"
        );
        assert_eq!(
            since(now() - Duration::days(1) - Duration::hours(4)),
            "1 day 4 hours ago"
        );
        assert_eq!(since(now() - Duration::minutes(1)), "1 minute ago");
        assert_eq!(
            since(now() - Duration::hours(2) - Duration::minutes(5)),
            "2 hours 5 minutes ago"
        );
    }

    #[test]
    fn test_non_adjacent_unit_is_dropped() {
        assert_eq!(
            since(now() - Duration::days(2) - Duration::minutes(10)),
            "2 days ago"
        );
    }

    #[test]
    fn test_date_fallback() {
        let value = now() - Duration::days(6);
        assert_eq!(since(value), RelativeTime::Date(value.date_naive()));
        assert_eq!(since(value).to_string(), "2024-03-09");
    }

    #[test]
    fn test_custom_threshold() {
        let value = now() - Duration::days(2);
        let result = time_since(Some(&value), &now(), 1, &Catalog::new());
        assert_eq!(result, RelativeTime::Date(value.date_naive()));
    }

    #[test]
    fn test_huge_threshold_keeps_phrase() {
        let catalog = Catalog::new();
        assert_eq!(time_since(Some(&now()), &now(), i64::MAX, &catalog), "just now");

        let value = now() - Duration::days(400);
        let result = time_since(Some(&value), &now(), i64::MAX, &catalog);
        assert_eq!(result, "1 year 1 month ago");
    }

    #[test]
    fn test_translated_phrases() {
        let catalog = Catalog::new()
            .with("never", "jamais")
            .with("hours", "heures")
            .with(" ago", " plus tôt");
        let result = time_since::<Utc, Utc>(None, &now(), DEFAULT_THRESHOLD_DAYS, &catalog);
        assert_eq!(result, "jamais");

        let value = now() - Duration::hours(3);
        let result = time_since(Some(&value), &now(), DEFAULT_THRESHOLD_DAYS, &catalog);
        assert_eq!(result, "3 heures plus tôt");
    }
}
