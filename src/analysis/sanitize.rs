use chrono::{DateTime, NaiveDate};

use crate::config::DATE_FORMAT;
use crate::data::document::RawObservation;
use crate::models::Observation;

/// Parses a raw date string into a calendar date.
///
/// Accepts the plain document format first, then an RFC 3339 datetime (the
/// date part is kept). Returns None for anything else.
pub fn parse_observation_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Filters out entries whose date does not parse and sorts the remainder
/// ascending by date.
///
/// Each rejected entry produces one warning string carrying the offending
/// literal; a bad entry never aborts the rest of the series. The sort is
/// stable, so equal dates keep their original relative order.
pub fn sanitize(raw: &[RawObservation]) -> (Vec<Observation>, Vec<String>) {
    let mut clean = Vec::with_capacity(raw.len());
    let mut warnings = Vec::new();

    for entry in raw {
        match parse_observation_date(&entry.date) {
            Some(date) => clean.push(Observation {
                date,
                price: entry.price,
            }),
            None => {
                log::warn!("Dropping observation with unparseable date: {}", entry.date);
                warnings.push(format!("Invalid date found: {}", entry.date));
            }
        }
    }

    clean.sort_by_key(|obs| obs.date);
    (clean, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, price: f64) -> RawObservation {
        RawObservation {
            date: date.to_string(),
            price,
        }
    }

    #[test]
    fn test_sanitize_sorts_ascending_by_date() {
        let input = vec![
            raw("2024-01-03", 30.0),
            raw("2024-01-01", 10.0),
            raw("2024-01-02", 20.0),
        ];

        let (clean, warnings) = sanitize(&input);

        assert!(warnings.is_empty());
        let dates: Vec<_> = clean.iter().map(|obs| obs.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "Output must be sorted non-decreasing");
        assert_eq!(clean[0].price, 10.0);
        assert_eq!(clean[2].price, 30.0);
    }

    #[test]
    fn test_sanitize_drops_unparseable_date_with_warning() {
        let input = vec![
            raw("2024-01-01", 10.0),
            raw("not-a-date", 99.0),
            raw("2024-01-02", 20.0),
        ];

        let (clean, warnings) = sanitize(&input);

        assert_eq!(clean.len(), 2, "The bad entry must be excluded");
        assert_eq!(warnings.len(), 1);
        assert!(
            warnings[0].contains("not-a-date"),
            "Warning must carry the offending literal: {}",
            warnings[0]
        );
    }

    #[test]
    fn test_sanitize_one_invalid_among_two_valid() {
        // End-to-end shape from the dashboard: two good entries survive,
        // exactly one warning names the bad value.
        let input = vec![
            raw("2024-01-01", 10.0),
            raw("invalid", 0.0),
            raw("2024-01-03", 30.0),
        ];

        let (clean, warnings) = sanitize(&input);

        assert_eq!(clean.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("invalid"));
    }

    #[test]
    fn test_sanitize_equal_dates_keep_original_order() {
        let input = vec![
            raw("2024-01-02", 1.0),
            raw("2024-01-01", 2.0),
            raw("2024-01-01", 3.0),
        ];

        let (clean, _) = sanitize(&input);

        // Stable sort: the two 01-01 entries stay in input order.
        assert_eq!(clean[0].price, 2.0);
        assert_eq!(clean[1].price, 3.0);
        assert_eq!(clean[2].price, 1.0);
    }

    #[test]
    fn test_sanitize_empty_input() {
        let (clean, warnings) = sanitize(&[]);
        assert!(clean.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_observation_date_accepts_rfc3339() {
        let date = parse_observation_date("2024-01-05T12:30:00+00:00");
        assert_eq!(date, Some("2024-01-05".parse().unwrap()));
    }
}
