use chrono::{DateTime, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an event timestamp.
///
/// Accepts RFC 3339 and ISO 8601 offsets written without a colon
/// (`+0200`); offset-less values are taken as UTC. Anything else yields
/// `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Signed difference `later - earlier` in seconds, microsecond precision.
pub fn seconds_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    let delta = later - earlier;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_parse_rfc3339_with_offset_normalizes_to_utc() {
        let dt = parse_timestamp("2022-08-05T20:30:44.120+02:00").unwrap();
        let expected = Utc.with_ymd_and_hms(2022, 8, 5, 18, 30, 44).unwrap()
            + chrono::Duration::milliseconds(120);
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_parse_naive_is_utc() {
        let dt = parse_timestamp("2022-08-05T18:30:44").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2022, 8, 5, 18, 30, 44).unwrap());
    }

    #[test]
    fn test_parse_space_separated_naive() {
        let dt = parse_timestamp("2022-08-05 18:30:44.5").unwrap();
        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(2022, 8, 5, 18, 30, 44).unwrap()
                + chrono::Duration::milliseconds(500)
        );
    }

    #[rstest]
    #[case::compact_offset("2022-08-05T20:30:44.120+0200")]
    #[case::compact_utc("2022-08-05T18:30:44.120+0000")]
    #[case::space_separated("2022-08-05 20:30:44.120+0200")]
    fn test_parse_offset_without_colon(#[case] raw: &str) {
        let expected = Utc.with_ymd_and_hms(2022, 8, 5, 18, 30, 44).unwrap()
            + chrono::Duration::milliseconds(120);
        assert_eq!(parse_timestamp(raw), Some(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::garbage("not a timestamp")]
    #[case::date_only_bad("2022-13-45")]
    fn test_parse_rejects(#[case] raw: &str) {
        assert!(parse_timestamp(raw).is_none());
    }

    #[test]
    fn test_seconds_between_positive_and_negative() {
        let a = Utc.with_ymd_and_hms(2022, 8, 5, 18, 30, 0).unwrap();
        let b = a + chrono::Duration::milliseconds(12_250);
        assert_relative_eq!(seconds_between(b, a), 12.25);
        assert_relative_eq!(seconds_between(a, b), -12.25);
    }
}
