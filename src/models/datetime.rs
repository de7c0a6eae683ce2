//! Serde helpers for deadline fields.
//!
//! Deadlines are stored timezone-naive in UTC. Input may arrive either naive
//! or with a UTC offset; offset-carrying values are converted to UTC and the
//! offset is dropped before they reach the rest of the application.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};

/// Parses an ISO-8601 datetime string, normalizing any UTC offset away.
pub fn parse_naive_utc(raw: &str) -> Result<NaiveDateTime, String> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return Ok(aware.with_timezone(&Utc).naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|err| format!("invalid datetime '{}': {}", raw, err))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_naive_utc(&raw).map_err(de::Error::custom)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| parse_naive_utc(&value).map_err(de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_naive_input_is_kept_as_is() {
        let parsed = parse_naive_utc("2030-01-15T12:30:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2030, 1, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_fractional_seconds_are_accepted() {
        let parsed = parse_naive_utc("2030-01-15T12:30:00.123456").unwrap();
        assert_eq!(parsed.and_utc().timestamp_subsec_micros(), 123456);
    }

    #[test]
    fn test_aware_input_is_converted_to_naive_utc() {
        // 12:30 at +02:00 is 10:30 in UTC.
        let parsed = parse_naive_utc("2030-01-15T12:30:00+02:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2030, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_zulu_suffix_is_stripped() {
        let parsed = parse_naive_utc("2030-01-15T12:30:00Z").unwrap();
        let expected = NaiveDate::from_ymd_opt(2030, 1, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_naive_utc("not-a-datetime").is_err());
        assert!(parse_naive_utc("2030-13-01T00:00:00").is_err());
    }
}
