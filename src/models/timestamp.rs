//! Lenient timestamp encoding for record dates
//!
//! Record dates arrive in several shapes: full RFC 3339 instants from the API
//! (`2024-03-01T08:30:00.000Z`), naive local date-times, or bare calendar days
//! (`2024-03-01`). All of them are normalised to a local `NaiveDateTime`.
//! Anything else decodes to `None` so that one bad record cannot abort loading
//! a whole collection.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a timestamp string in any of the accepted shapes
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Some(instant.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a timestamp the way it is written to storage
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(SERIALIZE_FORMAT).to_string()
}

/// Serde adapter for `Option<NaiveDateTime>` fields
pub fn serialize<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&format(ts)),
        None => serializer.serialize_none(),
    }
}

/// Serde adapter for `Option<NaiveDateTime>` fields
pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => {
            let parsed = parse(&s);
            if parsed.is_none() {
                log::warn!("unparseable date {:?} ignored", s);
            }
            parsed
        }
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            log::warn!("unexpected date value {} ignored", other);
            None
        }
    })
}

/// Serde adapter for mandatory `NaiveDateTime` fields (drafts)
pub mod required {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid date: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "crate::models::timestamp")]
        date: Option<NaiveDateTime>,
    }

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_date_only_is_local_midnight() {
        assert_eq!(parse("2024-03-01"), Some(ymd_hms(2024, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert_eq!(
            parse("2024-03-15T14:30:00"),
            Some(ymd_hms(2024, 3, 15, 14, 30, 0))
        );
        assert_eq!(
            parse("2024-03-15 14:30:00.250"),
            Some(ymd_hms(2024, 3, 15, 14, 30, 0) + chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_parse_rfc3339_converts_to_local() {
        let expected = DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse("2024-03-15T12:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse("yesterday"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("2024-13-01"), None);
    }

    #[test]
    fn test_serde_adapter() {
        let h: Holder = serde_json::from_str(r#"{"date": "2024-02-29"}"#).unwrap();
        assert_eq!(h.date, Some(ymd_hms(2024, 2, 29, 0, 0, 0)));

        let h: Holder = serde_json::from_str(r#"{"date": "garbage"}"#).unwrap();
        assert_eq!(h.date, None);

        let h: Holder = serde_json::from_str(r#"{"date": 17}"#).unwrap();
        assert_eq!(h.date, None);

        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.date, None);

        let h = Holder {
            date: Some(ymd_hms(2024, 3, 1, 9, 5, 0)),
        };
        assert_eq!(
            serde_json::to_string(&h).unwrap(),
            r#"{"date":"2024-03-01T09:05:00"}"#
        );
    }
}
