use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one which is taken as UTC.
/// SQLite's `datetime('now')` shape (`YYYY-MM-DD HH:MM:SS`) is accepted too.
pub fn parse_flexible(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|ndt| ndt.and_utc()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").map(|ndt| ndt.and_utc()))
}

/// `#[serde(deserialize_with = "...")]` adapter for required timestamps.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw).map_err(serde::de::Error::custom)
}

/// Same as [`deserialize`] for nullable fields. Pair with `#[serde(default)]`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_flexible(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();

        assert_eq!(parse_flexible("2025-03-01T12:30:00Z").unwrap(), expected);
        assert_eq!(parse_flexible("2025-03-01T14:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_flexible("2025-03-01T12:30:00").unwrap(), expected);
        assert_eq!(parse_flexible("2025-03-01 12:30:00").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_flexible("next tuesday").is_err());
    }
}
