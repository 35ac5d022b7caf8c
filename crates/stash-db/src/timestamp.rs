//! Timestamps are stored as fixed-width UTC text so that SQL string ordering
//! and comparison agree with time ordering.

use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::Row;
use rusqlite::types::Type;

/// Current time at storage precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Drops precision the stored form cannot keep, so a value handed back from
/// an insert equals the value read back later.
pub fn normalize(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(6)
}

pub fn encode(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

pub fn column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    decode(idx, &raw)
}

pub fn column_opt(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| decode(idx, &s)).transpose()
}

fn decode(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    stash_types::datetime::parse_flexible(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn encoding_is_fixed_width_and_ordered() {
        let early = Utc.with_ymd_and_hms(2025, 1, 9, 23, 59, 59).unwrap();
        let late = early + chrono::Duration::microseconds(1);

        let (a, b) = (encode(&early), encode(&late));
        assert_eq!(a.len(), b.len());
        assert!(a < b);
        assert_eq!(a, "2025-01-09T23:59:59.000000Z");
    }

    #[test]
    fn normalized_values_survive_a_round_trip() {
        let precise = Utc.with_ymd_and_hms(2025, 1, 9, 8, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let stored = normalize(precise);
        let decoded = stash_types::datetime::parse_flexible(&encode(&stored)).unwrap();
        assert_eq!(decoded, stored);
    }
}
