//! Timestamp field values
//!
//! A `Timestamp` is a UTC instant. Its zero value is `0001-01-01T00:00:00Z`,
//! the zero time upstream producers write for an unset instant, so an unset
//! field round-trips through either projection as the record's `Default`.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Earliest UTC year a timestamp may carry
pub const MIN_YEAR: i32 = 0;

/// Latest UTC year a timestamp may carry
pub const MAX_YEAR: i32 = 9999;

/// UTC instant carried by a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The zero timestamp, `0001-01-01T00:00:00Z`
    pub fn zero() -> Self {
        let naive = NaiveDate::from_ymd_opt(1, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
        // Year 1 is always representable.
        Self(naive.map(|n| Utc.from_utc_datetime(&n)).unwrap_or_default())
    }

    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// RFC 3339 text with a `Z` suffix
    pub fn to_rfc3339(&self) -> String {
        format_rfc3339(&self.0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Whether `instant` falls in the years both projections can carry
pub fn in_range(instant: &DateTime<Utc>) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&instant.year())
}

pub(crate) fn format_rfc3339(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_year_one() {
        let zero = Timestamp::default();
        assert!(zero.is_zero());
        assert_eq!(zero.to_rfc3339(), "0001-01-01T00:00:00Z");
        assert_eq!(zero.as_datetime().timestamp(), -62_135_596_800);
    }

    #[test]
    fn test_serde_text_matches_rfc3339() {
        let kickoff: Timestamp = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap().into();
        assert_eq!(serde_json::to_value(kickoff).unwrap(), "2024-03-10T15:30:00Z");
        assert_eq!(serde_json::to_value(Timestamp::zero()).unwrap(), "0001-01-01T00:00:00Z");

        let back: Timestamp = serde_json::from_str("\"2024-03-10T15:30:00Z\"").unwrap();
        assert_eq!(back, kickoff);
        assert!(!back.is_zero());
    }

    #[test]
    fn test_year_range() {
        assert!(in_range(&Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()));
        assert!(!in_range(&Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap()));
        assert!(!in_range(&Utc.with_ymd_and_hms(-1, 12, 31, 0, 0, 0).unwrap()));
    }
}
