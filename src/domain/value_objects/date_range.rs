//! # Date Range
//!
//! Rental period as a half-open interval of calendar dates.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rental_broker::domain::value_objects::DateRange;
//!
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(range.days(), 4);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rental period `[start, end)`.
///
/// # Invariants
///
/// - `start < end`, so every range covers at least one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DomainError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a date range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `start` is not before `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::invalid_date_range(format!(
                "start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    #[inline]
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the day after the last rented day.
    #[inline]
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of rented days; always at least 1.
    #[must_use]
    pub fn days(&self) -> u32 {
        let days = (self.end - self.start).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Returns true if the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Calendar year of the first rented day.
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start.year()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        let day = date(2024, 3, 1);
        assert!(DateRange::new(day, day).is_err());
        assert!(DateRange::new(date(2024, 3, 2), day).is_err());
    }

    #[test]
    fn days_counts_nights() {
        assert_eq!(range(date(2024, 1, 1), date(2024, 1, 5)).days(), 4);
        assert_eq!(range(date(2024, 2, 28), date(2024, 3, 1)).days(), 2);
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let first = range(date(2024, 1, 1), date(2024, 1, 5));
        let second = range(date(2024, 1, 5), date(2024, 1, 8));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = range(date(2024, 1, 1), date(2024, 1, 31));
        let inner = range(date(2024, 1, 10), date(2024, 1, 11));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn deserialize_validates() {
        let ok: DateRange =
            serde_json::from_str(r#"{"start":"2024-01-01","end":"2024-01-02"}"#).unwrap();
        assert_eq!(ok.days(), 1);
        let bad = serde_json::from_str::<DateRange>(r#"{"start":"2024-01-02","end":"2024-01-01"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn display_and_year() {
        let r = range(date(2023, 12, 30), date(2024, 1, 2));
        assert_eq!(r.to_string(), "2023-12-30..2024-01-02");
        assert_eq!(r.start_year(), 2023);
    }

    fn arb_range() -> impl Strategy<Value = DateRange> {
        (0i64..2000, 1i64..60).prop_map(|(offset, len)| {
            let start = date(2020, 1, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(len);
            range(start, end)
        })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn range_overlaps_itself(a in arb_range()) {
            prop_assert!(a.overlaps(&a));
            prop_assert!(a.days() >= 1);
        }

        #[test]
        fn overlap_matches_shared_day(a in arb_range(), b in arb_range()) {
            let shared = a.start().max(b.start()) < a.end().min(b.end());
            prop_assert_eq!(a.overlaps(&b), shared);
        }
    }
}
