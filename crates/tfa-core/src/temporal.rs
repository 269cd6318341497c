//! # Temporal Types — Civil Calendar Dates
//!
//! Defines `CalendarDate`, the date type used for every licensing deadline
//! in the stack: license issuance and expiry, insurance expiry, season
//! windows, application dates, and dates of birth.
//!
//! ## Design Invariant
//!
//! Licensing runs on civil dates, not instants. A permit that closes on
//! `2024-08-31` closes on that date in every presentation layer, regardless
//! of where the caller's clock lives. `CalendarDate` therefore wraps
//! `chrono::NaiveDate` and rejects anything but strict ISO `YYYY-MM-DD`
//! input — there is no time-of-day or offset component that could make two
//! representations of the same deadline compare unequal.
//!
//! Domain logic never reads the system clock. The reference date for every
//! derivation is passed in by the caller, which keeps status computation a
//! pure function and makes "as of" queries trivial to test.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AuthorityError;

/// A civil calendar date in ISO `YYYY-MM-DD` form.
///
/// # Construction
///
/// - [`CalendarDate::parse()`] — from a strict ISO string.
/// - [`CalendarDate::from_ymd()`] — from numeric components, rejecting
///   impossible dates.
/// - [`CalendarDate::from_naive()`] — from a `chrono::NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a date from a strict ISO `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns a field-less validation error if the string is not a valid
    /// ISO date. Callers at intake boundaries re-qualify the error with the
    /// submitting field's name.
    pub fn parse(s: &str) -> Result<Self, AuthorityError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            AuthorityError::Validation {
                field: "date".to_string(),
                reason: format!("invalid ISO date {s:?}: {e}"),
            }
        })?;
        Ok(Self(date))
    }

    /// Build a date from numeric year/month/day components.
    ///
    /// # Errors
    ///
    /// Returns a validation error for impossible dates (month 13,
    /// February 30, and so on).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, AuthorityError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| AuthorityError::Validation {
                field: "date".to_string(),
                reason: format!("no such calendar date: {year:04}-{month:02}-{day:02}"),
            })
    }

    /// Wrap an existing `chrono::NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Whole days from `self` to `other`. Negative when `other` is in the
    /// past relative to `self`.
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The same calendar date `years` later.
    ///
    /// Leap-day inputs clamp to February 28 of the target year, matching
    /// chrono's month arithmetic.
    pub fn plus_years(&self, years: u32) -> CalendarDate {
        self.0
            .checked_add_months(Months::new(years * 12))
            .map(Self)
            .unwrap_or(*self)
    }

    /// Render as ISO `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_accepted() {
        let date = CalendarDate::parse("2024-08-31").unwrap();
        assert_eq!(date.to_iso(), "2024-08-31");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CalendarDate::parse("not-a-date").is_err());
        assert!(CalendarDate::parse("2024-13-01").is_err());
        assert!(CalendarDate::parse("31/08/2024").is_err());
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_datetime_suffix() {
        assert!(CalendarDate::parse("2024-08-31T00:00:00Z").is_err());
    }

    #[test]
    fn test_from_ymd_rejects_impossible_dates() {
        assert!(CalendarDate::from_ymd(2024, 2, 30).is_err());
        assert!(CalendarDate::from_ymd(2024, 0, 1).is_err());
    }

    #[test]
    fn test_from_ymd_accepts_leap_day() {
        let date = CalendarDate::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.to_iso(), "2024-02-29");
    }

    #[test]
    fn test_days_until_forward() {
        let from = CalendarDate::parse("2024-09-01").unwrap();
        let to = CalendarDate::parse("2024-09-15").unwrap();
        assert_eq!(from.days_until(to), 14);
    }

    #[test]
    fn test_days_until_negative_when_past() {
        let from = CalendarDate::parse("2024-09-15").unwrap();
        let to = CalendarDate::parse("2024-08-31").unwrap();
        assert_eq!(from.days_until(to), -15);
    }

    #[test]
    fn test_days_until_same_day_is_zero() {
        let date = CalendarDate::parse("2024-09-01").unwrap();
        assert_eq!(date.days_until(date), 0);
    }

    #[test]
    fn test_plus_years() {
        let date = CalendarDate::parse("2024-08-15").unwrap();
        assert_eq!(date.plus_years(1).to_iso(), "2025-08-15");
    }

    #[test]
    fn test_plus_years_clamps_leap_day() {
        let date = CalendarDate::parse("2024-02-29").unwrap();
        assert_eq!(date.plus_years(1).to_iso(), "2025-02-28");
    }

    #[test]
    fn test_ordering() {
        let earlier = CalendarDate::parse("2024-08-31").unwrap();
        let later = CalendarDate::parse("2024-09-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_display_matches_iso() {
        let date = CalendarDate::parse("2024-12-31").unwrap();
        assert_eq!(format!("{date}"), "2024-12-31");
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = CalendarDate::parse("2024-08-31").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy over the plausible licensing date range.
    fn any_date() -> impl Strategy<Value = CalendarDate> {
        (1990i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
            CalendarDate::from_naive(NaiveDate::from_ymd_opt(y, m, d).unwrap())
        })
    }

    proptest! {
        /// Display output always parses back to the same date.
        #[test]
        fn display_parse_roundtrip(date in any_date()) {
            let parsed = CalendarDate::parse(&date.to_iso()).unwrap();
            prop_assert_eq!(parsed, date);
        }

        /// days_until is antisymmetric.
        #[test]
        fn days_until_antisymmetric(a in any_date(), b in any_date()) {
            prop_assert_eq!(a.days_until(b), -b.days_until(a));
        }

        /// Ordering agrees with signed day distance.
        #[test]
        fn ordering_matches_distance(a in any_date(), b in any_date()) {
            prop_assert_eq!(a < b, a.days_until(b) > 0);
        }
    }
}
