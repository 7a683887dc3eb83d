//! Rental period model.
//!
//! A [`RentalPeriod`] turns a checkout date and a day count into the window
//! of dates that may be charged. The checkout day itself is never charged:
//! charging starts the day after checkout and runs for `day_count` days,
//! ending on the due date.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::{RentalError, RentalResult};

/// The date window of a single rental.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalPeriod;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let period = RentalPeriod::new(start, 3).unwrap();
///
/// assert_eq!(period.first_charge_date(), NaiveDate::from_ymd_opt(2020, 7, 3).unwrap());
/// assert_eq!(period.end_date(), NaiveDate::from_ymd_opt(2020, 7, 5).unwrap());
/// assert_eq!(period.charge_dates().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalPeriod {
    start_date: NaiveDate,
    day_count: u32,
    first_charge_date: NaiveDate,
    end_date: NaiveDate,
}

impl RentalPeriod {
    /// Creates a rental period starting on the checkout date.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidRentalDuration`] if `day_count` is zero or
    /// the due date falls outside the supported calendar range.
    pub fn new(start_date: NaiveDate, day_count: u32) -> RentalResult<Self> {
        if day_count == 0 {
            return Err(RentalError::InvalidRentalDuration {
                days: 0,
                message: "rental day count must be at least 1".to_string(),
            });
        }

        let out_of_range = || RentalError::InvalidRentalDuration {
            days: i64::from(day_count),
            message: format!("due date is out of range for checkout on {}", start_date),
        };

        let first_charge_date = start_date
            .checked_add_days(Days::new(1))
            .ok_or_else(out_of_range)?;
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(day_count)))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            start_date,
            day_count,
            first_charge_date,
            end_date,
        })
    }

    /// The checkout date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Number of days the tool is rented for.
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// The first date that can be charged, the day after checkout.
    pub fn first_charge_date(&self) -> NaiveDate {
        self.first_charge_date
    }

    /// The due date, which is also the last chargeable date.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Iterates over every chargeable date in order, `first_charge_date`
    /// through `end_date` inclusive.
    pub fn charge_dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first_charge_date
            .iter_days()
            .take(self.day_count as usize)
    }

    /// Splits the period in two at `first_days`, for rentals that are
    /// extended or billed in instalments.
    ///
    /// The first part covers the first `first_days` chargeable dates, and the
    /// second part starts on the first part's due date. Returns `None` unless
    /// `0 < first_days < day_count`.
    pub fn split_at(&self, first_days: u32) -> Option<(RentalPeriod, RentalPeriod)> {
        if first_days == 0 || first_days >= self.day_count {
            return None;
        }
        let head = RentalPeriod::new(self.start_date, first_days).ok()?;
        let tail = RentalPeriod::new(head.end_date, self.day_count - first_days).ok()?;
        Some((head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_charge_date_is_day_after_checkout() {
        let period = RentalPeriod::new(date(2015, 9, 3), 6).unwrap();
        assert_eq!(period.first_charge_date(), date(2015, 9, 4));
        assert_eq!(period.end_date(), date(2015, 9, 9));
    }

    #[test]
    fn test_single_day_window_is_one_date() {
        let period = RentalPeriod::new(date(2024, 1, 1), 1).unwrap();
        let dates: Vec<NaiveDate> = period.charge_dates().collect();
        assert_eq!(dates, vec![date(2024, 1, 2)]);
        assert_eq!(period.first_charge_date(), period.end_date());
    }

    #[test]
    fn test_charge_dates_span_month_and_year_boundaries() {
        let period = RentalPeriod::new(date(2019, 12, 30), 3).unwrap();
        let dates: Vec<NaiveDate> = period.charge_dates().collect();
        assert_eq!(
            dates,
            vec![date(2019, 12, 31), date(2020, 1, 1), date(2020, 1, 2)]
        );
    }

    #[test]
    fn test_leap_day_is_included() {
        let period = RentalPeriod::new(date(2020, 2, 27), 3).unwrap();
        assert!(period.charge_dates().any(|d| d == date(2020, 2, 29)));
        assert_eq!(period.end_date(), date(2020, 3, 1));
    }

    #[test]
    fn test_zero_days_is_rejected() {
        let result = RentalPeriod::new(date(2020, 7, 2), 0);
        match result {
            Err(RentalError::InvalidRentalDuration { days, .. }) => assert_eq!(days, 0),
            other => panic!("Expected InvalidRentalDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_due_date_past_calendar_end_is_rejected() {
        let result = RentalPeriod::new(NaiveDate::MAX, 1);
        assert!(matches!(
            result,
            Err(RentalError::InvalidRentalDuration { days: 1, .. })
        ));
    }

    #[test]
    fn test_split_at_produces_adjacent_periods() {
        let period = RentalPeriod::new(date(2015, 7, 2), 9).unwrap();
        let (head, tail) = period.split_at(4).unwrap();
        assert_eq!(head.day_count(), 4);
        assert_eq!(tail.day_count(), 5);
        assert_eq!(tail.first_charge_date(), head.end_date().succ_opt().unwrap());
        assert_eq!(tail.end_date(), period.end_date());
    }

    #[test]
    fn test_split_at_rejects_degenerate_splits() {
        let period = RentalPeriod::new(date(2015, 7, 2), 3).unwrap();
        assert!(period.split_at(0).is_none());
        assert!(period.split_at(3).is_none());
    }
}
