//! Chargeable day counting.
//!
//! Walks every date of a [`RentalPeriod`], classifies it, and counts the
//! dates whose class the [`ChargePolicy`] bills for.

use crate::models::{ChargePolicy, RentalPeriod};

use super::day_classification::classify;

/// Counts the days of a rental period that the policy charges for.
///
/// Exactly `period.day_count()` dates are examined, starting the day after
/// checkout. Each date is classified on its own, so a rental that spans a
/// holiday picks up the holiday rule only for that date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::count_chargeable_days;
/// use tool_rental::models::{ChargePolicy, RentalPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let chainsaw = ChargePolicy {
///     tool_type: "Chainsaw".to_string(),
///     daily_rate: Decimal::new(149, 2),
///     weekday_billable: true,
///     weekend_billable: false,
///     holiday_billable: true,
/// };
///
/// // Fri 7/3 (observed holiday), Sat, Sun, Mon, Tue
/// let period = RentalPeriod::new(NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(), 5).unwrap();
/// assert_eq!(count_chargeable_days(&period, &chainsaw), 3);
/// ```
pub fn count_chargeable_days(period: &RentalPeriod, policy: &ChargePolicy) -> u32 {
    period
        .charge_dates()
        .filter(|date| policy.is_billable(classify(*date)))
        .count() as u32
}
