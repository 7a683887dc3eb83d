//! Day classification logic.
//!
//! This module decides whether a calendar date is an ordinary weekday, a
//! weekend day, or an observed holiday. Two holidays are recognised:
//!
//! - Independence Day, July 4th. When it falls on a Saturday it is observed
//!   on Friday July 3rd; when it falls on a Sunday it is observed on Monday
//!   July 5th.
//! - Labor Day, the first Monday in September.
//!
//! Holiday status takes precedence over weekend status, so every date has
//! exactly one [`DayClass`].

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The billing class of a single calendar date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayClass;
///
/// let day_class = DayClass::Holiday;
/// assert_eq!(format!("{}", day_class), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Monday through Friday, not an observed holiday.
    Weekday,
    /// Saturday or Sunday, not an observed holiday.
    Weekend,
    /// An observed Independence Day or Labor Day.
    Holiday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Weekday => write!(f, "Weekday"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Classifies a date as weekday, weekend, or holiday.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{classify, DayClass};
/// use chrono::NaiveDate;
///
/// // 2020-07-03 is the Friday on which Saturday's July 4th is observed
/// let observed = NaiveDate::from_ymd_opt(2020, 7, 3).unwrap();
/// assert_eq!(classify(observed), DayClass::Holiday);
///
/// // 2020-09-14 is the second Monday in September
/// let monday = NaiveDate::from_ymd_opt(2020, 9, 14).unwrap();
/// assert_eq!(classify(monday), DayClass::Weekday);
///
/// // 2020-07-05 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2020, 7, 5).unwrap();
/// assert_eq!(classify(sunday), DayClass::Weekend);
/// ```
pub fn classify(date: NaiveDate) -> DayClass {
    if is_holiday(date) {
        DayClass::Holiday
    } else if is_weekend(date) {
        DayClass::Weekend
    } else {
        DayClass::Weekday
    }
}

/// Returns true if the date is an observed Independence Day or Labor Day.
pub fn is_holiday(date: NaiveDate) -> bool {
    is_observed_independence_day(date) || is_labor_day(date)
}

/// Returns true if the date is the day Independence Day is observed on.
///
/// The observed day is always in July: Friday the 3rd (July 4th is a
/// Saturday), Monday the 5th (July 4th is a Sunday), or the 4th itself when
/// it falls Monday through Friday. A weekend July 4th is not itself observed.
pub fn is_observed_independence_day(date: NaiveDate) -> bool {
    if date.month() != 7 {
        return false;
    }

    match (date.weekday(), date.day()) {
        (Weekday::Fri, 3) => true,
        (Weekday::Mon, 5) => true,
        (_, 4) => !is_weekend(date),
        _ => false,
    }
}

/// Returns true if the date is Labor Day, the first Monday in September.
pub fn is_labor_day(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() <= 7
}

/// Returns true for Saturdays and Sundays, regardless of holidays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
