//! Charge policy model.
//!
//! A [`ChargePolicy`] names the daily rate for a tool type and which
//! [`DayClass`]es of a rental window are billable under it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayClass;

/// The billing rule for one tool type.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayClass;
/// use tool_rental::models::ChargePolicy;
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
/// assert!(chainsaw.is_billable(DayClass::Holiday));
/// assert!(!chainsaw.is_billable(DayClass::Weekend));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// The tool type this policy applies to.
    pub tool_type: String,
    /// The charge for one billable day.
    pub daily_rate: Decimal,
    /// Whether non-holiday Monday to Friday dates are billed.
    pub weekday_billable: bool,
    /// Whether non-holiday Saturday and Sunday dates are billed.
    pub weekend_billable: bool,
    /// Whether observed holidays are billed.
    pub holiday_billable: bool,
}

impl ChargePolicy {
    /// Returns true if a day of the given class counts toward the bill.
    pub fn is_billable(&self, day_class: DayClass) -> bool {
        match day_class {
            DayClass::Weekday => self.weekday_billable,
            DayClass::Weekend => self.weekend_billable,
            DayClass::Holiday => self.holiday_billable,
        }
    }
}
