//! Charge calculation.
//!
//! Turns a chargeable day count into the three amounts shown on a contract.
//! Rounding happens exactly twice, half away from zero to whole cents:
//!
//! 1. `pre_discount_charge = round(daily_rate * chargeable_days)`
//! 2. `discount_amount = round(pre_discount_charge * discount_percent / 100)`
//!
//! The discount is taken from the already rounded pre-discount charge, and
//! `final_charge` is the plain difference of the two rounded amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::ChargePolicy;

/// Number of decimal places currency amounts are rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The rounded amounts for a checkout.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::ChargeBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = ChargeBreakdown {
///     pre_discount_charge: Decimal::new(398, 2),
///     discount_amount: Decimal::new(40, 2),
///     final_charge: Decimal::new(358, 2),
/// };
/// assert_eq!(
///     breakdown.pre_discount_charge - breakdown.discount_amount,
///     breakdown.final_charge
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Daily rate times chargeable days, rounded to cents.
    pub pre_discount_charge: Decimal,
    /// Discount taken from the rounded pre-discount charge, rounded to cents.
    pub discount_amount: Decimal,
    /// Pre-discount charge minus discount amount.
    pub final_charge: Decimal,
}

/// Computes the pre-discount, discount and final charges.
///
/// This is a pure calculator: `discount_percent` is expected to already be
/// validated to `0..=100`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::compute_charges;
/// use tool_rental::models::ChargePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let jackhammer = ChargePolicy {
///     tool_type: "Jackhammer".to_string(),
///     daily_rate: Decimal::from_str("2.99").unwrap(),
///     weekday_billable: true,
///     weekend_billable: false,
///     holiday_billable: false,
/// };
///
/// // 1.495 rounds up to 1.50
/// let charges = compute_charges(1, &jackhammer, 50);
/// assert_eq!(charges.pre_discount_charge, Decimal::from_str("2.99").unwrap());
/// assert_eq!(charges.discount_amount, Decimal::from_str("1.50").unwrap());
/// assert_eq!(charges.final_charge, Decimal::from_str("1.49").unwrap());
/// ```
pub fn compute_charges(
    chargeable_days: u32,
    policy: &ChargePolicy,
    discount_percent: u32,
) -> ChargeBreakdown {
    let pre_discount_charge = round_currency(policy.daily_rate * Decimal::from(chargeable_days));
    let discount_amount = round_currency(
        pre_discount_charge * Decimal::from(discount_percent) / Decimal::new(100, 0),
    );
    let final_charge = pre_discount_charge - discount_amount;

    ChargeBreakdown {
        pre_discount_charge,
        discount_amount,
        final_charge,
    }
}

/// Rounds an amount half away from zero to whole cents.
///
/// The result always carries exactly two decimal places, so `7` becomes
/// `7.00` and a zero discount renders as `0.00`.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount
        .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
