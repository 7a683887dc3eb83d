//! Calculation logic for the tool rental engine.
//!
//! This module contains the pure parts of a checkout: classifying dates as
//! weekday, weekend or holiday, counting the chargeable days of a rental
//! period under a charge policy, computing the rounded charges, and
//! assembling the final contract.

mod chargeable_days;
mod charges;
mod contract_assembly;
mod day_classification;

pub use chargeable_days::count_chargeable_days;
pub use charges::{CURRENCY_DECIMAL_PLACES, ChargeBreakdown, compute_charges, round_currency};
pub use contract_assembly::assemble_contract;
pub use day_classification::{
    DayClass, classify, is_holiday, is_labor_day, is_observed_independence_day, is_weekend,
};
