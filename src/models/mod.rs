//! Core data models for the tool rental engine.
//!
//! This module contains the domain values that flow through a checkout:
//! tools, charge policies, rental periods, and the resulting contract.

mod charge_policy;
mod contract;
mod rental_period;
mod tool;

pub use charge_policy::ChargePolicy;
pub use contract::{CONTRACT_DATE_FORMAT, Contract, format_currency, format_date};
pub use rental_period::RentalPeriod;
pub use tool::Tool;
