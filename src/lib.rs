//! Tool rental checkout engine
//!
//! This crate produces rental agreements for a point-of-sale tool rental
//! counter. Given a tool code, a rental day count, a discount percentage and
//! a checkout date, it works out which days in the rental window are
//! chargeable (weekday, weekend, and the observed Independence Day and Labor
//! Day holidays) and computes the rounded pre-discount, discount and final
//! charges.
//!
//! # Example
//!
//! ```
//! use tool_rental::checkout::{Checkout, CheckoutRequest};
//! use tool_rental::config::Catalog;
//! use tool_rental::models::{ChargePolicy, Tool};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::new()
//!     .with_tool(Tool::new("JAKR", "Jackhammer", "Ridgid"))
//!     .with_policy(ChargePolicy {
//!         tool_type: "Jackhammer".to_string(),
//!         daily_rate: Decimal::new(299, 2),
//!         weekday_billable: true,
//!         weekend_billable: false,
//!         holiday_billable: false,
//!     });
//!
//! let contract = Checkout::from_catalog(&catalog)
//!     .checkout(&CheckoutRequest::new("JAKR", 4, 50, "7/2/20"))
//!     .unwrap();
//! assert_eq!(contract.chargeable_days, 1);
//! assert_eq!(contract.charges.final_charge, Decimal::new(149, 2));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
