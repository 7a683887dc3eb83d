//! Contract assembly.
//!
//! Runs the day counter and the charge calculator for a tool and bundles
//! the results into a [`Contract`].

use crate::models::{ChargePolicy, Contract, RentalPeriod, Tool};

use super::chargeable_days::count_chargeable_days;
use super::charges::compute_charges;

/// Builds the contract for renting `tool` over `period` under `policy`.
///
/// `discount_percent` must already be validated to `0..=100`.
pub fn assemble_contract(
    tool: Tool,
    period: RentalPeriod,
    policy: ChargePolicy,
    discount_percent: u32,
) -> Contract {
    let chargeable_days = count_chargeable_days(&period, &policy);
    let charges = compute_charges(chargeable_days, &policy, discount_percent);

    Contract {
        tool,
        period,
        policy,
        discount_percent,
        chargeable_days,
        charges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn jackhammer() -> ChargePolicy {
        ChargePolicy {
            tool_type: "Jackhammer".to_string(),
            daily_rate: dec("2.99"),
            weekday_billable: true,
            weekend_billable: false,
            holiday_billable: false,
        }
    }

    #[test]
    fn test_long_rental_over_independence_day() {
        let period = RentalPeriod::new(NaiveDate::from_ymd_opt(2015, 7, 2).unwrap(), 9).unwrap();
        let contract = assemble_contract(
            Tool::new("JAKR", "Jackhammer", "Ridgid"),
            period,
            jackhammer(),
            0,
        );

        assert_eq!(contract.chargeable_days, 5);
        assert_eq!(contract.charges.pre_discount_charge, dec("14.95"));
        assert_eq!(contract.charges.discount_amount, dec("0.00"));
        assert_eq!(contract.charges.final_charge, dec("14.95"));
        assert_eq!(contract.lines()[5], "Due date: 7/11/15");
    }

    #[test]
    fn test_contract_keeps_inputs() {
        let period = RentalPeriod::new(NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(), 4).unwrap();
        let tool = Tool::new("JAKR", "Jackhammer", "Ridgid");
        let contract = assemble_contract(tool.clone(), period, jackhammer(), 50);

        assert_eq!(contract.tool, tool);
        assert_eq!(contract.period, period);
        assert_eq!(contract.discount_percent, 50);
        assert_eq!(contract.chargeable_days, 1);
        assert_eq!(contract.charges.final_charge, dec("1.49"));
    }
}
