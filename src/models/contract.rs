//! Rental contract model.
//!
//! A [`Contract`] is the read-only result of a checkout: the tool, its rental
//! period and policy, the discount, and the computed charges. It knows how to
//! render itself as the line-oriented agreement handed to the customer.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{ChargeBreakdown, round_currency};

use super::{ChargePolicy, RentalPeriod, Tool};

/// Date format used on rendered contracts, e.g. `7/2/20`.
pub const CONTRACT_DATE_FORMAT: &str = "%-m/%-d/%y";

/// The computed agreement for a single tool checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    /// The rented tool.
    pub tool: Tool,
    /// The rental window.
    pub period: RentalPeriod,
    /// The policy the tool was billed under.
    pub policy: ChargePolicy,
    /// Discount percentage in `0..=100`.
    pub discount_percent: u32,
    /// Number of days in the window the policy bills for.
    pub chargeable_days: u32,
    /// Rounded pre-discount, discount, and final amounts.
    pub charges: ChargeBreakdown,
}

impl Contract {
    /// Renders the contract as its ordered list of output lines.
    ///
    /// # Example
    ///
    /// ```
    /// use tool_rental::calculation::assemble_contract;
    /// use tool_rental::models::{ChargePolicy, RentalPeriod, Tool};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let tool = Tool::new("LADW", "Ladder", "Werner");
    /// let policy = ChargePolicy {
    ///     tool_type: "Ladder".to_string(),
    ///     daily_rate: Decimal::new(199, 2),
    ///     weekday_billable: true,
    ///     weekend_billable: true,
    ///     holiday_billable: false,
    /// };
    /// let period = RentalPeriod::new(NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(), 3).unwrap();
    ///
    /// let contract = assemble_contract(tool, period, policy, 10);
    /// let lines = contract.lines();
    /// assert_eq!(lines[0], "Tool code: LADW");
    /// assert_eq!(lines[5], "Due date: 7/5/20");
    /// assert_eq!(lines[11], "Final Charge: $3.58");
    /// ```
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(12);

        lines.push(format!("Tool code: {}", self.tool.code));
        lines.push(format!("Tool type: {}", self.tool.tool_type));
        lines.push(format!("Tool brand: {}", self.tool.brand));

        lines.push(format!("Rental days: {}", self.period.day_count()));
        lines.push(format!(
            "Check out date: {}",
            format_date(self.period.start_date())
        ));
        lines.push(format!("Due date: {}", format_date(self.period.end_date())));

        lines.push(format!(
            "Daily rental charge: {}",
            format_currency(self.policy.daily_rate)
        ));
        lines.push(format!("Charge days: {}", self.chargeable_days));
        lines.push(format!(
            "Pre-discount charge: {}",
            format_currency(self.charges.pre_discount_charge)
        ));
        lines.push(format!("Discount percent: {}%", self.discount_percent));
        lines.push(format!(
            "Discount amount: {}",
            format_currency(self.charges.discount_amount)
        ));
        lines.push(format!(
            "Final Charge: {}",
            format_currency(self.charges.final_charge)
        ));

        lines
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Formats a date as `M/D/YY` with no leading zeros on month or day.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CONTRACT_DATE_FORMAT).to_string()
}

/// Formats an amount as dollars, rounded half away from zero to cents.
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", round_currency(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_contract() -> Contract {
        Contract {
            tool: Tool::new("JAKD", "Jackhammer", "DeWalt"),
            period: RentalPeriod::new(NaiveDate::from_ymd_opt(2015, 9, 3).unwrap(), 6).unwrap(),
            policy: ChargePolicy {
                tool_type: "Jackhammer".to_string(),
                daily_rate: dec("2.99"),
                weekday_billable: true,
                weekend_billable: false,
                holiday_billable: false,
            },
            discount_percent: 0,
            chargeable_days: 3,
            charges: ChargeBreakdown {
                pre_discount_charge: dec("8.97"),
                discount_amount: dec("0.00"),
                final_charge: dec("8.97"),
            },
        }
    }

    #[test]
    fn test_lines_follow_contract_order() {
        let lines = sample_contract().lines();
        assert_eq!(
            lines,
            vec![
                "Tool code: JAKD",
                "Tool type: Jackhammer",
                "Tool brand: DeWalt",
                "Rental days: 6",
                "Check out date: 9/3/15",
                "Due date: 9/9/15",
                "Daily rental charge: $2.99",
                "Charge days: 3",
                "Pre-discount charge: $8.97",
                "Discount percent: 0%",
                "Discount amount: $0.00",
                "Final Charge: $8.97",
            ]
        );
    }

    #[test]
    fn test_display_joins_lines_with_newlines() {
        let rendered = sample_contract().to_string();
        assert_eq!(rendered.lines().count(), 12);
        assert!(rendered.starts_with("Tool code: JAKD\n"));
        assert!(rendered.ends_with("Final Charge: $8.97"));
    }

    #[test]
    fn test_format_date_drops_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(format_date(date), "1/5/21");
        let date = NaiveDate::from_ymd_opt(2020, 12, 25).unwrap();
        assert_eq!(format_date(date), "12/25/20");
    }

    #[test]
    fn test_format_currency_pads_to_two_places() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(dec("1.5")), "$1.50");
        assert_eq!(format_currency(dec("14.95")), "$14.95");
        assert_eq!(format_currency(dec("7")), "$7.00");
    }

    #[test]
    fn test_format_currency_rounds_sub_cent_amounts() {
        assert_eq!(format_currency(dec("1.999")), "$2.00");
        assert_eq!(format_currency(dec("1.995")), "$2.00");
        assert_eq!(format_currency(dec("1.994")), "$1.99");
        assert_eq!(format_currency(dec("0.125")), "$0.13");
    }

    #[test]
    fn test_sub_cent_rate_renders_like_the_charge() {
        let mut contract = sample_contract();
        contract.policy.daily_rate = dec("0.125");
        contract.chargeable_days = 1;
        contract.charges = crate::calculation::compute_charges(1, &contract.policy, 0);

        let lines = contract.lines();
        assert_eq!(lines[6], "Daily rental charge: $0.13");
        assert_eq!(lines[8], "Pre-discount charge: $0.13");
    }
}
