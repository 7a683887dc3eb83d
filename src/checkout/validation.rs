//! Checkout request validation.
//!
//! Fields are checked in a fixed order (tool code, checkout date, rental
//! day count, discount) and the first failure is returned.

use chrono::NaiveDate;

use crate::error::{RentalError, RentalResult};

use super::CheckoutRequest;

/// A checkout request whose fields have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCheckout {
    /// Non-empty tool code. Not yet checked against the catalog.
    pub tool_code: String,
    /// Parsed checkout date.
    pub checkout_date: NaiveDate,
    /// Rental day count, at least one.
    pub rental_day_count: u32,
    /// Discount percentage in `0..=100`.
    pub discount_percent: u32,
}

/// Validates a checkout request.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::{validate_request, CheckoutRequest};
/// use tool_rental::error::RentalError;
///
/// let request = CheckoutRequest::new("JAKR", 5, 101, "9/3/15");
/// assert!(matches!(
///     validate_request(&request),
///     Err(RentalError::InvalidDiscount { percent: 101 })
/// ));
/// ```
pub fn validate_request(request: &CheckoutRequest) -> RentalResult<ValidatedCheckout> {
    let tool_code = request.tool_code.trim();
    if tool_code.is_empty() {
        return Err(RentalError::InvalidToolCode {
            code: request.tool_code.clone(),
            message: "tool code must not be empty".to_string(),
        });
    }

    let checkout_date = parse_checkout_date(&request.checkout_date)?;

    if request.rental_day_count < 1 {
        return Err(RentalError::InvalidRentalDuration {
            days: request.rental_day_count,
            message: "rental day count must be at least 1".to_string(),
        });
    }
    let rental_day_count =
        u32::try_from(request.rental_day_count).map_err(|_| RentalError::InvalidRentalDuration {
            days: request.rental_day_count,
            message: format!("rental day count must be at most {}", u32::MAX),
        })?;

    if !(0..=100).contains(&request.discount_percent) {
        return Err(RentalError::InvalidDiscount {
            percent: request.discount_percent,
        });
    }

    Ok(ValidatedCheckout {
        tool_code: tool_code.to_string(),
        checkout_date,
        rental_day_count,
        discount_percent: request.discount_percent as u32,
    })
}

/// Parses a checkout date written as `M/D/Y`.
///
/// Month and day take one or two digits. The year takes two digits, read as
/// 2000 through 2099, or four digits.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::parse_checkout_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// assert_eq!(parse_checkout_date("7/2/20").unwrap(), expected);
/// assert_eq!(parse_checkout_date("07/02/2020").unwrap(), expected);
/// assert!(parse_checkout_date("2020-07-02").is_err());
/// ```
pub fn parse_checkout_date(input: &str) -> RentalResult<NaiveDate> {
    let invalid = |message: &str| RentalError::InvalidCheckoutDate {
        input: input.to_string(),
        message: message.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("check out date must not be empty"));
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(invalid("expected M/D/Y"));
    };

    let month = parse_number(month, 1..=2).ok_or_else(|| invalid("month must be 1 or 2 digits"))?;
    let day = parse_number(day, 1..=2).ok_or_else(|| invalid("day must be 1 or 2 digits"))?;
    let year = match year.len() {
        2 => parse_number(year, 2..=2).map(|y| 2000 + y),
        4 => parse_number(year, 4..=4),
        _ => None,
    }
    .ok_or_else(|| invalid("year must be 2 or 4 digits"))?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| invalid("no such calendar date"))
}

fn parse_number(digits: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
