//! Request types for the tool rental API.
//!
//! This module defines the JSON body of the `/checkout` endpoint.

use serde::{Deserialize, Serialize};

use crate::checkout::CheckoutRequest;

/// Request body for the `/checkout` endpoint.
///
/// ```json
/// {
///   "tool_code": "LADW",
///   "rental_day_count": 3,
///   "discount_percent": 10,
///   "checkout_date": "7/2/20"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutPayload {
    /// Catalog code of the tool.
    pub tool_code: String,
    /// Number of rental days.
    #[serde(alias = "rental_days")]
    pub rental_day_count: i64,
    /// Discount percentage. Defaults to zero.
    #[serde(default)]
    pub discount_percent: i64,
    /// Checkout date as `M/D/Y`.
    pub checkout_date: String,
}

impl From<CheckoutPayload> for CheckoutRequest {
    fn from(payload: CheckoutPayload) -> Self {
        CheckoutRequest::new(
            payload.tool_code,
            payload.rental_day_count,
            payload.discount_percent,
            payload.checkout_date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_checkout_payload() {
        let json = r#"{
            "tool_code": "CHNS",
            "rental_day_count": 5,
            "discount_percent": 25,
            "checkout_date": "7/2/15"
        }"#;

        let payload: CheckoutPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.tool_code, "CHNS");
        assert_eq!(payload.rental_day_count, 5);
        assert_eq!(payload.discount_percent, 25);
    }

    #[test]
    fn test_discount_defaults_to_zero() {
        let json = r#"{ "tool_code": "JAKD", "rental_days": 6, "checkout_date": "9/3/15" }"#;
        let payload: CheckoutPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.discount_percent, 0);
    }

    #[test]
    fn test_out_of_range_values_still_deserialize() {
        // rejected later by validation, with a domain error
        let json = r#"{
            "tool_code": "JAKR",
            "rental_days": -3,
            "discount_percent": 101,
            "checkout_date": "9/3/15"
        }"#;
        let payload: CheckoutPayload = serde_json::from_str(json).unwrap();
        let request: CheckoutRequest = payload.into();
        assert_eq!(request.rental_day_count, -3);
        assert_eq!(request.discount_percent, 101);
    }
}
