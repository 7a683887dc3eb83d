//! Error types for the tool rental engine.
//!
//! Every rejected checkout surfaces as one of the caller-input variants of
//! [`RentalError`]. The remaining variants cover catalog loading and contract
//! output, which happen outside the pure calculation path.

use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::InvalidDiscount { percent: 101 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid discount 101%: discount percentage must be in range 0 to 100"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// The tool code was empty, unknown, or its tool type has no charge policy.
    #[error("Invalid tool code '{code}': {message}")]
    InvalidToolCode {
        /// The tool code as supplied by the caller.
        code: String,
        /// Why the code was rejected.
        message: String,
    },

    /// The checkout date was empty or could not be parsed as M/D/Y.
    #[error("Invalid checkout date '{input}': {message}")]
    InvalidCheckoutDate {
        /// The raw date string as supplied by the caller.
        input: String,
        /// Why the date was rejected.
        message: String,
    },

    /// The rental day count was below one or ran past the supported calendar.
    #[error("Invalid rental duration {days}: {message}")]
    InvalidRentalDuration {
        /// The rental day count as supplied by the caller.
        days: i64,
        /// Why the duration was rejected.
        message: String,
    },

    /// The discount percentage was outside `0..=100`.
    #[error("Invalid discount {percent}%: discount percentage must be in range 0 to 100")]
    InvalidDiscount {
        /// The discount percentage as supplied by the caller.
        percent: i64,
    },

    /// A catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rendered contract could not be written out.
    #[error("Failed to output contract: {message}")]
    OutputError {
        /// A description of the output failure.
        message: String,
    },
}

impl RentalError {
    /// Returns true for errors caused by the checkout request itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RentalError::InvalidToolCode { .. }
                | RentalError::InvalidCheckoutDate { .. }
                | RentalError::InvalidRentalDuration { .. }
                | RentalError::InvalidDiscount { .. }
        )
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tool_code_displays_code_and_message() {
        let error = RentalError::InvalidToolCode {
            code: "XXXX".to_string(),
            message: "no tool with this code".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tool code 'XXXX': no tool with this code"
        );
    }

    #[test]
    fn test_invalid_checkout_date_displays_input() {
        let error = RentalError::InvalidCheckoutDate {
            input: "13/1/20".to_string(),
            message: "no such calendar date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid checkout date '13/1/20': no such calendar date"
        );
    }

    #[test]
    fn test_invalid_rental_duration_displays_days() {
        let error = RentalError::InvalidRentalDuration {
            days: 0,
            message: "rental day count must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rental duration 0: rental day count must be at least 1"
        );
    }

    #[test]
    fn test_invalid_discount_mentions_range() {
        let error = RentalError::InvalidDiscount { percent: -1 };
        assert_eq!(
            error.to_string(),
            "Invalid discount -1%: discount percentage must be in range 0 to 100"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = RentalError::ConfigNotFound {
            path: "/missing/tools.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Catalog file not found: /missing/tools.yaml"
        );
    }

    #[test]
    fn test_input_errors_are_flagged() {
        assert!(RentalError::InvalidDiscount { percent: 150 }.is_input_error());
        assert!(
            !RentalError::OutputError {
                message: "broken pipe".to_string()
            }
            .is_input_error()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RentalError>();
    }
}
