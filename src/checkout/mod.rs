//! Checkout orchestration.
//!
//! A checkout validates the request, looks up the tool and its charge
//! policy, builds the rental period, and assembles the contract. All of the
//! arithmetic lives in [`crate::calculation`]; this module only wires the
//! pieces together and reports which input was wrong.

mod printer;
mod validation;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::assemble_contract;
use crate::config::{Catalog, PolicyCatalog, ToolCatalog};
use crate::error::{RentalError, RentalResult};
use crate::models::{Contract, RentalPeriod};

pub use printer::{ContractPrinter, TracingPrinter, WriterPrinter};
pub use validation::{ValidatedCheckout, parse_checkout_date, validate_request};

/// The raw inputs of a checkout, as supplied by a caller.
///
/// Numeric fields are signed so that out-of-range values reach validation
/// and are reported instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Catalog code of the tool to rent.
    pub tool_code: String,
    /// Number of days to rent for.
    pub rental_day_count: i64,
    /// Discount percentage.
    pub discount_percent: i64,
    /// Checkout date as `M/D/Y`.
    pub checkout_date: String,
}

impl CheckoutRequest {
    /// Creates a request from its four fields.
    pub fn new(
        tool_code: impl Into<String>,
        rental_day_count: i64,
        discount_percent: i64,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            tool_code: tool_code.into(),
            rental_day_count,
            discount_percent,
            checkout_date: checkout_date.into(),
        }
    }
}

/// Performs checkouts against a tool catalog and a policy catalog.
///
/// # Example
///
/// ```no_run
/// use tool_rental::checkout::{Checkout, CheckoutRequest};
/// use tool_rental::config::ConfigLoader;
///
/// let catalog = ConfigLoader::load("./config/catalog")?.into_catalog();
/// let checkout = Checkout::from_catalog(&catalog);
///
/// let contract = checkout.checkout(&CheckoutRequest::new("LADW", 3, 10, "7/2/20"))?;
/// println!("{}", contract);
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Checkout<'a> {
    tools: &'a dyn ToolCatalog,
    policies: &'a dyn PolicyCatalog,
}

impl<'a> Checkout<'a> {
    /// Creates a checkout over separate tool and policy catalogs.
    pub fn new(tools: &'a dyn ToolCatalog, policies: &'a dyn PolicyCatalog) -> Self {
        Self { tools, policies }
    }

    /// Creates a checkout over a combined in-memory catalog.
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::new(catalog, catalog)
    }

    /// Validates the request and produces its contract.
    ///
    /// # Errors
    ///
    /// Returns the first input error found, in the order tool code, checkout
    /// date, rental day count, discount. An unknown tool code, or a tool whose
    /// type has no policy, is reported as [`RentalError::InvalidToolCode`].
    pub fn checkout(&self, request: &CheckoutRequest) -> RentalResult<Contract> {
        let validated = validate_request(request)?;
        debug!(
            tool_code = %validated.tool_code,
            checkout_date = %validated.checkout_date,
            rental_days = validated.rental_day_count,
            discount_percent = validated.discount_percent,
            "Checkout request validated"
        );

        let tool = self
            .tools
            .tool_by_code(&validated.tool_code)
            .ok_or_else(|| RentalError::InvalidToolCode {
                code: validated.tool_code.clone(),
                message: "no tool with this code".to_string(),
            })?;

        let policy = self
            .policies
            .policy_for_type(&tool.tool_type)
            .ok_or_else(|| RentalError::InvalidToolCode {
                code: validated.tool_code.clone(),
                message: format!("no charge policy for tool type '{}'", tool.tool_type),
            })?;

        let period = RentalPeriod::new(validated.checkout_date, validated.rental_day_count)?;
        let contract = assemble_contract(
            tool.clone(),
            period,
            policy.clone(),
            validated.discount_percent,
        );

        info!(
            tool_code = %contract.tool.code,
            chargeable_days = contract.chargeable_days,
            final_charge = %contract.charges.final_charge,
            "Contract created"
        );

        Ok(contract)
    }

    /// Produces the contract and hands it to a printer.
    ///
    /// Nothing is printed when the request is rejected.
    pub fn checkout_and_print(
        &self,
        request: &CheckoutRequest,
        printer: &mut dyn ContractPrinter,
    ) -> RentalResult<Contract> {
        let contract = self.checkout(request)?;
        printer.print_contract(&contract)?;
        Ok(contract)
    }
}
