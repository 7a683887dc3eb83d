//! Contract output.
//!
//! A [`ContractPrinter`] decides where a rendered contract goes. The engine
//! ships a printer for any `std::io::Write` sink and one that emits each
//! line as a tracing event.

use std::io::Write;

use tracing::info;

use crate::error::{RentalError, RentalResult};
use crate::models::Contract;

/// Writes a finished contract somewhere.
pub trait ContractPrinter {
    /// Outputs every line of the contract, in order.
    fn print_contract(&mut self, contract: &Contract) -> RentalResult<()>;
}

/// Prints contracts to a writer, one line per contract line.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::WriterPrinter;
///
/// let printer = WriterPrinter::new(Vec::new());
/// assert!(printer.into_inner().is_empty());
/// ```
#[derive(Debug)]
pub struct WriterPrinter<W> {
    writer: W,
}

impl<W: Write> WriterPrinter<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterPrinter<std::io::Stdout> {
    /// A printer for standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ContractPrinter for WriterPrinter<W> {
    fn print_contract(&mut self, contract: &Contract) -> RentalResult<()> {
        let to_output_error = |e: std::io::Error| RentalError::OutputError {
            message: e.to_string(),
        };
        for line in contract.lines() {
            writeln!(self.writer, "{}", line).map_err(to_output_error)?;
        }
        self.writer.flush().map_err(to_output_error)
    }
}

/// Emits each contract line as an `info` tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPrinter;

impl ContractPrinter for TracingPrinter {
    fn print_contract(&mut self, contract: &Contract) -> RentalResult<()> {
        for line in contract.lines() {
            info!(tool_code = %contract.tool.code, "{}", line);
        }
        Ok(())
    }
}
