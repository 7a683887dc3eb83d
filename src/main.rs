//! Tool rental command line.
//!
//! ```sh
//! # Print a contract
//! tool-rental checkout LADW 3 10 7/2/20
//!
//! # Same, as JSON
//! tool-rental checkout LADW 3 10 7/2/20 --json
//!
//! # List the rentable tools
//! tool-rental tools
//!
//! # Serve POST /checkout
//! tool-rental --catalog /etc/tool-rental serve --addr 0.0.0.0:8080
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tool_rental::api::{AppState, CheckoutResponse, create_router};
use tool_rental::checkout::{Checkout, CheckoutRequest, WriterPrinter};
use tool_rental::config::{ConfigLoader, DEFAULT_CATALOG_DIR, PolicyCatalog};
use tool_rental::error::RentalError;
use tool_rental::models::format_currency;

/// Tool rental checkout.
#[derive(Parser, Debug)]
#[command(name = "tool-rental", version, about = "Tool rental checkout engine")]
struct Cli {
    /// Directory holding tools.yaml and policies.yaml.
    #[arg(long, env = "TOOL_RENTAL_CATALOG", default_value = DEFAULT_CATALOG_DIR)]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check out a tool and print the rental agreement.
    #[command(allow_negative_numbers = true)]
    Checkout {
        /// Catalog code of the tool, e.g. LADW.
        tool_code: String,
        /// Number of rental days.
        rental_days: i64,
        /// Discount percentage, 0 to 100.
        discount: i64,
        /// Checkout date as M/D/YY.
        checkout_date: String,
        /// Print the contract as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the rentable tools and their daily charges.
    Tools,
    /// Serve the checkout API over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            match err.downcast_ref::<RentalError>() {
                Some(rental_error) if rental_error.is_input_error() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ConfigLoader::load(&cli.catalog)?.into_catalog();

    match cli.command {
        Command::Checkout {
            tool_code,
            rental_days,
            discount,
            checkout_date,
            json,
        } => {
            let request = CheckoutRequest::new(tool_code, rental_days, discount, checkout_date);
            let checkout = Checkout::from_catalog(&catalog);
            if json {
                let contract = checkout.checkout(&request)?;
                let lines = contract.lines();
                let body = serde_json::to_string_pretty(&CheckoutResponse { contract, lines })
                    .map_err(|e| RentalError::OutputError {
                        message: e.to_string(),
                    })?;
                println!("{}", body);
            } else {
                checkout.checkout_and_print(&request, &mut WriterPrinter::stdout())?;
            }
        }
        Command::Tools => {
            for tool in catalog.tools() {
                let rate = catalog
                    .policy_for_type(&tool.tool_type)
                    .map(|policy| format_currency(policy.daily_rate))
                    .unwrap_or_else(|| "no policy".to_string());
                println!("{:<6} {:<12} {:<10} {}", tool.code, tool.tool_type, tool.brand, rate);
            }
        }
        Command::Serve { addr } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(async {
                let listener = tokio::net::TcpListener::bind(addr).await?;
                info!(addr = %addr, "Listening for checkout requests");
                axum::serve(listener, create_router(AppState::new(catalog))).await
            })?;
        }
    }

    Ok(())
}
