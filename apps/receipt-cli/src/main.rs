//! # SalesTax Receipt CLI
//!
//! Prints a taxed receipt for every order.
//!
//! ## Usage
//! ```bash
//! # the three sample orders
//! cargo run -p salestax-receipt
//!
//! # your own orders as JSON
//! SALESTAX_INPUT=orders.txt SALESTAX_OUTPUT=json cargo run -p salestax-receipt
//! ```
//!
//! Receipts go to stdout, logs to stderr (`RUST_LOG` controls the level).

mod config;
mod error;
mod orders;
mod output;

use std::io;

use salestax_core::{Invoice, ItemLineParser, TaxRules};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::orders::{load_orders, sample_orders, Order};

fn main() -> anyhow::Result<()> {
    init_tracing();
    run()?;
    Ok(())
}

/// Loads config and orders, then writes every receipt to stdout.
fn run() -> Result<(), CliError> {
    let config = CliConfig::load()?;
    info!(
        input = ?config.input,
        output = ?config.output,
        echo_input = config.echo_input,
        "Configuration loaded"
    );

    let orders = match &config.input {
        Some(path) => load_orders(path)?,
        None => sample_orders(),
    };

    let rules = TaxRules::default();
    let priced = price_orders(orders, &rules)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output {
        OutputFormat::Text => {
            output::write_text(&mut out, &priced, config.echo_input, &config.number_format)?
        }
        OutputFormat::Json => output::write_json(&mut out, &priced, &config.number_format)?,
    }

    Ok(())
}

/// Parses and prices every order; the first bad order stops the run.
pub(crate) fn price_orders(
    orders: Vec<Order>,
    rules: &TaxRules,
) -> Result<Vec<(Order, Invoice)>, CliError> {
    let parser = ItemLineParser::new();

    orders
        .into_iter()
        .map(|order| {
            let number = order.number;
            let invoice = parser
                .parse_all(&order.lines)
                .and_then(|items| Invoice::build(items, rules))
                .map_err(|source| CliError::Order { number, source })?;

            debug!(order = number, lines = invoice.len(), "Order priced");
            Ok((order, invoice))
        })
        .collect()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show parser mismatches and invoice totals
/// - Default: `warn,salestax_core=info,receipt=info`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,salestax_core=info,receipt=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use salestax_core::{CoreError, Money};

    #[test]
    fn test_price_sample_orders() {
        let priced = price_orders(sample_orders(), &TaxRules::default()).unwrap();
        let totals: Vec<_> = priced.iter().map(|(_, inv)| inv.total_amount()).collect();
        assert_eq!(
            totals,
            [Money::from_cents(2983), Money::from_cents(6515), Money::from_cents(7468)]
        );
    }

    #[test]
    fn test_bad_order_reports_its_number() {
        let orders = vec![
            Order {
                number: 1,
                lines: vec!["1 book at 12.49".to_string()],
            },
            Order {
                number: 2,
                lines: vec!["1 book 12.49".to_string()],
            },
        ];

        match price_orders(orders, &TaxRules::default()).unwrap_err() {
            CliError::Order { number, source } => {
                assert_eq!(number, 2);
                assert!(matches!(source, CoreError::UnparsableLine { index: 0, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
