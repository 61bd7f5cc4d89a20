//! Order sources: the built-in sample orders or an orders file.
//!
//! ## File Format
//! ```text
//! # first order
//! 1 book at 12.49
//! 1 music CD at 14.99
//!
//! # second order
//! 1 imported box of chocolates at 10.00
//! ```
//! Orders are separated by blank lines; `#` starts a comment line.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::CliError;

/// One order as typed by the clerk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// 1-based position, used in `Input N:` / `Output N:` headers
    pub number: usize,
    pub lines: Vec<String>,
}

/// The three reference orders.
pub fn sample_orders() -> Vec<Order> {
    let samples: [&[&str]; 3] = [
        &["1 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"],
        &[
            "1 imported box of chocolates at 10.00",
            "1 imported bottle of perfume at 47.50",
        ],
        &[
            "1 imported bottle of perfume at 27.99",
            "1 bottle of perfume at 18.99",
            "1 packet of headache pills at 9.75",
            "1 box of imported chocolates at 11.25",
        ],
    ];

    samples
        .iter()
        .enumerate()
        .map(|(i, lines)| Order {
            number: i + 1,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        })
        .collect()
}

/// Reads orders from a file.
pub fn load_orders(path: &Path) -> Result<Vec<Order>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadOrders {
        path: path.to_path_buf(),
        source,
    })?;

    let orders = parse_orders(&text);
    if orders.is_empty() {
        return Err(CliError::NoOrders(path.to_path_buf()));
    }

    info!(path = %path.display(), orders = orders.len(), "Orders loaded");
    Ok(orders)
}

/// Splits file text into orders.
pub fn parse_orders(text: &str) -> Vec<Order> {
    let mut orders = Vec::new();
    let mut current: Vec<String> = Vec::new();

    let flush = |current: &mut Vec<String>, orders: &mut Vec<Order>| {
        if !current.is_empty() {
            orders.push(Order {
                number: orders.len() + 1,
                lines: std::mem::take(current),
            });
        }
    };

    for raw in text.lines() {
        let line = raw.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            flush(&mut current, &mut orders);
        } else {
            current.push(line.to_string());
        }
    }
    flush(&mut current, &mut orders);

    orders
}
