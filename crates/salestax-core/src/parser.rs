//! # Item Line Parser
//!
//! Turns one free-text order line into a [`PurchasedItem`].
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <quantity> [imported] <description> at <price>     (case-insensitive)  │
//! │                                                                         │
//! │    "2 imported bottles of perfume at 47.50"                             │
//! │     │  │        │                     │                                 │
//! │     │  │        │                     └── price: 47 or 47.50            │
//! │     │  │        └── description: non-greedy, needs a visible character  │
//! │     │  └── origin flag: whole word, may sit anywhere in the description │
//! │     └── quantity: whole number ≥ 1 ("1.5" does not match)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes
//! | Input                        | Result                          |
//! |------------------------------|---------------------------------|
//! | `""`                         | `Err(InvalidArgument)`          |
//! | `"1 book 12.49"`             | `Ok(None)`, no `at` keyword     |
//! | `"1 book at 12.49 each"`     | `Ok(None)`, price must end line |
//! | `"2 books at <Decimal::MAX>"`| `Ok(None)`, amount overflows    |
//! | `"1 book at 12.49"`          | `Ok(Some(item))`                |

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Origin, PurchasedItem};
use crate::validation::validate_input_line;

/// Token that flags an item as imported.
pub const IMPORTED_TOKEN: &str = "imported";

static ITEM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^\s*(?P<quantity>[0-9]+)\s+",
        r"(?P<description>.*?\S.*?)",
        r"\s+at\s+(?P<price>[0-9]+(?:\.[0-9]+)?)\s*$",
    ))
    .expect("item line pattern is a valid regex")
});

/// Parser for `<quantity> [imported] <description> at <price>` lines.
///
/// Stateless; one instance can be shared across any number of orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemLineParser;

impl ItemLineParser {
    pub fn new() -> Self {
        ItemLineParser
    }

    /// Parses one line.
    ///
    /// ## Returns
    /// - `Ok(Some(item))` when the line follows the grammar
    /// - `Ok(None)` when it does not (missing `at`, missing price,
    ///   fractional or zero quantity, empty description, text after the
    ///   price, a price or line amount too large to hold exactly)
    /// - `Err(CoreError::InvalidArgument)` for an empty line
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{ItemLineParser, Origin};
    ///
    /// let parser = ItemLineParser::new();
    /// let item = parser.parse("1 box of imported chocolates at 11.25").unwrap().unwrap();
    /// assert_eq!(item.origin(), Origin::Imported);
    /// assert_eq!(item.description(), "box of chocolates");
    ///
    /// assert!(parser.parse("1.5 books at 12.49").unwrap().is_none());
    /// assert!(parser.parse("").is_err());
    /// ```
    pub fn parse(&self, line: &str) -> CoreResult<Option<PurchasedItem>> {
        validate_input_line(line)?;

        let Some(caps) = ITEM_LINE.captures(line) else {
            debug!(line, "line does not match item grammar");
            return Ok(None);
        };

        let Ok(quantity) = caps["quantity"].parse::<u32>() else {
            debug!(line, "quantity out of range");
            return Ok(None);
        };

        let Ok(unit_price) = caps["price"].parse::<Money>() else {
            debug!(line, "price out of range");
            return Ok(None);
        };

        let (origin, description) = split_origin(caps["description"].trim());

        match PurchasedItem::new(origin, description, unit_price, quantity) {
            Ok(item) => Ok(Some(item)),
            Err(reason) => {
                debug!(line, %reason, "line matches grammar but not item invariants");
                Ok(None)
            }
        }
    }

    /// Parses every line of an order.
    ///
    /// The whole batch fails on the first line that does not match, so a
    /// caller assembling an order never gets a partial item list.
    ///
    /// ## Errors
    /// - `CoreError::InvalidArgument` if a line is empty
    /// - `CoreError::UnparsableLine` with the zero-based index of the
    ///   offending line
    pub fn parse_all<I, S>(&self, lines: I) -> CoreResult<Vec<PurchasedItem>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.as_ref();
                self.parse(line)?.ok_or_else(|| CoreError::UnparsableLine {
                    index,
                    line: line.to_string(),
                })
            })
            .collect()
    }
}

/// Pulls the `imported` token out of a description.
///
/// Returns the description unchanged (already trimmed) when the token is absent.
fn split_origin(description: &str) -> (Origin, String) {
    let is_flag = |word: &str| word.eq_ignore_ascii_case(IMPORTED_TOKEN);

    if !description.split_whitespace().any(is_flag) {
        return (Origin::Local, description.to_string());
    }

    let remaining = description
        .split_whitespace()
        .filter(|word| !is_flag(word))
        .collect::<Vec<_>>()
        .join(" ");

    (Origin::Imported, remaining)
}

// =============================================================================
// Unit Tests
// =============================================================================
