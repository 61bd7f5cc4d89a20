//! # Invoice Builder
//!
//! Prices every purchased item of an order and aggregates the order totals.
//!
//! ## Invoice Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Construction                                 │
//! │                                                                         │
//! │  Vec<PurchasedItem> ──► Invoice::build(items, &rules)                   │
//! │                              │                                          │
//! │                              ├── empty? → InvalidArgument               │
//! │                              ├── total overflows? → InvalidArgument     │
//! │                              │                                          │
//! │                              ▼  (input order preserved)                 │
//! │                    unit_tax = rules.calculate_tax(item)                 │
//! │                    tax      = unit_tax × quantity                       │
//! │                    total    = unit_price × quantity + tax               │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                 Invoice { lines: Vec<PricedLine> }                      │
//! │                              │                                          │
//! │              total_tax() ────┴──── total_amount()                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::CoreResult;
use crate::money::Money;
use crate::tax::TaxRules;
use crate::types::PurchasedItem;
use crate::validation::{validate_amount, validate_not_empty};

// =============================================================================
// Priced Line
// =============================================================================

/// A purchased item together with the tax computed for it.
///
/// ## Invariants
/// - `tax_amount = unit_tax × quantity`
/// - `total_amount = unit_price × quantity + tax_amount`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedLine {
    item: PurchasedItem,
    unit_tax: Money,
}

impl PricedLine {
    /// Attaches a per-unit tax to an item.
    pub fn new(item: PurchasedItem, unit_tax: Money) -> Self {
        PricedLine { item, unit_tax }
    }

    #[inline]
    pub fn item(&self) -> &PurchasedItem {
        &self.item
    }

    #[inline]
    pub fn unit_tax(&self) -> Money {
        self.unit_tax
    }

    /// Tax for the whole line.
    #[inline]
    pub fn tax_amount(&self) -> Money {
        self.unit_tax.multiply_quantity(self.item.quantity())
    }

    /// Line total including tax.
    #[inline]
    pub fn total_amount(&self) -> Money {
        self.item.amount() + self.tax_amount()
    }

    /// Line total, `None` if the tax or the total does not fit in [`Money`].
    pub fn checked_total_amount(&self) -> Option<Money> {
        self.unit_tax
            .checked_multiply_quantity(self.item.quantity())?
            .checked_add(self.item.amount())
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A priced order: one [`PricedLine`] per purchased item, in input order.
///
/// Never empty. Built only through [`Invoice::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    lines: Vec<PricedLine>,
}

impl Invoice {
    /// Prices every item with `rules`.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` if `items` is empty, or if a line total
    /// or the order total does not fit in [`Money`].
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{Invoice, ItemLineParser, Money, TaxRules};
    ///
    /// let items = ItemLineParser::new()
    ///     .parse_all(["1 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"])
    ///     .unwrap();
    /// let invoice = Invoice::build(items, &TaxRules::default()).unwrap();
    ///
    /// assert_eq!(invoice.total_tax(), Money::from_cents(150));
    /// assert_eq!(invoice.total_amount(), Money::from_cents(2983));
    /// ```
    pub fn build(items: Vec<PurchasedItem>, rules: &TaxRules) -> CoreResult<Self> {
        validate_not_empty(items.len(), "items")?;

        let lines = items
            .into_iter()
            .map(|item| {
                let unit_tax = rules.calculate_tax(&item)?;
                Ok(PricedLine::new(item, unit_tax))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        // Every other sum is bounded by the grand total
        lines.iter().try_fold(Money::zero(), |total, line| {
            let line_total = line.checked_total_amount();
            validate_amount(line_total.and_then(|t| total.checked_add(t)), "total_amount")
        })?;

        let invoice = Invoice { lines };
        debug!(
            lines = invoice.len(),
            total_tax = %invoice.total_tax(),
            total = %invoice.total_amount(),
            "Invoice built"
        );

        Ok(invoice)
    }

    /// Priced lines in input order.
    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    /// Number of lines (always at least 1).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the invoice has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of pre-tax line amounts.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.item().amount()).sum()
    }

    /// Sum of every line's tax ("Sales Taxes").
    pub fn total_tax(&self) -> Money {
        self.lines.iter().map(PricedLine::tax_amount).sum()
    }

    /// Sum of every line's total including tax ("Total").
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(PricedLine::total_amount).sum()
    }
}

/// Serialized as its lines plus the computed totals.
impl Serialize for Invoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct InvoiceView<'a> {
            lines: &'a [PricedLine],
            subtotal: Money,
            total_tax: Money,
            total_amount: Money,
        }

        InvoiceView {
            lines: &self.lines,
            subtotal: self.subtotal(),
            total_tax: self.total_tax(),
            total_amount: self.total_amount(),
        }
        .serialize(serializer)
    }
}

// =============================================================================
// Free-function API
// =============================================================================

/// Same as [`Invoice::build`].
pub fn build_invoice(items: Vec<PurchasedItem>, rules: &TaxRules) -> CoreResult<Invoice> {
    Invoice::build(items, rules)
}

/// Same as [`Invoice::total_tax`].
pub fn total_tax(invoice: &Invoice) -> Money {
    invoice.total_tax()
}

/// Same as [`Invoice::total_amount`].
pub fn total_amount(invoice: &Invoice) -> Money {
    invoice.total_amount()
}

// =============================================================================
// Unit Tests
// =============================================================================
