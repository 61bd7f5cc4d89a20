//! # salestax-core: Pure Business Logic for SalesTax Receipts
//!
//! Parses free-text order lines, applies sales tax and import duty, and
//! builds the invoice a receipt is printed from. Zero I/O.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SalesTax Pipeline                                  │
//! │                                                                         │
//! │  "1 imported bottle of perfume at 47.50"                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌───────────┐   ┌───────────┐   ┌───────────┐   ┌───────────┐         │
//! │  │  parser   │──►│    tax    │──►│  invoice  │──►│  receipt  │         │
//! │  │ ItemLine  │   │ TaxRules  │   │  Invoice  │   │  render_* │         │
//! │  │  Parser   │   │           │   │ PricedLine│   │           │         │
//! │  └───────────┘   └───────────┘   └───────────┘   └───────────┘         │
//! │        │               │               │               │               │
//! │        └───────────────┴─── money / types / validation ┘               │
//! │                                                                         │
//! │   NO I/O • NO GLOBAL STATE • EXACT DECIMALS                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PurchasedItem, Origin, TaxRate)
//! - [`money`] - Exact decimal Money and NumberFormat
//! - [`error`] - Domain error types
//! - [`validation`] - Input contract checks
//! - [`parser`] - Item line grammar
//! - [`tax`] - Exemptions and tax calculation
//! - [`invoice`] - Priced lines and order totals
//! - [`receipt`] - Receipt text and JSON views
//!
//! ## Example Usage
//!
//! ```rust
//! use salestax_core::{render_receipt, Invoice, ItemLineParser, NumberFormat, TaxRules};
//!
//! let rules = TaxRules::default();
//! let items = ItemLineParser::new()
//!     .parse_all([
//!         "1 imported box of chocolates at 10.00",
//!         "1 imported bottle of perfume at 47.50",
//!     ])
//!     .unwrap();
//!
//! let invoice = Invoice::build(items, &rules).unwrap();
//! let receipt = render_receipt(&invoice, &NumberFormat::default());
//!
//! assert_eq!(receipt.last().unwrap(), "Total: 65.15");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoice;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{build_invoice, total_amount, total_tax, Invoice, PricedLine};
pub use money::{Money, NumberFormat};
pub use parser::ItemLineParser;
pub use receipt::{render_line, render_receipt, ReceiptLine, ReceiptSummary};
pub use tax::{TaxBreakdown, TaxRules};
pub use types::*;
