//! # Domain Types
//!
//! Core domain types used throughout SalesTax.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ PurchasedItem   │   │    Origin       │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  origin         │   │  Local          │   │  bps (u32)      │       │
//! │  │  description    │   │  Imported       │   │  1000 = 10%     │       │
//! │  │  unit_price     │   └─────────────────┘   └─────────────────┘       │
//! │  │  quantity       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{
    validate_amount, validate_description, validate_quantity, validate_unit_price,
    ValidationResult,
};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (import duty), 1000 bps = 10% (basic sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact decimal fraction (1000 bps → 0.1000).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Origin
// =============================================================================

/// Where a purchased item comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Domestic goods: basic sales tax only.
    #[default]
    Local,
    /// Imported goods: import duty on top, no exemptions.
    Imported,
}

// =============================================================================
// Purchased Item
// =============================================================================

/// One purchased line as read from the order: `2 imported bottles of perfume at 47.50`.
///
/// ## Invariants
/// - `quantity >= 1`
/// - `unit_price >= 0`
/// - `description` is non-empty after trimming
/// - `unit_price × quantity` fits in [`Money`]
///
/// Fields are private so every value goes through [`PurchasedItem::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchasedItem {
    origin: Origin,
    description: String,
    unit_price: Money,
    quantity: u32,
}

impl PurchasedItem {
    /// Creates a validated item. The description is stored trimmed.
    ///
    /// ```rust
    /// use salestax_core::{Money, Origin, PurchasedItem};
    ///
    /// let item = PurchasedItem::new(Origin::Local, " book ", Money::from_cents(1249), 1).unwrap();
    /// assert_eq!(item.description(), "book");
    ///
    /// assert!(PurchasedItem::new(Origin::Local, "book", Money::from_cents(1249), 0).is_err());
    /// ```
    pub fn new(
        origin: Origin,
        description: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> ValidationResult<Self> {
        let description = description.into();
        let description = description.trim();

        validate_description(description)?;
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;
        validate_amount(unit_price.checked_multiply_quantity(quantity), "amount")?;

        Ok(PurchasedItem {
            origin,
            description: description.to_string(),
            unit_price,
            quantity,
        })
    }

    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn is_imported(&self) -> bool {
        self.origin == Origin::Imported
    }

    /// Pre-tax amount for the whole line (unit price × quantity).
    #[inline]
    pub fn amount(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Description as printed on a receipt: `imported ` prefix for imports.
    pub fn display_description(&self) -> String {
        match self.origin {
            Origin::Imported => format!("imported {}", self.description),
            Origin::Local => self.description.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
