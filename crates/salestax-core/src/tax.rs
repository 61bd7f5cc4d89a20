//! # Tax Classifier & Calculator
//!
//! Decides exemption by description keyword and computes the tax owed on
//! ONE unit of a purchased item.
//!
//! ## Tax Components
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit tax = import duty + basic sales tax                               │
//! │                                                                         │
//! │  import duty     : Imported only   round_up(price × 5%,  0.05)          │
//! │  basic sales tax : not exempt only round_up(price × 10%, 0.05)          │
//! │                                                                         │
//! │  Exempt = lowercased description contains "book", "chocolate", "pill"   │
//! │  (substring match: "box of chocolates", "headache pills")               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each component is rounded on its own before the two are added. Quantity is
//! applied later by the invoice (`PricedLine`), never here.

use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{PurchasedItem, TaxRate};
use crate::validation::{
    validate_description, validate_not_empty, validate_rounding_step, validate_tax_rate_bps,
    ValidationResult,
};

/// Basic sales tax: 10%.
pub const BASIC_SALES_TAX: TaxRate = TaxRate::from_bps(1000);

/// Import duty: 5%.
pub const IMPORT_DUTY: TaxRate = TaxRate::from_bps(500);

/// Every tax component is rounded up to a multiple of 5 cents.
pub const ROUNDING_STEP_CENTS: i64 = 5;

/// Category keywords exempt from basic sales tax (books, food, medical).
pub const DEFAULT_EXEMPT_KEYWORDS: [&str; 3] = ["book", "chocolate", "pill"];

// =============================================================================
// Tax Rules
// =============================================================================

/// The jurisdiction's tax schedule.
///
/// Built once at startup and passed by reference to whatever needs it.
/// Tests can build alternate rule sets with [`TaxRules::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxRules {
    exempt_keywords: Vec<String>,
    basic_rate: TaxRate,
    import_rate: TaxRate,
    rounding_step: Money,
}

impl TaxRules {
    /// Creates a validated rule set. Keywords are stored lowercased.
    ///
    /// ## Errors
    /// - a keyword is blank or the keyword list is empty
    /// - a rate is above 100%
    /// - the rounding step is not positive
    pub fn new<I, S>(
        exempt_keywords: I,
        basic_rate: TaxRate,
        import_rate: TaxRate,
        rounding_step: Money,
    ) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exempt_keywords = exempt_keywords
            .into_iter()
            .map(|keyword| {
                let keyword = keyword.as_ref().trim();
                if keyword.is_empty() {
                    return Err(ValidationError::Required {
                        field: "exempt_keyword".to_string(),
                    });
                }
                Ok(keyword.to_lowercase())
            })
            .collect::<ValidationResult<Vec<_>>>()?;

        validate_not_empty(exempt_keywords.len(), "exempt_keywords")?;
        validate_tax_rate_bps(basic_rate.bps())?;
        validate_tax_rate_bps(import_rate.bps())?;
        validate_rounding_step(rounding_step)?;

        Ok(TaxRules {
            exempt_keywords,
            basic_rate,
            import_rate,
            rounding_step,
        })
    }

    pub fn exempt_keywords(&self) -> &[String] {
        &self.exempt_keywords
    }

    pub fn basic_rate(&self) -> TaxRate {
        self.basic_rate
    }

    pub fn import_rate(&self) -> TaxRate {
        self.import_rate
    }

    pub fn rounding_step(&self) -> Money {
        self.rounding_step
    }

    /// Checks whether an item is exempt from basic sales tax.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{Money, Origin, PurchasedItem, TaxRules};
    ///
    /// let rules = TaxRules::default();
    /// let item =
    ///     PurchasedItem::new(Origin::Local, "BOX of Chocolates", Money::zero(), 1).unwrap();
    /// assert!(rules.is_exempt(&item).unwrap());
    /// ```
    pub fn is_exempt(&self, item: &PurchasedItem) -> CoreResult<bool> {
        self.is_exempt_description(item.description())
    }

    /// Classifies a bare description.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` if the description is empty, since there
    /// is no text to match against.
    pub fn is_exempt_description(&self, description: &str) -> CoreResult<bool> {
        validate_description(description)?;

        let description = description.to_lowercase();
        Ok(self
            .exempt_keywords
            .iter()
            .any(|keyword| description.contains(keyword.as_str())))
    }

    /// Computes both tax components for one unit of `item`.
    pub fn breakdown(&self, item: &PurchasedItem) -> CoreResult<TaxBreakdown> {
        let price = item.unit_price();

        let import_duty = if item.is_imported() {
            price.apply_rate(self.import_rate).round_up_to(self.rounding_step)?
        } else {
            Money::zero()
        };

        let basic_tax = if self.is_exempt(item)? {
            Money::zero()
        } else {
            price.apply_rate(self.basic_rate).round_up_to(self.rounding_step)?
        };

        Ok(TaxBreakdown {
            import_duty,
            basic_tax,
        })
    }

    /// Computes the tax owed on one unit of `item`.
    ///
    /// ## Example
    /// ```rust
    /// use salestax_core::{Money, Origin, PurchasedItem, TaxRules};
    ///
    /// let rules = TaxRules::default();
    /// let price = Money::from_cents(4750);
    /// let perfume = PurchasedItem::new(Origin::Imported, "bottle of perfume", price, 2).unwrap();
    ///
    /// // 2.40 import duty + 4.75 basic tax, per unit
    /// assert_eq!(rules.calculate_tax(&perfume).unwrap(), Money::from_cents(715));
    /// ```
    pub fn calculate_tax(&self, item: &PurchasedItem) -> CoreResult<Money> {
        Ok(self.breakdown(item)?.total())
    }
}

impl Default for TaxRules {
    /// 10% basic tax, 5% import duty, 0.05 rounding, books/food/medical exempt.
    fn default() -> Self {
        TaxRules {
            exempt_keywords: DEFAULT_EXEMPT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            basic_rate: BASIC_SALES_TAX,
            import_rate: IMPORT_DUTY,
            rounding_step: Money::from_cents(ROUNDING_STEP_CENTS),
        }
    }
}

// =============================================================================
// Tax Breakdown
// =============================================================================

/// Per-unit tax split into its two independently rounded components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub import_duty: Money,
    pub basic_tax: Money,
}

impl TaxBreakdown {
    #[inline]
    pub fn total(&self) -> Money {
        self.import_duty + self.basic_tax
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
