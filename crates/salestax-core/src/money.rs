//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    14.99 × 0.10 = 1.4990000000000001  ❌                                 │
//! │    ceil(1.4990000000000001 / 0.05) = 30 (lucky)                        │
//! │    ceil(0.7000000000000001 / 0.05) = 15  ❌ should be 14               │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 decimal (rust_decimal)                          │
//! │    14.99 × 0.10 = 1.499 exactly                                        │
//! │    1.499 / 0.05 = 29.98 exactly → ceil → 30 → 1.50                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::money::Money;
//!
//! let price: Money = "14.99".parse().unwrap();
//! let doubled = price * 2;
//! assert_eq!(doubled, Money::from_cents(2998));
//!
//! // NEVER do this:
//! // let bad = Money::from_float(14.99); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;
use crate::validation::{validate_rounding_step, ValidationResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with exact base-10 fractional semantics.
///
/// ## Design Decisions
/// - **Decimal, not f64**: `0.1 + 0.2 == 0.3` holds
/// - **Single field tuple struct**: zero-cost wrapper, arithmetic stays explicit
/// - **Scale is free**: `47.5` and `47.50` compare equal
///
/// ## Where Money Flows
/// ```text
/// "… at 47.50" ──► PurchasedItem.unit_price ──► TaxRules::calculate_tax
///                                │                          │
///                                ▼                          ▼
///                        item.amount()  ──────►  PricedLine.total_amount
///                                                           │
///                                                           ▼
///                                                "Total: 54.65"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (two fractional digits).
    ///
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1249).to_string(), "12.49");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use salestax_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1499);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_cents(2998));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Multiplies by a quantity, `None` if the result does not fit.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, `None` if the result does not fit.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Applies a tax rate without any rounding.
    ///
    /// ```rust
    /// use salestax_core::money::Money;
    /// use salestax_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(2799);
    /// let raw = price.apply_rate(TaxRate::from_bps(500));
    /// assert_eq!(raw.amount().to_string(), "1.3995");
    /// ```
    pub fn apply_rate(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.as_fraction())
    }

    /// Rounds up to the nearest multiple of `step`.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  round_up_to(amount, step) = ceil(amount / step) × step            │
    /// │                                                                     │
    /// │    1.499  / 0.05 = 29.98  → 30 → 1.50                              │
    /// │    0.5625 / 0.05 = 11.25  → 12 → 0.60                              │
    /// │    2.40   / 0.05 = 48     → 48 → 2.40   (already a multiple)       │
    /// │                                                                     │
    /// │  Result is the smallest multiple of step that is ≥ amount.         │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Errors
    /// `step` must be positive.
    pub fn round_up_to(&self, step: Money) -> ValidationResult<Money> {
        validate_rounding_step(step)?;

        let steps = self
            .0
            .checked_div(step.0)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: Decimal::ZERO.to_string(),
                max: Decimal::MAX.to_string(),
            })?;

        Ok(Money(steps.ceil() * step.0))
    }

    /// Formats the amount with an explicit number format.
    ///
    /// Rounds half away from zero to `fraction_digits`, always prints exactly
    /// that many fractional digits and never groups thousands.
    ///
    /// ```rust
    /// use salestax_core::money::{Money, NumberFormat};
    ///
    /// let comma = NumberFormat { decimal_separator: ',', ..NumberFormat::default() };
    /// assert_eq!(Money::from_cents(123456).format(&comma), "1234,56");
    /// ```
    pub fn format(&self, format: &NumberFormat) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(format.fraction_digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(format.fraction_digits);

        let text = rounded.to_string();
        if format.decimal_separator == '.' {
            text
        } else {
            text.replacen('.', &format.decimal_separator.to_string(), 1)
        }
    }
}

// =============================================================================
// Number Format
// =============================================================================

/// Explicit number formatting for rendered amounts.
///
/// Passed to every renderer instead of relying on any process-wide locale.
/// The default is the invariant receipt format: `1234.56`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Digits printed after the separator.
    pub fraction_digits: u32,

    /// Character between the integer and fractional part.
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            fraction_digits: 2,
            decimal_separator: '.',
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for Money {
    type Err = ValidationError;

    /// Parses plain decimal text: digits with an optional fractional part.
    ///
    /// Signs, exponents, digit separators and leading/trailing dots are rejected,
    /// and so is text with more digits than `Decimal` holds exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        let all_digits =
            |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
            return Err(invalid("expected digits with an optional fractional part"));
        }

        Decimal::from_str_exact(s)
            .map(Money)
            .map_err(|e| invalid(&e.to_string()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Invariant two-decimal rendering (`12.49`), independent of host locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&NumberFormat::default()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
