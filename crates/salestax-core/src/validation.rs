//! # Validation Module
//!
//! Input validation utilities for SalesTax.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: receipt-cli                                                  │
//! │  └── Config values (output mode, separator)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Parser                                                       │
//! │  ├── Empty line → InvalidArgument                                      │
//! │  └── Grammar mismatch → None (not an error)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── PurchasedItem invariants                                          │
//! │  └── TaxRules / Invoice preconditions                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a rate: 10000 bps = 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a raw input line handed to the parser.
///
/// Only the empty string is rejected here; whitespace-only lines reach the
/// grammar and simply do not match.
pub fn validate_input_line(line: &str) -> ValidationResult<()> {
    if line.is_empty() {
        return Err(ValidationError::Required {
            field: "line".to_string(),
        });
    }

    Ok(())
}

/// Validates an item description.
///
/// ## Example
/// ```rust
/// use salestax_core::validation::validate_description;
///
/// assert!(validate_description("box of chocolates").is_ok());
/// assert!(validate_description("").is_err());
/// assert!(validate_description("  ").is_err());
/// ```
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value (must be at least 1).
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// Zero is allowed (free items), negative amounts are not.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
            max: "unbounded".to_string(),
        });
    }

    Ok(())
}

/// Validates that a computed amount fits in `Money`.
///
/// Takes the result of a `checked_*` operation on [`Money`].
pub fn validate_amount(amount: Option<Money>, field: &str) -> ValidationResult<Money> {
    amount.ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
        min: "0".to_string(),
        max: Decimal::MAX.to_string(),
    })
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: "0".to_string(),
            max: MAX_TAX_RATE_BPS.to_string(),
        });
    }

    Ok(())
}

/// Validates the step used by round-up rounding.
pub fn validate_rounding_step(step: Money) -> ValidationResult<()> {
    if !step.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "rounding_step".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a collection holds at least one element.
pub fn validate_not_empty(len: usize, field: &str) -> ValidationResult<()> {
    if len == 0 {
        return Err(ValidationError::EmptyCollection {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_line() {
        assert!(validate_input_line("1 book at 12.49").is_ok());
        assert!(validate_input_line("   ").is_ok());
        assert!(validate_input_line("").is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("music CD").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("\t").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(1249)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(
            validate_amount(Some(Money::from_cents(5)), "amount").unwrap(),
            Money::from_cents(5)
        );
        assert!(matches!(
            validate_amount(max.checked_multiply_quantity(2), "amount").unwrap_err(),
            ValidationError::OutOfRange { field, .. } if field == "amount"
        ));
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1000).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_rounding_step() {
        assert!(validate_rounding_step(Money::from_cents(5)).is_ok());
        assert!(validate_rounding_step(Money::zero()).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty(1, "items").is_ok());
        assert_eq!(
            validate_not_empty(0, "items").unwrap_err(),
            ValidationError::EmptyCollection {
                field: "items".to_string()
            }
        );
    }
}
