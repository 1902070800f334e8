//! Discount Codes

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors surfaced while resolving a promo code input.
///
/// The `Display` text of each variant is the exact message shown to the
/// user next to the code input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountCodeError {
    /// The input was empty or whitespace-only.
    #[error("Please enter a discount code")]
    EmptyCode,

    /// The input did not match any code in the catalog.
    #[error("Invalid discount code")]
    InvalidCode,
}

/// Errors from discount amount computation.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// The percentage calculation overflowed or was not representable.
    #[error("discount amount overflowed or was not representable")]
    AmountOverflow,
}

/// A promo code entry in the fixed catalog of valid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountCode {
    /// Uppercase code string as entered by the user.
    pub code: &'static str,

    /// Whole-number percentage off the subtotal.
    pub percentage: u8,

    /// Human-readable description of the offer.
    pub description: &'static str,
}

/// The fixed catalog of valid promo codes.
pub static DISCOUNT_CODES: [DiscountCode; 4] = [
    DiscountCode {
        code: "SAVE10",
        percentage: 10,
        description: "10% off your order",
    },
    DiscountCode {
        code: "WELCOME20",
        percentage: 20,
        description: "20% off for new customers",
    },
    DiscountCode {
        code: "CYBERCY15",
        percentage: 15,
        description: "15% off Cybercy special",
    },
    DiscountCode {
        code: "TECH25",
        percentage: 25,
        description: "25% off tech items",
    },
];

/// Resolve free-text input against the code catalog.
///
/// Input is trimmed and matched case-insensitively.
///
/// # Errors
///
/// - [`DiscountCodeError::EmptyCode`]: the trimmed input was empty.
/// - [`DiscountCodeError::InvalidCode`]: no catalog entry matched.
pub fn resolve_code(input: &str) -> Result<&'static DiscountCode, DiscountCodeError> {
    let normalized = input.trim().to_uppercase();

    if normalized.is_empty() {
        return Err(DiscountCodeError::EmptyCode);
    }

    DISCOUNT_CODES
        .iter()
        .find(|entry| entry.code == normalized)
        .ok_or(DiscountCodeError::InvalidCode)
}

/// The single currently-active promo code result.
///
/// Only the code (and its percentage) is stored; the absolute amount is
/// always recomputed from the live subtotal, so it can never go stale when
/// the cart changes after application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDiscount {
    code: &'static DiscountCode,
}

impl AppliedDiscount {
    /// Wrap a resolved catalog entry as the active discount.
    pub fn new(code: &'static DiscountCode) -> Self {
        AppliedDiscount { code }
    }

    /// The applied code string.
    pub fn code(&self) -> &'static str {
        self.code.code
    }

    /// Percentage off the subtotal.
    pub fn percentage(&self) -> u8 {
        self.code.percentage
    }

    /// Offer description for display.
    pub fn description(&self) -> &'static str {
        self.code.description
    }

    /// Compute the discount amount against the given subtotal.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::AmountOverflow`] if the percentage maths
    /// cannot be represented in minor units.
    pub fn amount_off(
        &self,
        subtotal: Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, DiscountError> {
        let minor = percent_of_minor(self.code.percentage, subtotal.to_minor_units())?;

        Ok(Money::from_minor(minor, subtotal.currency()))
    }
}

/// Calculate `percentage`% of a minor-unit amount, rounding half away from zero.
fn percent_of_minor(percentage: u8, minor: i64) -> Result<i64, DiscountError> {
    let percent = Decimal::from(percentage)
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(DiscountError::AmountOverflow)?;

    let applied = percent
        .checked_mul(Decimal::from(minor))
        .ok_or(DiscountError::AmountOverflow)?;

    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn resolve_code_is_case_insensitive_and_trims() -> TestResult {
        let code = resolve_code("  save10  ")?;

        assert_eq!(code.code, "SAVE10");
        assert_eq!(code.percentage, 10);

        Ok(())
    }

    #[test]
    fn resolve_code_rejects_empty_input() {
        assert_eq!(resolve_code("   "), Err(DiscountCodeError::EmptyCode));
    }

    #[test]
    fn resolve_code_rejects_unknown_code() {
        assert_eq!(resolve_code("NOPE99"), Err(DiscountCodeError::InvalidCode));
    }

    #[test]
    fn resolve_code_error_messages_match_ui_text() {
        assert_eq!(
            DiscountCodeError::EmptyCode.to_string(),
            "Please enter a discount code"
        );
        assert_eq!(
            DiscountCodeError::InvalidCode.to_string(),
            "Invalid discount code"
        );
    }

    #[test]
    fn catalog_covers_all_four_offers() {
        let percentages: Vec<u8> = DISCOUNT_CODES.iter().map(|entry| entry.percentage).collect();

        assert_eq!(percentages, vec![10, 20, 15, 25]);
    }

    #[test]
    fn amount_off_is_derived_from_the_given_subtotal() -> TestResult {
        let discount = AppliedDiscount::new(resolve_code("SAVE10")?);

        // 10% of $250.00 is $25.00.
        let amount = discount.amount_off(Money::from_minor(25_000, USD))?;
        assert_eq!(amount, Money::from_minor(2500, USD));

        // Recomputing against a changed subtotal tracks the live value.
        let amount = discount.amount_off(Money::from_minor(30_000, USD))?;
        assert_eq!(amount, Money::from_minor(3000, USD));

        Ok(())
    }

    #[test]
    fn percent_of_minor_rounds_midpoints_away_from_zero() -> TestResult {
        // 10% of 5 minor units is 0.5, which rounds to 1.
        assert_eq!(percent_of_minor(10, 5)?, 1);

        // 15% of 9 minor units is 1.35, which rounds to 1.
        assert_eq!(percent_of_minor(15, 9)?, 1);

        Ok(())
    }

    #[test]
    fn percent_of_minor_zero_subtotal_is_zero() -> TestResult {
        assert_eq!(percent_of_minor(25, 0)?, 0);

        Ok(())
    }
}
