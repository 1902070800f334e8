//! Order Summary

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::Catalog,
    discounts::{AppliedDiscount, DiscountError},
    products::ProductId,
};

/// Flat shipping fee in minor units, waived exactly when a discount is applied.
pub const SHIPPING_FEE_MINOR: i64 = 1000;

/// Errors that can occur while computing an order summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A cart line references a product missing from the catalog.
    #[error("Cart line references unknown product {0}")]
    UnknownProduct(ProductId),

    /// A line total exceeded the representable range.
    #[error("Line total for product {0} overflowed")]
    LineOverflow(ProductId),

    /// Wrapped discount computation error.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Derived totals for the active cart.
///
/// Never cached: recomputed from the cart lines and the applied discount on
/// every render, so no field can go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    subtotal: Money<'static, Currency>,
    shipping: Money<'static, Currency>,
    discount: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl OrderSummary {
    /// Compute totals over the cart, resolving prices from the catalog.
    ///
    /// Shipping is the flat fee when no discount is applied and zero when
    /// one is (a binary waiver, not proportional to the discount size). The
    /// identity `total == subtotal + shipping - discount` holds exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if a line references an unknown product
    /// or any monetary computation fails.
    pub fn compute(
        cart: &Cart,
        catalog: &Catalog,
        applied: Option<&AppliedDiscount>,
    ) -> Result<Self, SummaryError> {
        let currency = catalog.currency();

        let mut subtotal = Money::from_minor(0, currency);

        for line in cart.lines() {
            let product = catalog
                .get(line.product_id)
                .ok_or(SummaryError::UnknownProduct(line.product_id))?;

            let line_minor = product
                .price
                .to_minor_units()
                .checked_mul(i64::from(line.quantity))
                .ok_or(SummaryError::LineOverflow(line.product_id))?;

            subtotal = subtotal.add(Money::from_minor(line_minor, currency))?;
        }

        let shipping = if applied.is_some() {
            Money::from_minor(0, currency)
        } else {
            Money::from_minor(SHIPPING_FEE_MINOR, currency)
        };

        let discount = match applied {
            Some(discount) => discount.amount_off(subtotal)?,
            None => Money::from_minor(0, currency),
        };

        let total = subtotal.add(shipping)?.sub(discount)?;

        Ok(OrderSummary {
            subtotal,
            shipping,
            discount,
            total,
        })
    }

    /// Sum of line price × quantity before shipping and discount.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Shipping fee after the waiver rule.
    pub fn shipping(&self) -> Money<'static, Currency> {
        self.shipping
    }

    /// Absolute discount amount against the current subtotal.
    pub fn discount(&self) -> Money<'static, Currency> {
        self.discount
    }

    /// Amount payable.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Whether the shipping fee was waived.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.to_minor_units() == 0
    }
}
