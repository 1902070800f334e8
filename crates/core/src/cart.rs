//! Cart

use smallvec::SmallVec;

use crate::products::ProductId;

/// One product/quantity pair in the active cart. Quantity is always ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    /// Product referenced by this line.
    pub product_id: ProductId,

    /// Units of the product in the cart.
    pub quantity: u32,
}

/// The active shopping cart: ordered lines, at most one per product id.
///
/// Every operation is a total function; operations on a product id with no
/// line are no-ops rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add `quantity` units of a product, merging into an existing line.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product_id,
                quantity: quantity.max(1),
            });
        }
    }

    /// Set a line's quantity directly. The caller clamps; this layer does not.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Adjust a line's quantity by `delta`, clamped to a minimum of 1.
    ///
    /// Used by the +/- stepper controls: a line can never reach zero this
    /// way, only [`Cart::remove`] deletes a line.
    pub fn change_quantity_by(&mut self, product_id: ProductId, delta: i64) {
        if let Some(line) = self.line_mut(product_id) {
            let next = i64::from(line.quantity).saturating_add(delta).max(1);
            line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Delete the line for a product entirely, regardless of quantity.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Quantity currently in the cart for a product, if any.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// Total units across all lines (the nav badge count).
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line (after a completed checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_repeat_adds_into_one_line() {
        let mut cart = Cart::new();

        cart.add(ProductId(1), 1);
        cart.add(ProductId(1), 2);
        cart.add(ProductId(1), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId(1)), Some(6));
    }

    #[test]
    fn add_keeps_separate_lines_per_product() {
        let mut cart = Cart::new();

        cart.add(ProductId(1), 1);
        cart.add(ProductId(2), 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn change_quantity_by_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 3);

        cart.change_quantity_by(ProductId(1), -100);

        assert_eq!(cart.quantity_of(ProductId(1)), Some(1));
    }

    #[test]
    fn change_quantity_by_survives_extreme_deltas() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 1);

        cart.change_quantity_by(ProductId(1), i64::MAX);
        assert_eq!(cart.quantity_of(ProductId(1)), Some(u32::MAX));

        cart.change_quantity_by(ProductId(1), i64::MIN);
        assert_eq!(cart.quantity_of(ProductId(1)), Some(1));
    }

    #[test]
    fn change_quantity_by_unknown_product_is_noop() {
        let mut cart = Cart::new();

        cart.change_quantity_by(ProductId(9), 5);

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_deletes_the_line_regardless_of_quantity() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 7);

        cart.remove(ProductId(1));

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(ProductId(1)), None);
    }

    #[test]
    fn remove_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 1);

        cart.remove(ProductId(2));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_writes_through_without_clamping() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 1);

        cart.set_quantity(ProductId(1), 40);

        assert_eq!(cart.quantity_of(ProductId(1)), Some(40));
    }

    #[test]
    fn item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 2);
        cart.add(ProductId(2), 3);

        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(ProductId(1), 2);

        cart.clear();

        assert!(cart.is_empty());
    }
}
