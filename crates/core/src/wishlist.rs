//! Wishlist

use std::collections::BTreeSet;

use crate::products::ProductId;

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    /// The id was absent and has been added.
    Added,

    /// The id was present and has been removed.
    Removed,
}

/// User-toggled set of saved product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Toggle membership for a product id.
    pub fn toggle(&mut self, id: ProductId) -> WishlistChange {
        if self.ids.remove(&id) {
            WishlistChange::Removed
        } else {
            self.ids.insert(id);
            WishlistChange::Added
        }
    }

    /// Whether the id is currently wishlisted.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Wishlisted ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of wishlisted ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();

        assert_eq!(wishlist.toggle(ProductId(1)), WishlistChange::Added);
        assert!(wishlist.contains(ProductId(1)));

        assert_eq!(wishlist.toggle(ProductId(1)), WishlistChange::Removed);
        assert!(!wishlist.contains(ProductId(1)));
    }

    #[test]
    fn double_toggle_round_trips_to_original_state() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId(2));

        let before = wishlist.clone();

        wishlist.toggle(ProductId(5));
        wishlist.toggle(ProductId(5));

        assert_eq!(wishlist, before);
    }

    #[test]
    fn iter_yields_ids_in_ascending_order() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId(9));
        wishlist.toggle(ProductId(1));
        wishlist.toggle(ProductId(4));

        let ids: Vec<u32> = wishlist.iter().map(|id| id.0).collect();

        assert_eq!(ids, vec![1, 4, 9]);
    }
}
