//! Vitrine
//!
//! Vitrine is an in-memory storefront engine for a wearable-technology
//! catalog: cart and pricing maths, promo-code resolution, product
//! filtering and sorting, wishlists, and a single-owner application state
//! container driving a client-rendered UI.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod filter;
pub mod fixtures;
pub mod prelude;
pub mod products;
pub mod state;
pub mod summary;
pub mod utils;
pub mod wishlist;
