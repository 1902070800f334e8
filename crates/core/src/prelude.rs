//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    catalog::{Catalog, CatalogError},
    discounts::{
        AppliedDiscount, DISCOUNT_CODES, DiscountCode, DiscountCodeError, DiscountError,
        resolve_code,
    },
    filter::{
        CatalogQuery, CategoryFilter, DEFAULT_MAX_PRICE_MINOR, SortKey, filter_and_sort,
    },
    fixtures::{FixtureError, load_catalog},
    products::{Category, Product, ProductId, SpecRow, UnknownCategory},
    state::{AppState, Notification, NotificationSink, Page, Severity},
    summary::{OrderSummary, SHIPPING_FEE_MINOR, SummaryError},
    wishlist::{Wishlist, WishlistChange},
};
