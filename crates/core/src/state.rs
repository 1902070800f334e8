//! Application State
//!
//! A single-owner state container for the storefront client. All mutable
//! UI-domain state (cart, wishlist, applied discount, page, selections)
//! lives here behind command methods; views read it through read-only
//! projections and never mutate it directly.

use std::sync::Arc;

use crate::{
    cart::Cart,
    catalog::Catalog,
    discounts::{self, AppliedDiscount, DiscountCodeError},
    filter::CategoryFilter,
    products::{Product, ProductId},
    summary::{OrderSummary, SummaryError},
    wishlist::{Wishlist, WishlistChange},
};

/// Top-level views the client can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// Landing page with hero and featured products.
    #[default]
    Home,

    /// Product grid with filters.
    Shop,

    /// Detail view for the selected product.
    ProductDetails,

    /// Cart and checkout.
    Cart,

    /// About/marketing page.
    Info,

    /// Contact form.
    Contact,

    /// Account, wishlist and order history.
    Account,
}

/// Notification severity for the toast sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Confirmation of a completed action.
    Success,

    /// Validation or action failure.
    Error,
}

/// A fire-and-forget user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity used to style the toast.
    pub severity: Severity,

    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// Build a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Build an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Sink for fire-and-forget notifications. No delivery guarantees.
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&self, notification: Notification);
}

impl<F: Fn(Notification)> NotificationSink for F {
    fn notify(&self, notification: Notification) {
        self(notification);
    }
}

/// All mutable client state, owned by a single controller.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    page: Page,
    selected_product: Option<ProductId>,
    selected_category: CategoryFilter,
    cart: Cart,
    wishlist: Wishlist,
    applied_discount: Option<AppliedDiscount>,
    discount_error: Option<String>,
}

impl AppState {
    /// Fresh state over a seeded catalog: home page, empty cart and wishlist.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        AppState {
            catalog,
            page: Page::Home,
            selected_product: None,
            selected_category: CategoryFilter::All,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            applied_discount: None,
            discount_error: None,
        }
    }

    /// The read-only product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The page currently rendered.
    pub fn page(&self) -> Page {
        self.page
    }

    /// The product backing the details page, if one is selected.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.and_then(|id| self.catalog.get(id))
    }

    /// Category preset flowing into the shop view.
    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    /// The active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// The active discount, if a valid code has been applied.
    pub fn applied_discount(&self) -> Option<&AppliedDiscount> {
        self.applied_discount.as_ref()
    }

    /// Inline error text for the discount code input.
    pub fn discount_error(&self) -> Option<&str> {
        self.discount_error.as_deref()
    }

    /// Derived order totals for the current cart and discount.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if a cart line cannot be priced.
    pub fn summary(&self) -> Result<OrderSummary, SummaryError> {
        OrderSummary::compute(&self.cart, &self.catalog, self.applied_discount.as_ref())
    }

    /// Switch to another page.
    ///
    /// The details page is refused while no product is selected, so there
    /// is no state where it renders without a subject.
    pub fn navigate(&mut self, page: Page) {
        if page == Page::ProductDetails && self.selected_product.is_none() {
            return;
        }

        self.page = page;
    }

    /// Select a product and show its details page.
    pub fn view_product(&mut self, id: ProductId) {
        if self.catalog.get(id).is_some() {
            self.selected_product = Some(id);
            self.page = Page::ProductDetails;
        }
    }

    /// Set the category preset and jump to the shop in one compound command.
    pub fn select_category_and_show_shop(&mut self, category: CategoryFilter) {
        self.selected_category = category;
        self.page = Page::Shop;
    }

    /// Write-through for the shop view's own category chips.
    pub fn set_selected_category(&mut self, category: CategoryFilter) {
        self.selected_category = category;
    }

    /// Add units of a product to the cart and confirm via the sink.
    ///
    /// Unknown ids are ignored.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32, sink: &dyn NotificationSink) {
        let Some(product) = self.catalog.get(id) else {
            return;
        };
        let name = product.name.clone();

        self.cart.add(id, quantity);

        sink.notify(Notification::success(format!("{name} added to cart!")));
    }

    /// Remove a cart line entirely and confirm via the sink.
    pub fn remove_from_cart(&mut self, id: ProductId, sink: &dyn NotificationSink) {
        if self.cart.quantity_of(id).is_none() {
            return;
        }

        self.cart.remove(id);

        sink.notify(Notification::success("Item removed from cart"));
    }

    /// Step a cart line's quantity; never drops below 1.
    pub fn change_quantity_by(&mut self, id: ProductId, delta: i64) {
        self.cart.change_quantity_by(id, delta);
    }

    /// Toggle wishlist membership and confirm via the sink.
    pub fn toggle_wishlist(&mut self, id: ProductId, sink: &dyn NotificationSink) {
        let message = match self.wishlist.toggle(id) {
            WishlistChange::Added => "Added to wishlist",
            WishlistChange::Removed => "Removed from wishlist",
        };

        sink.notify(Notification::success(message));
    }

    /// Resolve and apply a promo code input.
    ///
    /// On success the code becomes the single active discount (replacing
    /// any previous one) and the inline error clears. An empty input leaves
    /// the active discount untouched; an invalid code clears it.
    ///
    /// # Errors
    ///
    /// Returns the [`DiscountCodeError`] that was also stored as the inline
    /// error text.
    pub fn apply_discount(&mut self, input: &str) -> Result<(), DiscountCodeError> {
        match discounts::resolve_code(input) {
            Ok(code) => {
                self.applied_discount = Some(AppliedDiscount::new(code));
                self.discount_error = None;

                Ok(())
            }
            Err(error) => {
                if error == DiscountCodeError::InvalidCode {
                    self.applied_discount = None;
                }

                self.discount_error = Some(error.to_string());

                Err(error)
            }
        }
    }

    /// Clear the active discount and any inline error unconditionally.
    pub fn remove_discount(&mut self) {
        self.applied_discount = None;
        self.discount_error = None;
    }

    /// Simulated checkout: blocked on an empty cart, otherwise clears the
    /// cart and discount and confirms via the sink.
    ///
    /// Returns whether the order was placed.
    pub fn place_order(&mut self, sink: &dyn NotificationSink) -> bool {
        if self.cart.is_empty() {
            sink.notify(Notification::error("Your cart is empty"));

            return false;
        }

        self.cart.clear();
        self.applied_discount = None;
        self.discount_error = None;

        sink.notify(Notification::success("Order placed successfully!"));

        true
    }
}
