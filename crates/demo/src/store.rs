use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
use leptos::task;

use vitrine::{
    filter::CategoryFilter,
    products::ProductId,
    state::{AppState, Notification, Page},
};

#[cfg(target_arch = "wasm32")]
use crate::timing::wait_for_timeout;

#[cfg(target_arch = "wasm32")]
const TOAST_DURATION_MS: i32 = 3000;

/// Reactive handle over the storefront state shared by every component.
///
/// All fields are signals, so the handle itself is `Copy` and can be passed
/// into closures freely.
#[derive(Debug, Clone, Copy)]
pub struct Store {
    /// The storefront state machine.
    pub state: RwSignal<AppState>,

    /// Current toast notification, if any.
    pub toast: RwSignal<Option<Notification>>,

    /// Live-region announcement signal.
    pub live_message: RwSignal<(u64, String)>,

    /// Whether the search overlay is open.
    pub search_open: RwSignal<bool>,

    /// Monotonic id used to cancel stale toast dismissals.
    toast_generation: RwSignal<u64>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: RwSignal::new(state),
            toast: RwSignal::new(None),
            live_message: RwSignal::new((0_u64, String::new())),
            search_open: RwSignal::new(false),
            toast_generation: RwSignal::new(0_u64),
        }
    }

    /// Notification sink that surfaces messages as a toast and as a
    /// screen-reader announcement.
    pub fn sink(self) -> impl Fn(Notification) {
        move |notification: Notification| {
            announce(self.live_message, notification.message.clone());
            self.show_toast(notification);
        }
    }

    /// Show a toast and schedule its dismissal, superseding any earlier one.
    pub fn show_toast(self, notification: Notification) {
        let run_id = bump(self.toast_generation);

        self.toast.set(Some(notification));

        self.schedule_toast_dismissal(run_id);
    }

    /// In the browser, dismiss the toast after a delay unless a newer one
    /// has replaced it. Off-wasm there is no timer loop, so the toast
    /// simply stays until superseded.
    #[cfg(target_arch = "wasm32")]
    fn schedule_toast_dismissal(self, run_id: u64) {
        task::spawn_local(async move {
            wait_for_timeout(TOAST_DURATION_MS).await;

            if self.toast_generation.get_untracked() == run_id {
                self.toast.set(None);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_toast_dismissal(self, _run_id: u64) {}

    pub fn navigate(self, page: Page) {
        self.state.update(|state| state.navigate(page));
    }

    pub fn view_product(self, id: ProductId) {
        self.state.update(|state| state.view_product(id));
    }

    pub fn select_category_and_show_shop(self, category: CategoryFilter) {
        self.state
            .update(|state| state.select_category_and_show_shop(category));
    }

    pub fn set_selected_category(self, category: CategoryFilter) {
        self.state
            .update(|state| state.set_selected_category(category));
    }

    pub fn add_to_cart(self, id: ProductId, quantity: u32) {
        let sink = self.sink();

        self.state
            .update(|state| state.add_to_cart(id, quantity, &sink));
    }

    pub fn remove_from_cart(self, id: ProductId) {
        let sink = self.sink();

        self.state.update(|state| state.remove_from_cart(id, &sink));
    }

    pub fn change_quantity_by(self, id: ProductId, delta: i64) {
        self.state
            .update(|state| state.change_quantity_by(id, delta));
    }

    pub fn toggle_wishlist(self, id: ProductId) {
        let sink = self.sink();

        self.state.update(|state| state.toggle_wishlist(id, &sink));
    }

    /// Try to apply a discount code. Failures surface through the state's
    /// inline error, successes through a toast.
    ///
    /// Returns whether the code was accepted, so callers can decide whether
    /// to keep the typed input around for correction.
    pub fn apply_discount(self, input: &str) -> bool {
        let sink = self.sink();

        self.state
            .try_update(|state| {
                let applied = state.apply_discount(input).is_ok();

                if applied {
                    sink(Notification::success("Discount code applied!"));
                }

                applied
            })
            .unwrap_or(false)
    }

    pub fn remove_discount(self) {
        self.state.update(AppState::remove_discount);
    }

    /// Place the order. Returns whether it went through.
    pub fn place_order(self) -> bool {
        let sink = self.sink();

        self.state
            .try_update(|state| state.place_order(&sink))
            .unwrap_or(false)
    }
}

/// Publish a message to the polite live region.
pub fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}

fn bump(generation: RwSignal<u64>) -> u64 {
    generation.update(|value| {
        *value = value.saturating_add(1);
    });

    generation.get_untracked()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use vitrine::{
        catalog::Catalog,
        fixtures::load_catalog,
        products::ProductId,
        state::{Page, Severity},
    };

    use super::*;

    const DEMO_YAML: &str = include_str!("../../../fixtures/products/demo.yml");

    fn demo_catalog() -> Result<Arc<Catalog>, vitrine::fixtures::FixtureError> {
        Ok(Arc::new(load_catalog(DEMO_YAML)?))
    }

    #[test]
    fn test_announce_increments_id_and_replaces_text() {
        let live_message = RwSignal::new((0_u64, String::new()));

        announce(live_message, "First".to_string());
        announce(live_message, "Second".to_string());

        let (id, text) = live_message.get_untracked();

        assert_eq!(id, 2);
        assert_eq!(text, "Second");
    }

    #[test]
    fn test_sink_sets_toast_and_live_message() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));
        let sink = store.sink();

        sink(Notification::success("Added to wishlist"));

        let toast = store.toast.get_untracked().ok_or("no toast")?;

        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(toast.message, "Added to wishlist");
        assert_eq!(store.live_message.get_untracked().1, "Added to wishlist");

        Ok(())
    }

    #[test]
    fn test_add_to_cart_updates_state_and_toast() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));

        store.add_to_cart(ProductId(1), 1);

        assert_eq!(
            store
                .state
                .with_untracked(|state| state.cart().quantity_of(ProductId(1))),
            Some(1)
        );

        let toast = store.toast.get_untracked().ok_or("no toast")?;

        assert_eq!(toast.message, "Smart Glasses Pro added to cart!");

        Ok(())
    }

    #[test]
    fn test_toast_survives_without_a_browser_timer() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));

        store.show_toast(Notification::success("First"));
        store.show_toast(Notification::error("Second"));

        // No executor exists here; the newest toast stays visible.
        let toast = store.toast.get_untracked().ok_or("no toast")?;

        assert_eq!(toast.message, "Second");
        assert_eq!(store.toast_generation.get_untracked(), 2);

        Ok(())
    }

    #[test]
    fn test_apply_discount_reports_acceptance() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));

        assert!(!store.apply_discount("BOGUS"));
        assert!(store.apply_discount("SAVE10"));

        Ok(())
    }

    #[test]
    fn test_apply_invalid_discount_sets_inline_error_not_toast() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));

        assert!(!store.apply_discount("BOGUS"));

        assert!(store.toast.get_untracked().is_none());
        assert_eq!(
            store
                .state
                .with_untracked(|state| state.discount_error().map(str::to_owned)),
            Some("Invalid discount code".to_string())
        );

        Ok(())
    }

    #[test]
    fn test_place_order_on_empty_cart_fails_with_error_toast() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));

        assert!(!store.place_order());

        let toast = store.toast.get_untracked().ok_or("no toast")?;

        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "Your cart is empty");

        Ok(())
    }

    #[test]
    fn test_navigate_changes_page() -> TestResult {
        let store = Store::new(AppState::new(demo_catalog()?));

        store.navigate(Page::Shop);

        assert_eq!(store.state.with_untracked(AppState::page), Page::Shop);

        Ok(())
    }
}
