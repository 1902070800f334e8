//! Leptos Vitrine Demo Storefront

use std::sync::Arc;

use leptos::prelude::*;

use vitrine::{
    fixtures::load_catalog,
    state::{AppState, Page, Severity},
};

mod chat;
mod format;
mod nav;
mod pages;
mod search;
mod store;
mod timing;

use store::Store;

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../../fixtures/products/demo.yml");

#[component]
fn Toast(store: Store) -> impl IntoView {
    move || {
        store.toast.get().map_or_else(
            || ().into_any(),
            |notification| {
                let class = match notification.severity {
                    Severity::Success => "toast toast-success",
                    Severity::Error => "toast toast-error",
                };

                view! {
                    <div class=class role="status">
                        <p>{notification.message}</p>
                    </div>
                }
                .into_any()
            },
        )
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match load_catalog(PRODUCTS_FIXTURE_YAML) {
        Ok(catalog) => {
            let store = Store::new(AppState::new(Arc::new(catalog)));

            // Page changes land the user back at the top of the viewport.
            Effect::new(move |_| {
                store.state.with(|state| state.page());

                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            });

            view! {
                <div class="site">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || store.live_message.get().1}
                    </p>
                    <nav::PromoBanner />
                    <nav::SiteHeader store=store />
                    <main class="site-main">
                        {move || match store.state.with(|state| state.page()) {
                            Page::Home => view! { <pages::home::HomePage store=store /> }.into_any(),
                            Page::Shop => view! { <pages::shop::ShopPage store=store /> }.into_any(),
                            Page::ProductDetails => {
                                view! { <pages::product::ProductDetailsPage store=store /> }
                                    .into_any()
                            }
                            Page::Cart => view! { <pages::cart::CartPage store=store /> }.into_any(),
                            Page::Info => view! { <pages::info::InfoPage /> }.into_any(),
                            Page::Contact => {
                                view! { <pages::contact::ContactPage store=store /> }.into_any()
                            }
                            Page::Account => {
                                view! { <pages::account::AccountPage store=store /> }.into_any()
                            }
                        }}
                    </main>
                    <search::SearchOverlay store=store />
                    <chat::ChatWidget />
                    <Toast store=store />
                </div>
            }
            .into_any()
        }
        Err(error) => {
            let error_message = format!("Failed to load the demo catalog: {error}");

            view! {
                <main class="site-main">
                    <div class="load-error">
                        <h1 class="section-title">"Vitrine"</h1>
                        <p class="form-error">{error_message}</p>
                    </div>
                </main>
            }
            .into_any()
        }
    }
}

/// Main server function
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
