use leptos::prelude::*;

use vitrine::{filter::CategoryFilter, products::Category, state::Page};

use crate::store::Store;

/// Label for the cart badge, hidden entirely at zero.
pub fn cart_badge_label(item_count: u64) -> Option<String> {
    (item_count > 0).then(|| {
        if item_count > 99 {
            "99+".to_string()
        } else {
            item_count.to_string()
        }
    })
}

#[component]
pub fn PromoBanner() -> impl IntoView {
    view! {
        <div class="promo-banner">
            <p>"Free shipping on every order with a discount code"</p>
        </div>
    }
}

#[component]
fn NavLink(store: Store, page: Page, label: &'static str) -> impl IntoView {
    let is_current = move || store.state.with(|state| state.page()) == page;

    view! {
        <button
            type="button"
            class=move || {
                if is_current() { "nav-link nav-link-current" } else { "nav-link" }
            }
            aria-current=move || if is_current() { Some("page") } else { None }
            on:click=move |_| store.navigate(page)
        >
            {label}
        </button>
    }
}

#[component]
fn CategoryMenu(store: Store) -> impl IntoView {
    view! {
        <div class="category-menu">
            <button
                type="button"
                class="nav-link"
                on:click=move |_| store.select_category_and_show_shop(CategoryFilter::All)
            >
                "All Products"
            </button>
            <ul class="category-menu-list">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="category-menu-item"
                                    on:click=move |_| {
                                        store
                                            .select_category_and_show_shop(
                                                CategoryFilter::Only(category),
                                            );
                                    }
                                >
                                    {category.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CartButton(store: Store) -> impl IntoView {
    let badge = move || {
        cart_badge_label(store.state.with(|state| state.cart().item_count())).map_or_else(
            || ().into_any(),
            |label| view! { <span class="cart-badge">{label}</span> }.into_any(),
        )
    };

    view! {
        <button
            type="button"
            class="header-action"
            aria-label="Open cart"
            on:click=move |_| store.navigate(Page::Cart)
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="lucide lucide-shopping-cart-icon lucide-shopping-cart"
                aria-hidden="true"
            >
                <circle cx="8" cy="21" r="1"></circle>
                <circle cx="19" cy="21" r="1"></circle>
                <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
            </svg>
            {badge}
        </button>
    }
}

/// Site-wide header with navigation, category menu, search and cart.
#[component]
pub fn SiteHeader(store: Store) -> impl IntoView {
    view! {
        <header class="site-header">
            <button
                type="button"
                class="site-logo"
                on:click=move |_| store.navigate(Page::Home)
            >
                "Vitrine"
            </button>
            <nav class="site-nav" aria-label="Main">
                <NavLink store=store page=Page::Home label="Home" />
                <NavLink store=store page=Page::Shop label="Shop" />
                <NavLink store=store page=Page::Info label="Info" />
                <NavLink store=store page=Page::Contact label="Contact" />
                <NavLink store=store page=Page::Account label="Account" />
                <CategoryMenu store=store />
            </nav>
            <div class="header-actions">
                <button
                    type="button"
                    class="header-action"
                    aria-label="Open search"
                    on:click=move |_| store.search_open.set(true)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="lucide lucide-search-icon lucide-search"
                        aria-hidden="true"
                    >
                        <circle cx="11" cy="11" r="8"></circle>
                        <path d="m21 21-4.3-4.3"></path>
                    </svg>
                </button>
                <CartButton store=store />
            </div>
        </header>
    }
}
