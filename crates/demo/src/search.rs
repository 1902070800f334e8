use leptos::prelude::*;

use vitrine::{
    filter::{CatalogQuery, CategoryFilter, SortKey, filter_and_sort},
    products::ProductId,
};

use crate::{format::format_money, store::Store};

const MAX_RESULTS: usize = 8;

/// Query that ignores every shop filter except the typed term.
fn search_query(term: &str) -> CatalogQuery {
    CatalogQuery {
        category: CategoryFilter::All,
        max_price_minor: i64::MAX,
        search_term: term.to_string(),
        sort: SortKey::Recommended,
    }
}

/// Render model for one search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchHit {
    id: ProductId,
    name: String,
    price: String,
}

/// Full-screen search overlay, toggled from the header.
#[component]
pub fn SearchOverlay(store: Store) -> impl IntoView {
    let term = RwSignal::new(String::new());

    let close = move || {
        store.search_open.set(false);
        term.set(String::new());
    };

    let hits = move || {
        let needle = term.get();

        if needle.trim().is_empty() {
            return Vec::new();
        }

        store.state.with(|state| {
            filter_and_sort(state.catalog().products(), &search_query(&needle))
                .into_iter()
                .take(MAX_RESULTS)
                .map(|product| SearchHit {
                    id: product.id,
                    name: product.name.clone(),
                    price: format_money(&product.price),
                })
                .collect::<Vec<_>>()
        })
    };

    move || {
        if !store.search_open.get() {
            return ().into_any();
        }

        view! {
            <div class="search-overlay" role="dialog" aria-label="Search products">
                <div class="search-overlay-panel">
                    <div class="search-overlay-header">
                        <input
                            type="search"
                            class="search-overlay-input"
                            placeholder="Search for products"
                            aria-label="Search for products"
                            prop:value=move || term.get()
                            on:input=move |ev| term.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="search-overlay-close"
                            aria-label="Close search"
                            on:click=move |_| close()
                        >
                            "Close"
                        </button>
                    </div>
                    <ul class="search-results">
                        {move || {
                            hits()
                                .into_iter()
                                .map(|hit| {
                                    let id = hit.id;

                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class="search-result"
                                                on:click=move |_| {
                                                    store.view_product(id);
                                                    close();
                                                }
                                            >
                                                <span>{hit.name}</span>
                                                <span class="search-result-price">{hit.price}</span>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        }
        .into_any()
    }
}
