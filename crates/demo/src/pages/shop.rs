use leptos::prelude::*;

use vitrine::{
    filter::{CatalogQuery, CategoryFilter, DEFAULT_MAX_PRICE_MINOR, SortKey, filter_and_sort},
    products::Category,
};

use crate::{
    format::format_price,
    pages::card::{CardModel, ProductCard},
    store::Store,
};

/// Convert a price slider value (major units) into minor units.
///
/// Unparseable input keeps the previous value by returning `None`.
fn slider_to_minor(raw: &str) -> Option<i64> {
    let major = raw.trim().parse::<i64>().ok()?;

    major.checked_mul(100)
}

fn category_chip_class(active: bool) -> &'static str {
    if active {
        "filter-chip filter-chip-active"
    } else {
        "filter-chip"
    }
}

#[component]
fn CategoryChips(store: Store) -> impl IntoView {
    let chips = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
        .collect::<Vec<_>>();

    view! {
        <div class="filter-chips" role="group" aria-label="Filter by category">
            {chips
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                category_chip_class(
                                    store.state.with(|state| state.selected_category()) == filter,
                                )
                            }
                            on:click=move |_| store.set_selected_category(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SortSelect(sort: RwSignal<SortKey>) -> impl IntoView {
    view! {
        <label class="sort-select">
            <span>"Sort by"</span>
            <select on:change=move |ev| {
                if let Some(key) = SortKey::from_label(&event_target_value(&ev)) {
                    sort.set(key);
                }
            }>
                {SortKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <option
                                value=key.label()
                                selected=move || sort.get() == key
                            >
                                {key.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Shop page with category, price, search and sort controls over the grid.
#[component]
pub fn ShopPage(store: Store) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let max_price = RwSignal::new(DEFAULT_MAX_PRICE_MINOR);
    let sort = RwSignal::new(SortKey::default());

    let currency_code = store
        .state
        .with_untracked(|state| state.catalog().currency().iso_alpha_code);

    let results = move || {
        let query = CatalogQuery {
            category: store.state.with(|state| state.selected_category()),
            max_price_minor: max_price.get(),
            search_term: search.get(),
            sort: sort.get(),
        };

        store.state.with(|state| {
            filter_and_sort(state.catalog().products(), &query)
                .into_iter()
                .map(CardModel::from)
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="shop">
            <h1 class="section-title">"Shop"</h1>
            <div class="shop-controls">
                <CategoryChips store=store />
                <input
                    type="search"
                    class="shop-search"
                    placeholder="Search products"
                    aria-label="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <label class="price-filter">
                    <span>
                        {move || {
                            format!("Max price: {}", format_price(max_price.get(), currency_code))
                        }}
                    </span>
                    <input
                        type="range"
                        min="0"
                        max="500"
                        step="10"
                        prop:value=move || (max_price.get() / 100).to_string()
                        on:input=move |ev| {
                            if let Some(minor) = slider_to_minor(&event_target_value(&ev)) {
                                max_price.set(minor);
                            }
                        }
                    />
                </label>
                <SortSelect sort=sort />
            </div>
            {move || {
                let models = results();

                if models.is_empty() {
                    view! {
                        <p class="shop-empty">"No products match your filters."</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="product-grid">
                            {models
                                .into_iter()
                                .map(|model| view! { <ProductCard store=store model=model /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
