use leptos::prelude::*;

use vitrine::products::{Product, ProductId};

use crate::{format::format_money, store::Store};

/// Shown when a product image fails to load.
pub(crate) const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/600x600/e2e8f0/64748b?text=Image+unavailable";

/// Render model for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardModel {
    /// Product id used for actions on this card.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Brand line under the name.
    pub brand: String,

    /// Formatted display price.
    pub price: String,

    /// Primary image URL.
    pub image: String,

    /// Category label shown as a tag.
    pub category: &'static str,
}

impl From<&Product> for CardModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: format_money(&product.price),
            image: product.image.clone(),
            category: product.category.label(),
        }
    }
}

/// Product card used on the home and shop grids.
#[component]
pub fn ProductCard(store: Store, model: CardModel) -> impl IntoView {
    let id = model.id;
    let image_failed = RwSignal::new(false);
    let image_url = model.image.clone();

    let image_src = move || {
        if image_failed.get() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            image_url.clone()
        }
    };

    let wishlist_label = move || {
        if store.state.with(|state| state.wishlist().contains(id)) {
            "Remove from wishlist"
        } else {
            "Add to wishlist"
        }
    };

    let add_label = format!("Add {} to cart", model.name);
    let view_label = format!("View {}", model.name);
    let image_alt = model.name.clone();

    view! {
        <article class="product-card">
            <button
                type="button"
                class="product-card-media"
                aria-label=view_label
                on:click=move |_| store.view_product(id)
            >
                <img
                    src=image_src
                    alt=image_alt
                    loading="lazy"
                    on:error=move |_| image_failed.set(true)
                />
            </button>
            <button
                type="button"
                class=move || {
                    if store.state.with(|state| state.wishlist().contains(id)) {
                        "wishlist-toggle wishlist-toggle-active"
                    } else {
                        "wishlist-toggle"
                    }
                }
                aria-label=wishlist_label
                on:click=move |_| store.toggle_wishlist(id)
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill=move || {
                        if store.state.with(|state| state.wishlist().contains(id)) {
                            "currentColor"
                        } else {
                            "none"
                        }
                    }
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="lucide lucide-heart-icon lucide-heart"
                    aria-hidden="true"
                >
                    <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"></path>
                </svg>
            </button>
            <div class="product-card-body">
                <span class="product-card-category">{model.category}</span>
                <p class="product-card-name">{model.name.clone()}</p>
                <p class="product-card-brand">{model.brand}</p>
                <div class="product-card-footer">
                    <span class="product-card-price">{model.price}</span>
                    <button
                        type="button"
                        class="button button-primary"
                        aria-label=add_label
                        on:click=move |_| store.add_to_cart(id, 1)
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </article>
    }
}
