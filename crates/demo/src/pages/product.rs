use leptos::prelude::*;

use vitrine::{
    products::{Product, ProductId, SpecRow},
    state::Page,
};

use crate::{
    format::format_money,
    pages::card::PLACEHOLDER_IMAGE,
    store::Store,
};

/// Render model for the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DetailModel {
    id: ProductId,
    name: String,
    brand: String,
    category: &'static str,
    price: String,
    image: String,
    description: String,
    specs: Vec<SpecRow>,
}

impl From<&Product> for DetailModel {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.label(),
            price: format_money(&product.price),
            image: product.image.clone(),
            description: product.description.clone(),
            specs: product.specs.clone(),
        }
    }
}

/// Step a quantity field, clamped to at least one unit.
fn step_quantity(current: u32, delta: i64) -> u32 {
    let next = i64::from(current).saturating_add(delta).max(1);

    u32::try_from(next).unwrap_or(u32::MAX)
}

#[component]
fn SpecsTable(specs: Vec<SpecRow>) -> impl IntoView {
    if specs.is_empty() {
        return ().into_any();
    }

    view! {
        <section class="product-specs">
            <h2 class="section-subtitle">"Specifications"</h2>
            <table>
                <tbody>
                    {specs
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <th scope="row">{row.label}</th>
                                    <td>{row.value}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
    .into_any()
}

#[component]
fn DetailBody(store: Store, model: DetailModel) -> impl IntoView {
    let id = model.id;
    let quantity = RwSignal::new(1_u32);
    let image_failed = RwSignal::new(false);
    let image_url = model.image.clone();
    let image_alt = model.name.clone();

    let image_src = move || {
        if image_failed.get() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            image_url.clone()
        }
    };

    let in_wishlist = move || store.state.with(|state| state.wishlist().contains(id));

    view! {
        <article class="product-detail">
            <div class="product-detail-media">
                <img
                    src=image_src
                    alt=image_alt
                    on:error=move |_| image_failed.set(true)
                />
            </div>
            <div class="product-detail-info">
                <span class="product-card-category">{model.category}</span>
                <h1 class="product-detail-name">{model.name.clone()}</h1>
                <p class="product-detail-brand">{model.brand}</p>
                <p class="product-detail-price">{model.price}</p>
                <p class="product-detail-description">{model.description}</p>
                <div class="quantity-stepper" role="group" aria-label="Quantity">
                    <button
                        type="button"
                        aria-label="Decrease quantity"
                        on:click=move |_| quantity.update(|value| *value = step_quantity(*value, -1))
                    >
                        "-"
                    </button>
                    <span aria-live="polite">{move || quantity.get().to_string()}</span>
                    <button
                        type="button"
                        aria-label="Increase quantity"
                        on:click=move |_| quantity.update(|value| *value = step_quantity(*value, 1))
                    >
                        "+"
                    </button>
                </div>
                <div class="product-detail-actions">
                    <button
                        type="button"
                        class="button button-primary"
                        on:click=move |_| store.add_to_cart(id, quantity.get_untracked())
                    >
                        "Add to Cart"
                    </button>
                    <button
                        type="button"
                        class="button"
                        on:click=move |_| store.toggle_wishlist(id)
                    >
                        {move || {
                            if in_wishlist() { "Remove from Wishlist" } else { "Add to Wishlist" }
                        }}
                    </button>
                </div>
            </div>
        </article>
        <SpecsTable specs=model.specs />
    }
}

/// Details page for the currently selected product.
#[component]
pub fn ProductDetailsPage(store: Store) -> impl IntoView {
    let model = store
        .state
        .with_untracked(|state| state.selected_product().map(DetailModel::from));

    view! {
        <section class="product-detail-page">
            <button
                type="button"
                class="back-link"
                on:click=move |_| store.navigate(Page::Shop)
            >
                "Back to Shop"
            </button>
            {model.map_or_else(
                || {
                    view! {
                        <p class="shop-empty">"This product is no longer available."</p>
                    }
                        .into_any()
                },
                |model| view! { <DetailBody store=store model=model /> }.into_any(),
            )}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_quantity_increments() {
        let result = step_quantity(1, 1);

        assert_eq!(result, 2);
    }

    #[test]
    fn test_step_quantity_never_drops_below_one() {
        let result = step_quantity(1, -1);

        assert_eq!(result, 1);
    }

    #[test]
    fn test_step_quantity_saturates_on_extreme_delta() {
        let result = step_quantity(5, i64::MAX);

        assert_eq!(result, u32::MAX);
    }
}
