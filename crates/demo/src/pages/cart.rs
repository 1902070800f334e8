use leptos::prelude::*;

use rusty_money::Money;

use vitrine::{
    products::ProductId,
    state::{Notification, Page},
    summary::OrderSummary,
};

use crate::{format::format_money, store::Store};

/// Render model for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineModel {
    id: ProductId,
    name: String,
    image: String,
    unit_price: String,
    line_total: String,
    quantity: u32,
}

/// Render model for the applied discount row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DiscountModel {
    code: &'static str,
    description: &'static str,
}

/// Validate the mocked checkout form.
fn validate_checkout(name: &str, email: &str, address: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || address.trim().is_empty() {
        return Err("Please fill in all fields".to_string());
    }

    if !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }

    Ok(())
}

fn collect_lines(store: Store) -> Vec<LineModel> {
    store.state.with(|state| {
        state
            .cart()
            .lines()
            .iter()
            .filter_map(|line| {
                let product = state.catalog().get(line.product_id)?;
                let quantity = i64::from(line.quantity);
                let line_total_minor =
                    product.price.to_minor_units().checked_mul(quantity)?;

                Some(LineModel {
                    id: product.id,
                    name: product.name.clone(),
                    image: product.image.clone(),
                    unit_price: format_money(&product.price),
                    line_total: format_money(&Money::from_minor(
                        line_total_minor,
                        product.price.currency(),
                    )),
                    quantity: line.quantity,
                })
            })
            .collect()
    })
}

#[component]
fn CartLineRow(store: Store, line: LineModel) -> impl IntoView {
    let id = line.id;
    let remove_label = format!("Remove {} from cart", line.name);

    view! {
        <li class="cart-line">
            <img class="cart-line-image" src=line.image alt=line.name.clone() />
            <div class="cart-line-info">
                <p class="cart-line-name">{line.name.clone()}</p>
                <p class="cart-line-unit">{line.unit_price}</p>
            </div>
            <div class="quantity-stepper" role="group" aria-label="Quantity">
                <button
                    type="button"
                    aria-label="Decrease quantity"
                    on:click=move |_| store.change_quantity_by(id, -1)
                >
                    "-"
                </button>
                <span>{line.quantity.to_string()}</span>
                <button
                    type="button"
                    aria-label="Increase quantity"
                    on:click=move |_| store.change_quantity_by(id, 1)
                >
                    "+"
                </button>
            </div>
            <span class="cart-line-total">{line.line_total}</span>
            <button
                type="button"
                class="cart-line-remove"
                aria-label=remove_label
                on:click=move |_| store.remove_from_cart(id)
            >
                "Remove"
            </button>
        </li>
    }
}

#[component]
fn DiscountForm(store: Store) -> impl IntoView {
    let code_input = RwSignal::new(String::new());

    let applied = move || {
        store.state.with(|state| {
            state.applied_discount().map(|applied| DiscountModel {
                code: applied.code(),
                description: applied.description(),
            })
        })
    };

    let error = move || {
        store
            .state
            .with(|state| state.discount_error().map(str::to_owned))
    };

    view! {
        <div class="discount-form">
            <label class="discount-label" for="discount-code">
                "Discount code"
            </label>
            <div class="discount-row">
                <input
                    id="discount-code"
                    type="text"
                    placeholder="Enter code"
                    prop:value=move || code_input.get()
                    on:input=move |ev| code_input.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="button"
                    on:click=move |_| {
                        // A rejected code stays in the field for correction.
                        if store.apply_discount(&code_input.get_untracked()) {
                            code_input.set(String::new());
                        }
                    }
                >
                    "Apply"
                </button>
            </div>
            {move || {
                error()
                    .map_or_else(
                        || ().into_any(),
                        |message| {
                            view! { <p class="form-error" role="alert">{message}</p> }.into_any()
                        },
                    )
            }}
            {move || {
                applied()
                    .map_or_else(
                        || ().into_any(),
                        |discount| {
                            view! {
                                <p class="discount-applied">
                                    <span>
                                        {format!("{} applied: {}", discount.code, discount.description)}
                                    </span>
                                    <button
                                        type="button"
                                        class="discount-remove"
                                        on:click=move |_| store.remove_discount()
                                    >
                                        "Remove"
                                    </button>
                                </p>
                            }
                                .into_any()
                        },
                    )
            }}
        </div>
    }
}

#[component]
fn SummaryPanel(store: Store) -> impl IntoView {
    let summary = move || store.state.with(|state| state.summary());

    move || match summary() {
        Ok(summary) => view! { <SummaryRows summary=summary /> }.into_any(),
        Err(error) => view! {
            <p class="form-error" role="alert">{error.to_string()}</p>
        }
        .into_any(),
    }
}

#[component]
fn SummaryRows(summary: OrderSummary) -> impl IntoView {
    let shipping = if summary.is_free_shipping() {
        "Free".to_string()
    } else {
        format_money(&summary.shipping())
    };

    view! {
        <dl class="order-summary">
            <div class="order-summary-row">
                <dt>"Subtotal"</dt>
                <dd>{format_money(&summary.subtotal())}</dd>
            </div>
            <div class="order-summary-row">
                <dt>"Shipping"</dt>
                <dd>{shipping}</dd>
            </div>
            <div class="order-summary-row">
                <dt>"Discount"</dt>
                <dd>{format!("-{}", format_money(&summary.discount()))}</dd>
            </div>
            <div class="order-summary-row order-summary-total">
                <dt>"Total"</dt>
                <dd>{format_money(&summary.total())}</dd>
            </div>
        </dl>
    }
}

#[component]
fn CheckoutForm(store: Store) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let validated = validate_checkout(
            &name.get_untracked(),
            &email.get_untracked(),
            &address.get_untracked(),
        );

        match validated {
            Ok(()) => {
                if store.place_order() {
                    name.set(String::new());
                    email.set(String::new());
                    address.set(String::new());
                }
            }
            Err(message) => store.show_toast(Notification::error(message)),
        }
    };

    view! {
        <form class="checkout-form" on:submit=on_submit>
            <h2 class="section-subtitle">"Checkout"</h2>
            <label>
                <span>"Full name"</span>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                <span>"Email"</span>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                <span>"Shipping address"</span>
                <input
                    type="text"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="button button-primary button-large">
                "Place Order"
            </button>
        </form>
    }
}

/// Cart page with line items, discount code entry and a mocked checkout.
#[component]
pub fn CartPage(store: Store) -> impl IntoView {
    view! {
        <section class="cart-page">
            <h1 class="section-title">"Your Cart"</h1>
            {move || {
                let lines = collect_lines(store);

                if lines.is_empty() {
                    view! {
                        <div class="cart-empty">
                            <p>"Your cart is empty."</p>
                            <button
                                type="button"
                                class="button button-primary"
                                on:click=move |_| store.navigate(Page::Shop)
                            >
                                "Continue Shopping"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="cart-layout">
                            <ul class="cart-lines">
                                {lines
                                    .into_iter()
                                    .map(|line| view! { <CartLineRow store=store line=line /> })
                                    .collect_view()}
                            </ul>
                            <aside class="cart-sidebar">
                                <DiscountForm store=store />
                                <SummaryPanel store=store />
                                <CheckoutForm store=store />
                            </aside>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_checkout_accepts_complete_form() {
        let result = validate_checkout("Ada Lovelace", "ada@example.com", "1 Analytical Way");

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_validate_checkout_rejects_blank_fields() {
        let result = validate_checkout("  ", "ada@example.com", "1 Analytical Way");

        assert_eq!(result, Err("Please fill in all fields".to_string()));
    }

    #[test]
    fn test_validate_checkout_rejects_bad_email() {
        let result = validate_checkout("Ada", "not-an-email", "1 Analytical Way");

        assert_eq!(
            result,
            Err("Please enter a valid email address".to_string())
        );
    }
}
