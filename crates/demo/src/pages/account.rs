use leptos::prelude::*;

use vitrine::{products::ProductId, state::Notification};

use crate::{format::format_money, store::Store};

/// Validate the mocked login form.
fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }

    Ok(())
}

/// Validate the mocked registration form.
fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }

    if password != confirm {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountTab {
    Login,
    Register,
    Orders,
}

/// One row of the static, demo-only order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MockOrder {
    reference: &'static str,
    placed_on: &'static str,
    items: &'static str,
    total: &'static str,
    status: &'static str,
}

/// Canned order history shown on the orders tab. There is no backend, so
/// these never change.
const MOCK_ORDERS: [MockOrder; 3] = [
    MockOrder {
        reference: "VT-2025-0142",
        placed_on: "Aug 12, 2025",
        items: "SmartWatch Ultra",
        total: "$309.99",
        status: "Delivered",
    },
    MockOrder {
        reference: "VT-2025-0101",
        placed_on: "Jul 28, 2025",
        items: "Fitness Tracker Elite, Smart Pendant Air",
        total: "$299.98",
        status: "Delivered",
    },
    MockOrder {
        reference: "VT-2025-0078",
        placed_on: "Jun 03, 2025",
        items: "Smart Glasses Lite",
        total: "$209.99",
        status: "Returned",
    },
];

/// Render model for a wishlist row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WishlistRow {
    id: ProductId,
    name: String,
    price: String,
}

#[component]
fn LoginForm(store: Store) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                store.show_toast(Notification::success("Login successful!"));
                password.set(String::new());
            }
            Err(message) => store.show_toast(Notification::error(message)),
        }
    };

    view! {
        <form class="account-form" on:submit=on_submit>
            <label>
                <span>"Email"</span>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                <span>"Password"</span>
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="button button-primary">"Log In"</button>
        </form>
    }
}

#[component]
fn RegisterForm(store: Store) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let validated = validate_register(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );

        match validated {
            Ok(()) => {
                store.show_toast(Notification::success("Account created successfully!"));
                password.set(String::new());
                confirm.set(String::new());
            }
            Err(message) => store.show_toast(Notification::error(message)),
        }
    };

    view! {
        <form class="account-form" on:submit=on_submit>
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
                <span>"Password"</span>
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label>
                <span>"Confirm password"</span>
                <input
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="button button-primary">"Create Account"</button>
        </form>
    }
}

#[component]
fn WishlistSection(store: Store) -> impl IntoView {
    let rows = move || {
        store.state.with(|state| {
            state
                .wishlist()
                .iter()
                .filter_map(|id| {
                    let product = state.catalog().get(id)?;

                    Some(WishlistRow {
                        id,
                        name: product.name.clone(),
                        price: format_money(&product.price),
                    })
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="wishlist-section">
            <h2 class="section-subtitle">"Wishlist"</h2>
            {move || {
                let rows = rows();

                if rows.is_empty() {
                    view! { <p class="wishlist-empty">"Your wishlist is empty."</p> }.into_any()
                } else {
                    view! {
                        <ul class="wishlist-rows">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    let remove_label = format!(
                                        "Remove {} from wishlist",
                                        row.name,
                                    );

                                    view! {
                                        <li class="wishlist-row">
                                            <button
                                                type="button"
                                                class="wishlist-row-name"
                                                on:click=move |_| store.view_product(id)
                                            >
                                                {row.name.clone()}
                                            </button>
                                            <span>{row.price}</span>
                                            <button
                                                type="button"
                                                class="wishlist-row-remove"
                                                aria-label=remove_label
                                                on:click=move |_| store.toggle_wishlist(id)
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn OrdersSection() -> impl IntoView {
    view! {
        <table class="order-history">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Date"</th>
                    <th>"Items"</th>
                    <th>"Total"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {MOCK_ORDERS
                    .iter()
                    .map(|order| {
                        view! {
                            <tr class="order-history-row">
                                <td>{order.reference}</td>
                                <td>{order.placed_on}</td>
                                <td>{order.items}</td>
                                <td>{order.total}</td>
                                <td class="order-history-status">{order.status}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Account page with mocked login/registration, order history, and the
/// wishlist.
#[component]
pub fn AccountPage(store: Store) -> impl IntoView {
    let tab = RwSignal::new(AccountTab::Login);

    view! {
        <section class="account-page">
            <h1 class="section-title">"Account"</h1>
            <div class="account-tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    aria-selected=move || (tab.get() == AccountTab::Login).to_string()
                    class=move || {
                        if tab.get() == AccountTab::Login {
                            "account-tab account-tab-active"
                        } else {
                            "account-tab"
                        }
                    }
                    on:click=move |_| tab.set(AccountTab::Login)
                >
                    "Log In"
                </button>
                <button
                    type="button"
                    role="tab"
                    aria-selected=move || (tab.get() == AccountTab::Register).to_string()
                    class=move || {
                        if tab.get() == AccountTab::Register {
                            "account-tab account-tab-active"
                        } else {
                            "account-tab"
                        }
                    }
                    on:click=move |_| tab.set(AccountTab::Register)
                >
                    "Register"
                </button>
                <button
                    type="button"
                    role="tab"
                    aria-selected=move || (tab.get() == AccountTab::Orders).to_string()
                    class=move || {
                        if tab.get() == AccountTab::Orders {
                            "account-tab account-tab-active"
                        } else {
                            "account-tab"
                        }
                    }
                    on:click=move |_| tab.set(AccountTab::Orders)
                >
                    "Order History"
                </button>
            </div>
            {move || match tab.get() {
                AccountTab::Login => view! { <LoginForm store=store /> }.into_any(),
                AccountTab::Register => view! { <RegisterForm store=store /> }.into_any(),
                AccountTab::Orders => view! { <OrdersSection /> }.into_any(),
            }}
            <WishlistSection store=store />
        </section>
    }
}
