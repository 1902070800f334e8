use leptos::prelude::*;

use vitrine::state::Page;

use crate::{
    pages::card::{CardModel, ProductCard},
    store::Store,
};

const FEATURED_COUNT: usize = 3;

/// Hero call-to-action labels and their destination pages, in display
/// order. The first action is the primary one.
fn hero_actions() -> [(&'static str, Page); 2] {
    [("Explore Collection", Page::Shop), ("Learn More", Page::Info)]
}

/// Landing page with the hero banner and featured products.
#[component]
pub fn HomePage(store: Store) -> impl IntoView {
    let featured: Vec<CardModel> = store.state.with_untracked(|state| {
        state
            .catalog()
            .featured(FEATURED_COUNT)
            .iter()
            .map(CardModel::from)
            .collect()
    });

    view! {
        <section class="hero">
            <h1 class="hero-title">"Wearable tech, worn well"</h1>
            <p class="hero-subtitle">
                "Smart glasses, watches, rings and more from the brands defining the category."
            </p>
            <div class="hero-actions">
                {hero_actions()
                    .into_iter()
                    .enumerate()
                    .map(|(position, (label, page))| {
                        let class = if position == 0 {
                            "button button-primary button-large"
                        } else {
                            "button button-large"
                        };

                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| store.navigate(page)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="featured" aria-label="Featured products">
            <h2 class="section-title">"Featured Products"</h2>
            <div class="product-grid">
                {featured
                    .into_iter()
                    .map(|model| view! { <ProductCard store=store model=model /> })
                    .collect_view()}
            </div>
        </section>
    }
}
