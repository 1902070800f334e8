use leptos::prelude::*;

/// Static about/shipping/returns page.
#[component]
pub fn InfoPage() -> impl IntoView {
    view! {
        <section class="info-page">
            <h1 class="section-title">"About Vitrine"</h1>
            <p>
                "Vitrine is a curated storefront for wearable technology. We stock a small
                number of products we actually use, from smart glasses to health monitors,
                and keep the catalog honest rather than long."
            </p>
            <h2 class="section-subtitle">"Shipping"</h2>
            <p>
                "Orders ship within two business days. Standard shipping is a flat fee,
                waived on any order with a discount code applied."
            </p>
            <h2 class="section-subtitle">"Returns"</h2>
            <p>
                "Unworn items can be returned within 30 days of delivery for a full refund.
                Contact us first and we'll send a prepaid label."
            </p>
        </section>
    }
}
