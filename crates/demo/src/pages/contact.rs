use leptos::prelude::*;

use vitrine::state::Notification;

use crate::store::Store;

const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

/// Validate the contact form.
fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err("Please fill in all fields".to_string());
    }

    Ok(())
}

/// Contact page with a mocked message form.
#[component]
pub fn ContactPage(store: Store) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let validated = validate_contact(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );

        match validated {
            Ok(()) => {
                store.show_toast(Notification::success(THANK_YOU));
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(text) => store.show_toast(Notification::error(text)),
        }
    };

    view! {
        <section class="contact-page">
            <h1 class="section-title">"Contact Us"</h1>
            <p class="contact-blurb">
                "Questions about an order or a product? Send us a message and we'll reply within one business day."
            </p>
            <form class="contact-form" on:submit=on_submit>
                <label>
                    <span>"Name"</span>
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
                    <span>"Message"</span>
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="button button-primary">"Send Message"</button>
            </form>
        </section>
    }
}
