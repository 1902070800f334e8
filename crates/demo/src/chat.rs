use leptos::{prelude::*, task};

use crate::timing::wait_for_timeout;

const REPLY_DELAY_MS: i32 = 900;

const CANNED_REPLY: &str =
    "Thanks for your message! Our team will get back to you shortly.";

const GREETING: &str = "Hi there! How can we help you today?";

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    from_user: bool,
    text: String,
}

fn push_message(messages: RwSignal<Vec<ChatMessage>>, from_user: bool, text: String) {
    messages.update(|log| {
        log.push(ChatMessage { from_user, text });
    });
}

/// Floating chat widget with a canned support reply.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(String::new());
    let messages = RwSignal::new(vec![ChatMessage {
        from_user: false,
        text: GREETING.to_string(),
    }]);

    let send = move || {
        let text = draft.get_untracked().trim().to_string();

        if text.is_empty() {
            return;
        }

        push_message(messages, true, text);
        draft.set(String::new());

        task::spawn_local(async move {
            wait_for_timeout(REPLY_DELAY_MS).await;

            push_message(messages, false, CANNED_REPLY.to_string());
        });
    };

    view! {
        <div class="chat-widget">
            {move || {
                if !open.get() {
                    return ().into_any();
                }

                view! {
                    <div class="chat-panel" role="log" aria-label="Support chat">
                        <div class="chat-messages">
                            {move || {
                                messages
                                    .get()
                                    .into_iter()
                                    .map(|message| {
                                        let class = if message.from_user {
                                            "chat-bubble chat-bubble-user"
                                        } else {
                                            "chat-bubble chat-bubble-agent"
                                        };

                                        view! { <p class=class>{message.text}</p> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <form
                            class="chat-compose"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                send();
                            }
                        >
                            <input
                                type="text"
                                placeholder="Type a message"
                                aria-label="Chat message"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            />
                            <button type="submit" class="button button-primary">
                                "Send"
                            </button>
                        </form>
                    </div>
                }
                .into_any()
            }}
            <button
                type="button"
                class="chat-toggle"
                aria-label=move || if open.get() { "Close chat" } else { "Open chat" }
                on:click=move |_| open.update(|value| *value = !*value)
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
                    class="lucide lucide-message-circle-icon lucide-message-circle"
                    aria-hidden="true"
                >
                    <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"></path>
                </svg>
            </button>
        </div>
    }
}
