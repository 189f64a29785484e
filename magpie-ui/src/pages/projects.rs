//! Projects Page
//!
//! Scripted assistant chat transcript next to the unread email panel.

use leptos::*;

use crate::api;
use crate::components::{ListSkeleton, Logo};
use crate::state::global::GlobalState;

/// Projects page component
#[component]
pub fn Projects() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_chat = state.clone();
    let transcript = move || {
        let name = state_for_chat
            .user
            .get()
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| "there".to_string());
        chat_script(&name)
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Projects"</h1>
                <p class="text-gray-500 dark:text-gray-400 mt-1">
                    "Catch up with the assistant and your inbox"
                </p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                // Assistant transcript
                <section class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm flex flex-col">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                        "Assistant"
                    </h2>

                    <div class="flex-1 space-y-4">
                        {move || {
                            transcript()
                                .into_iter()
                                .map(|message| view! { <ChatBubble message=message /> })
                                .collect_view()
                        }}
                    </div>

                    // Composer row; sending is not wired up yet
                    <div class="flex items-center space-x-2 mt-6 pt-4 border-t border-gray-200 dark:border-gray-700">
                        <input
                            type="text"
                            disabled=true
                            placeholder="Message the assistant (coming soon)"
                            class="flex-1 bg-gray-50 dark:bg-gray-700 text-gray-400 rounded-lg px-4 py-2
                                   border border-gray-200 dark:border-gray-600 cursor-not-allowed"
                        />
                        <button
                            disabled=true
                            class="px-4 py-2 bg-gray-200 dark:bg-gray-700 text-gray-400 rounded-lg cursor-not-allowed"
                        >
                            "Send"
                        </button>
                    </div>
                </section>

                // Unread email previews
                <UnreadEmails />
            </div>
        </div>
    }
}

/// Speaker role in the scripted transcript
#[derive(Clone, Copy, PartialEq)]
enum ChatRole {
    Assistant,
    User,
}

/// One transcript entry
#[derive(Clone)]
struct ChatMessage {
    role: ChatRole,
    text: String,
    time: String,
}

/// The canned conversation, greeting the signed-in user by name
fn chat_script(name: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: ChatRole::Assistant,
            text: format!(
                "Good morning, {}! Here's where we left off on the Falcon redesign.",
                name
            ),
            time: minutes_ago(32.0),
        },
        ChatMessage {
            role: ChatRole::User,
            text: "Did the latest mockups go out for review?".to_string(),
            time: minutes_ago(30.0),
        },
        ChatMessage {
            role: ChatRole::Assistant,
            text: "They did. Two approvals so far, and one comment about the header contrast is waiting on you.".to_string(),
            time: minutes_ago(29.0),
        },
        ChatMessage {
            role: ChatRole::User,
            text: "Great, I'll take a look after I clear my inbox.".to_string(),
            time: minutes_ago(12.0),
        },
    ]
}

/// Localized clock time a number of minutes in the past
fn minutes_ago(minutes: f64) -> String {
    let date = js_sys::Date::new_0();
    date.set_time(date.get_time() - minutes * 60_000.0);
    String::from(date.to_locale_time_string("en-US"))
}

/// One rendered chat bubble; assistant entries carry the logo avatar
#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let assistant = message.role == ChatRole::Assistant;

    let avatar = if assistant {
        view! {
            <span class="w-8 h-8 flex items-center justify-center rounded-full bg-gray-100 dark:bg-gray-700 shrink-0">
                <Logo compact=true />
            </span>
        }
            .into_view()
    } else {
        view! {
            <span class="w-8 h-8 flex items-center justify-center rounded-full bg-gray-900 text-white dark:bg-white dark:text-gray-900 text-sm font-semibold shrink-0">
                "You"
            </span>
        }
            .into_view()
    };

    let bubble_class = if assistant {
        "bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white rounded-xl rounded-tl-none px-4 py-3"
    } else {
        "bg-gray-900 text-white dark:bg-white dark:text-gray-900 rounded-xl rounded-tr-none px-4 py-3"
    };

    let row_class = if assistant {
        "flex items-start space-x-3"
    } else {
        "flex items-start space-x-3 flex-row-reverse space-x-reverse"
    };

    view! {
        <div class=row_class>
            {avatar}
            <div class="max-w-[80%]">
                <div class=bubble_class>
                    <p class="text-sm">{message.text}</p>
                </div>
                <p class="text-xs text-gray-400 mt-1">{message.time}</p>
            </div>
        </div>
    }
}

/// Unread email previews from the backend proxy
#[component]
fn UnreadEmails() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (messages, set_messages) = create_signal(None::<Vec<api::MessagePreview>>);
    let (unavailable, set_unavailable) = create_signal(false);

    // Fetch once on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_messages().await {
                Ok(previews) => {
                    set_messages.set(Some(previews));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch messages: {}", e).into());
                    state.show_error(&format!("Could not load unread emails: {}", e));
                    set_unavailable.set(true);
                    set_messages.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <section class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                "Unread Emails"
            </h2>

            {move || {
                match messages.get() {
                    None => view! { <ListSkeleton count=3 /> }.into_view(),
                    Some(previews) if previews.is_empty() => {
                        let text = if unavailable.get() {
                            "Your inbox is unavailable right now."
                        } else {
                            "No unread emails. Enjoy the quiet."
                        };
                        view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400 py-4">{text}</p>
                        }
                            .into_view()
                    }
                    Some(previews) => {
                        previews
                            .into_iter()
                            .map(|preview| view! { <EmailRow preview=preview /> })
                            .collect_view()
                    }
                }
            }}
        </section>
    }
}

/// One email preview row
#[component]
fn EmailRow(preview: api::MessagePreview) -> impl IntoView {
    let time = preview
        .created_at
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%b %d").to_string())
        .unwrap_or_default();

    let sender = preview.sender();
    let subject = preview.subject.clone().unwrap_or_else(|| "(no subject)".to_string());
    let snippet = preview.snippet.clone().unwrap_or_default();

    view! {
        <div class="py-3 border-b border-gray-100 dark:border-gray-700 last:border-0">
            <div class="flex items-center justify-between">
                <span class="text-sm font-semibold text-gray-900 dark:text-white">{sender}</span>
                <span class="text-xs text-gray-400 flex items-center space-x-1">
                    {preview.has_attachments.then(|| view! { <span>"📎"</span> })}
                    <span>{time}</span>
                </span>
            </div>
            <p class="text-sm text-gray-700 dark:text-gray-300">{subject}</p>
            <p class="text-xs text-gray-400 truncate">{snippet}</p>
        </div>
    }
}
