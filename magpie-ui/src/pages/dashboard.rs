//! Dashboard Page
//!
//! Landing view inside the app shell: greeting and summary cards.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// App dashboard page
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_greeting = state.clone();
    let greeting = move || {
        state_for_greeting
            .user
            .get()
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{greeting}</h1>
                <p class="text-gray-500 dark:text-gray-400 mt-1">"Here's what's waiting for you"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <SummaryCard
                    icon="📁"
                    title="Projects"
                    body="The assistant transcript and your project notes live here."
                    href="/app/projects"
                />
                <SummaryCard
                    icon="📬"
                    title="Unread Emails"
                    body="The latest unread messages, fetched through the Magpie proxy."
                    href="/app/projects"
                />
                <ThemeCard />
            </div>
        </div>
    }
}

/// Linked summary card
#[component]
fn SummaryCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm hover:shadow transition-shadow"
        >
            <div class="text-3xl mb-3">{icon}</div>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-1">{title}</h2>
            <p class="text-sm text-gray-500 dark:text-gray-400">{body}</p>
        </A>
    }
}

/// Card reflecting the currently displayed theme
#[component]
fn ThemeCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_icon = state.clone();
    let state_for_body = state.clone();

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm">
            <div class="text-3xl mb-3">{move || state_for_icon.display_theme().icon()}</div>
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-1">"Theme"</h2>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {move || format!("Currently {}. Switch it from the site footer.", state_for_body.display_theme().label())}
            </p>
        </div>
    }
}
