//! Landing Page
//!
//! Public marketing hero with the log-in call to action.

use leptos::*;
use leptos_router::*;

use crate::components::Logo;
use crate::state::global::GlobalState;

/// Marketing landing page
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex flex-col items-center justify-center text-center py-24 px-4">
            <div class="mb-8 scale-150">
                <Logo compact=true />
            </div>

            <h1 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4 max-w-2xl">
                "Everything shiny about your projects, in one nest"
            </h1>
            <p class="text-lg text-gray-500 dark:text-gray-400 mb-8 max-w-xl">
                "Magpie gathers your project chatter and unread email into one quiet dashboard, so you can stop tab-hopping and start finishing."
            </p>

            {move || {
                if state.user.get().is_some() {
                    view! {
                        <A
                            href="/app"
                            class="px-6 py-3 bg-gray-900 text-white dark:bg-white dark:text-gray-900 rounded-lg font-medium hover:opacity-90 transition-opacity"
                        >
                            "Open Dashboard"
                        </A>
                    }
                        .into_view()
                } else {
                    view! {
                        <A
                            href="/login"
                            class="px-6 py-3 bg-gray-900 text-white dark:bg-white dark:text-gray-900 rounded-lg font-medium hover:opacity-90 transition-opacity"
                        >
                            "Log In"
                        </A>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
