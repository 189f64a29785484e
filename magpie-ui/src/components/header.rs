//! Marketing Header
//!
//! Top bar for the public pages: logo on the left, a Log In button or the
//! signed-in user menu on the right.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Logo;
use crate::state::global::GlobalState;

/// Marketing layout header
#[component]
pub fn MarketingHeader() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header class="border-b border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center">
                        <Logo />
                    </A>

                    {move || {
                        match state.user.get() {
                            Some(user) => {
                                view! { <UserMenu name=user.display_name().to_string() /> }
                                    .into_view()
                            }
                            None => {
                                view! {
                                    <A
                                        href="/login"
                                        class="px-4 py-2 bg-gray-900 text-white dark:bg-white dark:text-gray-900 rounded-lg font-medium hover:opacity-90 transition-opacity"
                                    >
                                        "Log In"
                                    </A>
                                }
                                    .into_view()
                            }
                        }
                    }}
                </div>
            </div>
        </header>
    }
}

/// Signed-in menu: link into the app plus a log-out button
#[component]
fn UserMenu(name: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::logout().await {
                Ok(()) => {
                    state.sign_out();
                    state.show_success("Signed out");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    state.show_error(&format!("Logout failed: {}", e));
                }
            }
        });
    };

    view! {
        <div class="flex items-center space-x-4">
            <A
                href="/app"
                class="text-sm font-medium text-gray-700 dark:text-gray-200 hover:text-gray-900 dark:hover:text-white transition-colors"
            >
                {name}
            </A>
            <button
                on:click=on_logout
                class="px-3 py-2 text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            >
                "Log Out"
            </button>
        </div>
    }
}
