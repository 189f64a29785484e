//! Login Page
//!
//! Username/email and password form against the session endpoint.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Login form page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get_untracked();
        let pass = password.get_untracked();

        if user.trim().is_empty() || pass.is_empty() {
            state_for_submit.show_error("Enter your username and password");
            return;
        }

        set_submitting.set(true);

        let state = state_for_submit.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(user.trim(), &pass).await {
                Ok(session) => {
                    state.sign_in(session.user, session.theme);
                    navigate("/app", Default::default());
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center py-24 px-4">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-1">"Welcome back"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                    "Log in to your Magpie account"
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-500 dark:text-gray-400 mb-2">
                            "Username or email"
                        </label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-50 dark:bg-gray-700 text-gray-900 dark:text-white rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-gray-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-500 dark:text-gray-400 mb-2">
                            "Password"
                        </label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-50 dark:bg-gray-700 text-gray-900 dark:text-white rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-gray-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-gray-900 text-white dark:bg-white dark:text-gray-900
                               rounded-lg font-medium hover:opacity-90 disabled:opacity-50 transition-opacity"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
