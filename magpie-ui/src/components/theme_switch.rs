//! Theme Switch
//!
//! Cycles system, light, dark. A click updates the display immediately
//! through the optimistic resolver; the submission settles when the server
//! answers, falling back to the confirmed value on failure.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Theme cycle button
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let display = {
        let state = state.clone();
        move || state.display_theme()
    };

    let state_for_click = state.clone();
    let on_click = move |_| {
        let next = state_for_click.display_theme_untracked().next();

        // Signed-out visitors keep a session-local choice; there is no
        // server preference to submit against
        if state_for_click.user.get_untracked().is_none() {
            state_for_click.theme_confirmed.set(next);
            return;
        }

        let seq = state_for_click.begin_theme_mutation(next);
        let state = state_for_click.clone();

        spawn_local(async move {
            match api::save_theme(next).await {
                Ok(confirmed) => {
                    state.confirm_theme_mutation(seq, confirmed);
                }
                Err(e) => {
                    state.fail_theme_mutation(seq);
                    state.show_error(&format!("Could not save theme: {}", e));
                }
            }
        });
    };

    let display_label = display.clone();

    view! {
        <button
            on:click=on_click
            title="Switch theme"
            class="flex items-center space-x-2 px-3 py-2 rounded-lg text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
        >
            <span>{move || display().icon()}</span>
            <span>{move || display_label().label()}</span>
        </button>
    }
}
