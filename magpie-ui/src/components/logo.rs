//! Logo Component
//!
//! The Magpie bird glyph, with or without the wordmark.

use leptos::*;

/// Brand logo
#[component]
pub fn Logo(
    /// Glyph only, no wordmark
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    view! {
        <span class="flex items-center space-x-2">
            <svg
                viewBox="0 0 24 24"
                class="w-7 h-7 text-gray-900 dark:text-white"
                fill="currentColor"
                aria-hidden="true"
            >
                <path d="M21.2 5.4c-1.3-1.6-3.5-2.1-5.4-1.2L9.4 7.1 3.8 5.4 2.6 7.6l4.5 2.3-4.3 4.3 2.1 1.2 4-2.7 2 5.4 2.2-.5-1-6.1 5.7-2.6c2-.9 3.2-2.8 3.4-3.5z" />
                <circle cx="17.6" cy="5.8" r="0.9" fill="var(--logo-eye, #fff)" />
            </svg>
            {(!compact).then(|| {
                view! {
                    <span class="text-xl font-bold text-gray-900 dark:text-white">"Magpie"</span>
                }
            })}
        </span>
    }
}
