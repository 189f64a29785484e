//! Loading States
//!
//! Spinner and skeleton placeholders shown while the session bootstrap or
//! the unread panel is in flight.

use leptos::*;

/// Centered loading spinner with an optional label
#[component]
pub fn Loading(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|text| {
                view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
            })}
        </div>
    }
}

/// Skeleton rows shaped like email previews: a short header bar over a
/// longer snippet bar
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="animate-pulse divide-y divide-gray-100 dark:divide-gray-700">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="py-3 space-y-2">
                            <div class="h-4 w-1/3 rounded bg-gray-200 dark:bg-gray-700" />
                            <div class="h-3 w-5/6 rounded bg-gray-100 dark:bg-gray-600" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
