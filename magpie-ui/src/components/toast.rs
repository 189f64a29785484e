//! Toast Notifications
//!
//! Floating success and error messages fed by the global state signals.
//! Each message clears itself after its timeout; clicking one dismisses
//! it early.

use leptos::*;

use crate::state::global::GlobalState;

/// Which kind of message a toast carries
#[derive(Clone, Copy, PartialEq)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    fn container_class(self) -> &'static str {
        match self {
            ToastKind::Success => {
                "flex items-center space-x-3 bg-emerald-600 text-white px-4 py-3 \
                 rounded-lg shadow-lg cursor-pointer animate-slide-in"
            }
            ToastKind::Error => {
                "flex items-center space-x-3 bg-rose-600 text-white px-4 py-3 \
                 rounded-lg shadow-lg cursor-pointer animate-slide-in"
            }
        }
    }
}

/// Toast stack anchored to the bottom-right corner
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                success.get().map(|text| {
                    view! {
                        <ToastCard
                            kind=ToastKind::Success
                            text=text
                            on_dismiss=move || success.set(None)
                        />
                    }
                })
            }}
            {move || {
                error.get().map(|text| {
                    view! {
                        <ToastCard
                            kind=ToastKind::Error
                            text=text
                            on_dismiss=move || error.set(None)
                        />
                    }
                })
            }}
        </div>
    }
}

/// One rendered toast
#[component]
fn ToastCard<F>(kind: ToastKind, #[prop(into)] text: String, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div
            class=kind.container_class()
            role="status"
            title="Dismiss"
            on:click=move |_| on_dismiss()
        >
            <span class="text-lg">{kind.icon()}</span>
            <span class="text-sm font-medium">{text}</span>
        </div>
    }
}
