//! Sidebar Navigation
//!
//! Dark icon sidebar for the app shell. Highlighting is driven by
//! [`compute_active`] over the current path, not the router's own matching.

use leptos::*;
use leptos_router::*;

use crate::components::Logo;
use crate::state::nav::{app_destinations, compute_active};

/// App shell sidebar
#[component]
pub fn SideNav() -> impl IntoView {
    let location = use_location();

    let destinations = move || compute_active(&app_destinations(), &location.pathname.get());

    view! {
        <aside class="w-20 md:w-56 shrink-0 bg-gray-900 text-gray-200 flex flex-col py-6 min-h-screen">
            <div class="px-4 mb-8 hidden md:block">
                <A href="/">
                    <Logo />
                </A>
            </div>
            <div class="px-4 mb-8 md:hidden">
                <A href="/">
                    <Logo compact=true />
                </A>
            </div>

            <nav class="flex-1 space-y-1 px-2">
                {move || {
                    destinations()
                        .into_iter()
                        .map(|dest| {
                            let class = if dest.is_active {
                                "flex items-center space-x-3 px-3 py-2 rounded-lg bg-gray-700 text-white"
                            } else {
                                "flex items-center space-x-3 px-3 py-2 rounded-lg text-gray-400 hover:text-white hover:bg-gray-800 transition-colors"
                            };

                            view! {
                                <A href=dest.prefix class=class>
                                    <span class="text-xl">{dest.icon}</span>
                                    <span class="hidden md:inline">{dest.label}</span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}
