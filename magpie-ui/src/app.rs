//! App Root Component
//!
//! Main application component with routing and global providers. Routes are
//! split between the public marketing shell and the session-gated `/app`
//! shell, each wrapping its children through an [`Outlet`].

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Loading, MarketingHeader, SideNav, ThemeSwitch, Toast};
use crate::pages::{Dashboard, Home, Login, Projects};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::theme::apply_document_theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Restore the session from the cookie before gated routes render
    let state_for_session = state.clone();
    create_effect(move |_| {
        let state = state_for_session.clone();
        spawn_local(async move {
            match api::fetch_session().await {
                Ok(Some(session)) => {
                    state.sign_in(session.user, session.theme);
                }
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("Session check failed: {}", e).into());
                }
            }
            state.session_loaded.set(true);
        });
    });

    // Keep the document's theme class in step with the displayed theme
    let state_for_theme = state.clone();
    create_effect(move |_| {
        apply_document_theme(state_for_theme.display_theme());
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=MarketingLayout>
                    <Route path="" view=Home />
                    <Route path="login" view=Login />
                </Route>
                <Route path="/app" view=AppLayout>
                    <Route path="" view=Dashboard />
                    <Route path="projects" view=Projects />
                </Route>
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Shell for the public marketing pages
#[component]
fn MarketingLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white flex flex-col">
            <MarketingHeader />

            <main class="flex-1 container mx-auto px-4 py-8">
                <Outlet />
            </main>

            <MarketingFooter />
        </div>
    }
}

/// Marketing footer carrying the theme switch
#[component]
fn MarketingFooter() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 dark:border-gray-700 py-6 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                <span>"© 2026 Magpie. All the shiny things, one nest."</span>
                <ThemeSwitch />
            </div>
        </footer>
    }
}

/// Shell for the authenticated dashboard; signed-out visitors land on login
#[component]
fn AppLayout() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if !state.session_loaded.get() {
                view! {
                    <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
                        <Loading label="Checking your session..." />
                    </div>
                }
                    .into_view()
            } else if state.user.get().is_none() {
                view! { <Redirect path="/login" /> }.into_view()
            } else {
                view! {
                    <div class="min-h-screen flex bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white">
                        <SideNav />

                        <main class="flex-1 px-4 md:px-8 py-8 overflow-y-auto">
                            <Outlet />
                        </main>
                    </div>
                }
                    .into_view()
            }
        }}
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center text-center bg-white dark:bg-gray-900 text-gray-900 dark:text-white">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 dark:text-gray-400 mb-6">
                "The page you're looking for doesn't exist."
            </p>
            <A
                href="/"
                class="px-6 py-3 bg-gray-900 text-white dark:bg-white dark:text-gray-900 hover:opacity-90 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
