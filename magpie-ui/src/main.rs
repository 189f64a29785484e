//! Magpie
//!
//! Marketing site and authenticated dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Public landing page with log-in call to action
//! - Session-gated app shell with sidebar navigation
//! - Theme switching with optimistic display
//! - Unread email previews via the backend mailbox proxy
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Magpie API over HTTP; the session
//! rides on an HttpOnly cookie, so every request is sent with credentials.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
