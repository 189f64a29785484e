//! API Layer
//!
//! HTTP client functions and response types for the Magpie backend.

pub mod client;

pub use client::*;
