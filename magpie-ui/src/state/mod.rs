//! State Management
//!
//! Global reactive state plus the pure theme and navigation logic it feeds.

pub mod global;
pub mod nav;
pub mod theme;

pub use global::{provide_global_state, GlobalState, SessionUser};
pub use nav::{app_destinations, compute_active, NavDestination};
pub use theme::{resolve, MutationStatus, PendingMutation, Theme};
