//! UI Components
//!
//! Reusable Leptos components for the marketing site and the app shell.

pub mod header;
pub mod loading;
pub mod logo;
pub mod nav;
pub mod theme_switch;
pub mod toast;

pub use header::MarketingHeader;
pub use loading::{ListSkeleton, Loading};
pub use logo::Logo;
pub use nav::SideNav;
pub use theme_switch::ThemeSwitch;
pub use toast::Toast;
