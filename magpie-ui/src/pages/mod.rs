//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod projects;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use projects::Projects;
