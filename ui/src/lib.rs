//! Shared UI crate for the agent scorecard generator. Rendering, export and
//! every view live here; the desktop and web crates are thin launchers.

pub mod core;
pub mod editor;
pub mod export;
pub mod i18n;
pub mod render;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
