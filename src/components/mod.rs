//! UI Components
//!
//! Leptos components mounted into server-rendered admin pages.

mod toggle_button;

pub use toggle_button::mount_toggle_buttons;
