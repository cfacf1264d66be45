//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::load_menu_config;

pub mod platform;

pub mod views;

mod icon_menu;
pub use icon_menu::{IconMenu, MenuIcon};

mod user_list;
pub use user_list::UserList;
