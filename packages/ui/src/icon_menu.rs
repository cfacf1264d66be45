//! The column of menu icons revealed behind the page.

use dioxus::prelude::*;
use motion::{IconVisual, PageLayout};

use crate::icons::{FaComment, FaGear, FaStar, FaUser, FaUsers};
use crate::Icon;

/// Menu entries, in the order they animate in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    User,
    Users,
    Star,
    Message,
    Settings,
}

impl MenuIcon {
    pub const ALL: [MenuIcon; 5] = [
        MenuIcon::User,
        MenuIcon::Users,
        MenuIcon::Star,
        MenuIcon::Message,
        MenuIcon::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuIcon::User => "Profile",
            MenuIcon::Users => "Contacts",
            MenuIcon::Star => "Favorites",
            MenuIcon::Message => "Messages",
            MenuIcon::Settings => "Settings",
        }
    }
}

#[component]
pub fn IconMenu(layout: PageLayout, icons: Vec<IconVisual>) -> Element {
    rsx! {
        div {
            class: "icon-menu",
            div { style: "height: {layout.safe_area_row}px" }
            div { style: "height: {layout.menu_edge_row}px" }
            div {
                class: "icon-menu-items",
                for (icon, visual) in MenuIcon::ALL.into_iter().zip(icons) {
                    div {
                        key: "{icon.label()}",
                        class: "icon-menu-item",
                        title: icon.label(),
                        style: "opacity: {visual.opacity}; transform: translateY({visual.translation_y}px);",
                        MenuGlyph { icon }
                    }
                }
            }
            div { style: "height: {layout.menu_edge_row}px" }
        }
    }
}

#[component]
fn MenuGlyph(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::User => rsx! { Icon { icon: FaUser, width: 22, height: 22 } },
        MenuIcon::Users => rsx! { Icon { icon: FaUsers, width: 22, height: 22 } },
        MenuIcon::Star => rsx! { Icon { icon: FaStar, width: 22, height: 22 } },
        MenuIcon::Message => rsx! { Icon { icon: FaComment, width: 22, height: 22 } },
        MenuIcon::Settings => rsx! { Icon { icon: FaGear, width: 22, height: 22 } },
    }
}
