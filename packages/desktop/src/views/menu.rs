use dioxus::prelude::*;

use ui::views::MenuPageView;

#[component]
pub fn Menu() -> Element {
    rsx! {
        MenuPageView {}
    }
}
