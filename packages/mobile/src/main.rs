use dioxus::prelude::*;
use views::Menu;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Menu {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // env(safe-area-inset-*) only reports the notch with viewport-fit=cover
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }
        Router::<Route> {}
    }
}
