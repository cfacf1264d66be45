use chrono::Utc;
use dioxus::prelude::*;
use motion::{
    play, sample_users, MenuController, MenuState, MenuViewSet, MenuVisuals, PageLayout, Property,
    PropertySink,
};

use crate::config::load_menu_config;
use crate::icons::FaBars;
use crate::platform::{safe_area_inset, screen_metrics, TimerClock};
use crate::{IconMenu, Icon, MenuIcon, UserList};

const MENU_CSS: Asset = asset!("/assets/styling/menu.css");

/// Applies interpolated values to the screen's visual state.
struct SignalSink(Signal<MenuVisuals>);

impl PropertySink for SignalSink {
    fn apply(&mut self, property: Property, value: f64) {
        self.0.write().apply(property, value);
    }
}

/// The page with the slide-out icon menu behind it.
///
/// The hamburger button toggles the menu. It stays disabled until the screen
/// geometry has been captured, and taps during an animation are ignored.
#[component]
pub fn MenuPageView(
    /// Title shown in the toolbar.
    #[props(default = "Messages".to_string())]
    title: String,
) -> Element {
    let mut controller = use_signal(|| {
        MenuController::new(MenuViewSet::new(MenuIcon::ALL), load_menu_config())
    });
    let mut visuals = use_signal(|| {
        let c = controller.peek();
        MenuVisuals::at_rest(MenuState::Closed, c.views().len(), 0.0, 0.0, c.config())
    });
    let mut layout = use_signal(PageLayout::default);
    let now = use_hook(Utc::now);
    let users = use_hook(|| sample_users(now));

    // Capture platform geometry once the page is mounted
    use_effect(move || {
        spawn(async move {
            let inset = safe_area_inset().await;
            let screen = screen_metrics().await;
            tracing::debug!("Screen {}x{}, safe area top {}", screen.width, screen.height, inset.top);

            let page = controller.write().appear(inset, screen);
            layout.set(page);
            let rest = {
                let c = controller.peek();
                // A running playback owns the visuals until it completes.
                (!c.is_animating()).then(|| {
                    MenuVisuals::at_rest(c.state(), c.views().len(), inset.top, screen.width, c.config())
                })
            };
            if let Some(rest) = rest {
                visuals.set(rest);
            }
        });
    });

    let on_toggle = move |_| {
        let Some(playback) = controller.write().on_toggle_requested() else {
            return;
        };
        spawn(async move {
            let mut sink = SignalSink(visuals);
            play(playback, &TimerClock, &mut sink).await;
            controller.write().complete();
        });
    };

    let v = visuals();
    let page_style = format!(
        "transform: translateX({}px) scale({}); margin-top: {}px; border-radius: {}px;",
        v.translation_x, v.scale, v.margin_top, v.corner_radius
    );

    rsx! {
        document::Stylesheet { href: MENU_CSS }

        div {
            class: "menu-screen",
            IconMenu { layout: layout(), icons: v.icons.clone() }

            div {
                class: "menu-page",
                style: "{page_style}",
                div {
                    class: "toolbar-safe-area",
                    style: "height: {v.toolbar_inset_height}px",
                }
                header {
                    class: "toolbar",
                    button {
                        class: "toolbar-menu-button",
                        title: "Menu",
                        disabled: !controller.read().has_appeared(),
                        onclick: on_toggle,
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                    span { class: "toolbar-title", "{title}" }
                }
                UserList { users, now }
            }
        }
    }
}
