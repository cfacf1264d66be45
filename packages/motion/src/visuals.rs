use crate::config::MenuConfig;
use crate::controller::MenuState;
use crate::playback::PropertySink;
use crate::program::Property;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconVisual {
    pub opacity: f64,
    pub translation_y: f64,
}

/// Current value of every animated property on the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuVisuals {
    pub toolbar_inset_height: f64,
    pub translation_x: f64,
    pub scale: f64,
    pub margin_top: f64,
    pub corner_radius: f64,
    pub icons: Vec<IconVisual>,
}

impl MenuVisuals {
    /// Resting values for `state`, i.e. where the matching program ends.
    pub fn at_rest(
        state: MenuState,
        icon_count: usize,
        safe_inset_top: f64,
        screen_width: f64,
        config: &MenuConfig,
    ) -> Self {
        match state {
            MenuState::Closed => Self {
                toolbar_inset_height: safe_inset_top,
                translation_x: 0.0,
                scale: 1.0,
                margin_top: 0.0,
                corner_radius: 0.0,
                icons: vec![
                    IconVisual {
                        opacity: 0.0,
                        translation_y: config.icons.settle_offset,
                    };
                    icon_count
                ],
            },
            MenuState::Open => Self {
                toolbar_inset_height: 0.0,
                translation_x: screen_width * config.page.translation,
                scale: config.page.scale,
                margin_top: safe_inset_top,
                corner_radius: config.page.corner_radius,
                icons: vec![
                    IconVisual {
                        opacity: 1.0,
                        translation_y: 0.0,
                    };
                    icon_count
                ],
            },
        }
    }

    pub fn icon(&self, index: usize) -> Option<&IconVisual> {
        self.icons.get(index)
    }
}

impl PropertySink for MenuVisuals {
    fn apply(&mut self, property: Property, value: f64) {
        match property {
            Property::ToolbarInsetHeight => self.toolbar_inset_height = value,
            Property::PageTranslationX => self.translation_x = value,
            Property::PageScale => self.scale = value,
            Property::PageMarginTop => self.margin_top = value,
            Property::PageCornerRadius => self.corner_radius = value,
            Property::IconOpacity(i) => {
                if let Some(icon) = self.icons.get_mut(i) {
                    icon.opacity = value;
                }
            }
            Property::IconTranslationY(i) => {
                if let Some(icon) = self.icons.get_mut(i) {
                    icon.translation_y = value;
                }
            }
        }
    }
}
