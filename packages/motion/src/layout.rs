//! Screen geometry the controller is constructed with.

use serde::{Deserialize, Serialize};

/// Ordered icons that animate when the menu opens. Index 0 animates first.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuViewSet<H> {
    handles: Vec<H>,
}

impl<H> MenuViewSet<H> {
    pub fn new(handles: impl IntoIterator<Item = H>) -> Self {
        Self {
            handles: handles.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Padding the platform reserves above the content (notch, status bar).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeAreaInset {
    pub top: f64,
}

/// Screen size in device-independent units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: f64,
    pub height: f64,
}

/// Static row heights applied once when the screen appears.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// Safe-area rows above the toolbar and above the menu.
    pub safe_area_row: f64,
    /// Rows above and below the menu column, matching the gap left by the
    /// scaled-down page.
    pub menu_edge_row: f64,
}

impl PageLayout {
    pub fn compute(inset: SafeAreaInset, screen: ScreenMetrics, page_scale: f64) -> Self {
        Self {
            safe_area_row: inset.top,
            menu_edge_row: screen.height * (1.0 - page_scale) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_set_len() {
        let views = MenuViewSet::new(["user", "users", "star"]);
        assert_eq!(views.len(), 3);
        assert!(!views.is_empty());
        assert!(MenuViewSet::<&str>::new([]).is_empty());
    }

    #[test]
    fn test_page_layout_rows() {
        let layout = PageLayout::compute(
            SafeAreaInset { top: 44.0 },
            ScreenMetrics { width: 390.0, height: 800.0 },
            0.9,
        );
        assert_eq!(layout.safe_area_row, 44.0);
        assert!((layout.menu_edge_row - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_metrics_degrade_to_zero() {
        let layout = PageLayout::compute(SafeAreaInset::default(), ScreenMetrics::default(), 0.9);
        assert_eq!(layout, PageLayout::default());
    }
}
