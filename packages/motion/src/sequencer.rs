//! # Sequencer: builds the open and close programs
//!
//! The **open** program has two phases. During the slide phase
//! (`[0, slide_fraction]`) the page moves aside: it shifts right, shrinks,
//! drops below the safe area and rounds its corners while the toolbar's inset
//! row collapses. The rest of the timeline is split into equal, back-to-back
//! slots, one per icon. In its slot an icon settles from `settle_offset` to 0,
//! and it fades in over the same slot shifted `opacity_lead` earlier.
//!
//! The **close** program runs every property back over the whole timeline with
//! no stagger. Close is played for a fraction of the open duration, so the
//! menu snaps shut faster than it opens.

use tracing::debug;

use crate::config::MenuConfig;
use crate::layout::MenuViewSet;
use crate::program::{AnimationProgram, Direction, Property, Window};

/// Build the program for `direction`.
///
/// Only the number of views matters here; the handles themselves are resolved
/// by whoever applies the values.
pub fn build_program<H>(
    direction: Direction,
    views: &MenuViewSet<H>,
    safe_inset_top: f64,
    screen_width: f64,
    config: &MenuConfig,
) -> AnimationProgram {
    let program = match direction {
        Direction::Open => build_open(views.len(), safe_inset_top, screen_width, config),
        Direction::Close => build_close(views.len(), safe_inset_top, screen_width, config),
    };
    debug!(%program, "built menu program");
    program
}

/// `(property, closed value, open value)` for the five slide properties.
fn slide_endpoints(safe_inset_top: f64, screen_width: f64, config: &MenuConfig) -> [(Property, f64, f64); 5] {
    [
        (Property::ToolbarInsetHeight, safe_inset_top, 0.0),
        (Property::PageTranslationX, 0.0, screen_width * config.page.translation),
        (Property::PageScale, 1.0, config.page.scale),
        (Property::PageMarginTop, 0.0, safe_inset_top),
        (Property::PageCornerRadius, 0.0, config.page.corner_radius),
    ]
}

fn build_open(
    icon_count: usize,
    safe_inset_top: f64,
    screen_width: f64,
    config: &MenuConfig,
) -> AnimationProgram {
    let slide = config.animation.slide_fraction;
    let lead = config.icons.opacity_lead;
    let mut program = AnimationProgram::new(Direction::Open);

    let slide_window = Window::new(0.0, slide);
    for (property, closed, open) in slide_endpoints(safe_inset_top, screen_width, config) {
        program.add(slide_window, property, closed, open);
    }

    if icon_count == 0 {
        return program;
    }

    let slot = (1.0 - slide) / icon_count as f64;
    for index in 0..icon_count {
        let start = slide + slot * index as f64;
        let end = slide + slot * (index + 1) as f64;
        program.add(
            Window::new(start - lead, end - lead),
            Property::IconOpacity(index),
            0.0,
            1.0,
        );
        program.add(
            Window::new(start, end),
            Property::IconTranslationY(index),
            config.icons.settle_offset,
            0.0,
        );
    }
    program
}

fn build_close(
    icon_count: usize,
    safe_inset_top: f64,
    screen_width: f64,
    config: &MenuConfig,
) -> AnimationProgram {
    let mut program = AnimationProgram::new(Direction::Close);

    for (property, closed, open) in slide_endpoints(safe_inset_top, screen_width, config) {
        program.add(Window::FULL, property, open, closed);
    }
    for index in 0..icon_count {
        program.add(Window::FULL, Property::IconOpacity(index), 1.0, 0.0);
        program.add(
            Window::FULL,
            Property::IconTranslationY(index),
            0.0,
            config.icons.settle_offset,
        );
    }
    program
}
