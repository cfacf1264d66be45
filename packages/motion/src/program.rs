//! # Animation programs
//!
//! An [`AnimationProgram`] is a flat list of [`Interpolation`]s. Each one drives
//! a single [`Property`] from `from` to `to` while the program's normalised
//! progress moves through its [`Window`]. Windows are fractions of the
//! program's total duration, so the same program can be played at any speed.

use std::fmt;

/// Which way the menu is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

impl Direction {
    /// Name the playback engine registers the program under.
    pub fn animation_name(self) -> &'static str {
        match self {
            Direction::Open => "ExpandAnimation",
            Direction::Close => "CollapseAnimation",
        }
    }
}

/// A view property an interpolation writes to.
///
/// Icon properties carry the icon's index in the
/// [`MenuViewSet`](crate::MenuViewSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    ToolbarInsetHeight,
    PageTranslationX,
    PageScale,
    PageMarginTop,
    PageCornerRadius,
    IconOpacity(usize),
    IconTranslationY(usize),
}

impl Property {
    /// The five container properties animated during the slide phase.
    pub const SLIDE: [Property; 5] = [
        Property::ToolbarInsetHeight,
        Property::PageTranslationX,
        Property::PageScale,
        Property::PageMarginTop,
        Property::PageCornerRadius,
    ];

    pub fn icon_index(self) -> Option<usize> {
        match self {
            Property::IconOpacity(i) | Property::IconTranslationY(i) => Some(i),
            _ => None,
        }
    }
}

/// A `[start, end]` span of normalised program progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    pub const FULL: Window = Window { start: 0.0, end: 1.0 };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    /// Progress local to this window, clamped to `[0, 1]`.
    ///
    /// An empty window jumps straight to 1 once `progress` reaches its start.
    pub fn local(&self, progress: f64) -> f64 {
        if self.is_empty() {
            return if progress >= self.start { 1.0 } else { 0.0 };
        }
        ((progress - self.start) / self.len()).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    pub window: Window,
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

impl Interpolation {
    pub fn new(window: Window, property: Property, from: f64, to: f64) -> Self {
        Self {
            window,
            property,
            from,
            to,
        }
    }

    /// Value at window-local progress `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationProgram {
    pub direction: Direction,
    pub segments: Vec<Interpolation>,
}

impl AnimationProgram {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            segments: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.direction.animation_name()
    }

    pub fn add(&mut self, window: Window, property: Property, from: f64, to: f64) {
        self.segments
            .push(Interpolation::new(window, property, from, to));
    }

    /// First interpolation that drives `property`.
    pub fn find(&self, property: Property) -> Option<&Interpolation> {
        self.segments.iter().find(|s| s.property == property)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for AnimationProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} segments)", self.name(), self.segments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_local_progress() {
        let w = Window::new(0.25, 0.75);
        assert_eq!(w.local(0.0), 0.0);
        assert_eq!(w.local(0.5), 0.5);
        assert_eq!(w.local(1.0), 1.0);
    }

    #[test]
    fn test_empty_window_jumps() {
        let w = Window::new(0.5, 0.5);
        assert!(w.is_empty());
        assert_eq!(w.local(0.49), 0.0);
        assert_eq!(w.local(0.5), 1.0);
    }

    #[test]
    fn test_interpolation_value() {
        let seg = Interpolation::new(Window::FULL, Property::PageScale, 1.0, 0.9);
        assert_eq!(seg.value_at(0.0), 1.0);
        assert!((seg.value_at(0.5) - 0.95).abs() < 1e-12);
        assert_eq!(seg.value_at(1.0), 0.9);
    }

    #[test]
    fn test_program_name_follows_direction() {
        assert_eq!(AnimationProgram::new(Direction::Open).name(), "ExpandAnimation");
        assert_eq!(
            AnimationProgram::new(Direction::Close).to_string(),
            "CollapseAnimation (0 segments)"
        );
    }
}
