//! # Menu configuration: `menu.toml`
//!
//! Tunables for the slide-out menu animation. The UI looks for the file in the
//! platform config directory; a missing or empty file is equivalent to
//! [`MenuConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [animation]
//! duration_ms = 600        # wall-clock length of the open program
//! slide_fraction = 0.25    # share of the timeline taken by the slide phase
//! tick_ms = 16             # playback sampling interval
//! easing = "linear"
//!
//! [page]
//! scale = 0.9              # page scale while the menu is open
//! translation = 0.35       # horizontal shift as a fraction of screen width
//! corner_radius = 5.0
//!
//! [icons]
//! settle_offset = -10.0    # vertical offset an icon settles from
//! opacity_lead = 0.05      # how much earlier an icon starts fading in
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`MenuConfig`] | Top-level config with builder helpers, TOML (de)serialisation and [`validate`](MenuConfig::validate). |
//! | [`AnimationConfig`] | Timing: duration, slide fraction, tick and easing. |
//! | [`PageConfig`] | Where the page ends up when the menu is open. |
//! | [`IconConfig`] | Per-icon settle offset and fade-in lead. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::MotionError;

/// Top-level configuration stored in `menu.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub icons: IconConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of the open program in milliseconds. The close program runs for
    /// `duration_ms * slide_fraction`.
    pub duration_ms: u64,
    pub slide_fraction: f64,
    pub tick_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            slide_fraction: 0.25,
            tick_ms: 16,
            easing: Easing::Linear,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scale: f64,
    pub translation: f64,
    pub corner_radius: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scale: 0.9,
            translation: 0.35,
            corner_radius: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub settle_offset: f64,
    pub opacity_lead: f64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            settle_offset: -10.0,
            opacity_lead: 0.05,
        }
    }
}

impl MenuConfig {
    /// Builder method to set the open duration.
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.animation.duration_ms = duration_ms;
        self
    }

    /// Builder method to set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation.easing = easing;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "menu.toml"
    }

    /// Wall-clock duration of the open program.
    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.animation.duration_ms)
    }

    /// Wall-clock duration of the close program. Truncates to whole
    /// milliseconds.
    pub fn close_duration(&self) -> Duration {
        let ms = (self.animation.duration_ms as f64 * self.animation.slide_fraction) as u64;
        Duration::from_millis(ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.animation.tick_ms)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, MotionError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, MotionError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the sequencer cannot lay out on a `[0, 1]` timeline.
    pub fn validate(&self) -> Result<(), MotionError> {
        let anim = &self.animation;
        if anim.duration_ms == 0 {
            return Err(MotionError::invalid("animation.duration_ms", "must be positive"));
        }
        if anim.tick_ms == 0 {
            return Err(MotionError::invalid("animation.tick_ms", "must be positive"));
        }
        if !(anim.slide_fraction > 0.0 && anim.slide_fraction < 1.0) {
            return Err(MotionError::invalid(
                "animation.slide_fraction",
                format!("must lie strictly between 0 and 1, got {}", anim.slide_fraction),
            ));
        }
        if !(self.page.scale > 0.0 && self.page.scale <= 1.0) {
            return Err(MotionError::invalid(
                "page.scale",
                format!("must lie in (0, 1], got {}", self.page.scale),
            ));
        }
        let lead = self.icons.opacity_lead;
        if lead < 0.0 || lead > anim.slide_fraction {
            return Err(MotionError::invalid(
                "icons.opacity_lead",
                format!("must lie in [0, slide_fraction], got {lead}"),
            ));
        }
        Ok(())
    }
}
