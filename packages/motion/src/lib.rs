//! Platform-free core of the icon menu screen: configuration, the animation
//! sequencer, the playback engine and the controller that guards it.

pub mod config;
pub mod easing;
pub mod error;
pub mod layout;
pub mod models;
pub mod playback;
pub mod program;
pub mod sequencer;
pub mod visuals;

mod controller;
pub use controller::{MenuController, MenuState};

pub use config::MenuConfig;
pub use easing::Easing;
pub use error::MotionError;
pub use layout::{MenuViewSet, PageLayout, SafeAreaInset, ScreenMetrics};
pub use models::{sample_users, UserRecord};
pub use playback::{play, CommitOptions, FrameClock, Playback, PlaybackStatus, PropertySink};
pub use program::{AnimationProgram, Direction, Interpolation, Property, Window};
pub use sequencer::build_program;
pub use visuals::{IconVisual, MenuVisuals};
