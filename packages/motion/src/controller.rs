//! # Menu controller
//!
//! [`MenuController`] owns everything the menu button needs: the icon set, the
//! configuration, the geometry captured when the screen appeared, the explicit
//! open/closed state and the "animation in progress" guard.
//!
//! A toggle is split in two so the host can await the playback between them:
//!
//! 1. [`on_toggle_requested`](MenuController::on_toggle_requested) flips the
//!    state, raises the guard and returns the [`Playback`] to run. It returns
//!    `None` before [`appear`](MenuController::appear) has captured the screen
//!    geometry, and while a previous playback is still running.
//! 2. [`complete`](MenuController::complete) lowers the guard once the host's
//!    playback has finished.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::MenuConfig;
use crate::layout::{MenuViewSet, PageLayout, SafeAreaInset, ScreenMetrics};
use crate::playback::{CommitOptions, Playback};
use crate::program::Direction;
use crate::sequencer::build_program;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Direction a toggle from this state animates in.
    pub fn toggle_direction(self) -> Direction {
        match self {
            MenuState::Closed => Direction::Open,
            MenuState::Open => Direction::Close,
        }
    }

    fn after(direction: Direction) -> Self {
        match direction {
            Direction::Open => MenuState::Open,
            Direction::Close => MenuState::Closed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MenuController<H> {
    views: MenuViewSet<H>,
    config: MenuConfig,
    inset: SafeAreaInset,
    /// `None` until the screen has appeared.
    screen: Option<ScreenMetrics>,
    state: MenuState,
    animating: bool,
}

impl<H> MenuController<H> {
    pub fn new(views: MenuViewSet<H>, config: MenuConfig) -> Self {
        Self {
            views,
            config,
            inset: SafeAreaInset::default(),
            screen: None,
            state: MenuState::Closed,
            animating: false,
        }
    }

    /// Record the platform geometry when the screen becomes visible and
    /// return the static row heights to apply.
    pub fn appear(&mut self, inset: SafeAreaInset, screen: ScreenMetrics) -> PageLayout {
        self.inset = inset;
        self.screen = Some(screen);
        PageLayout::compute(inset, screen, self.config.page.scale)
    }

    pub fn views(&self) -> &MenuViewSet<H> {
        &self.views
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn has_appeared(&self) -> bool {
        self.screen.is_some()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// How long a toggle in `direction` keeps the guard raised.
    pub fn wait_duration(&self, direction: Direction) -> Duration {
        match direction {
            Direction::Open => self.config.open_duration(),
            Direction::Close => self.config.close_duration(),
        }
    }

    /// Start a toggle. Returns `None` if an animation is already running.
    pub fn on_toggle_requested(&mut self) -> Option<Playback> {
        let Some(screen) = self.screen else {
            debug!("toggle ignored, screen geometry not captured yet");
            return None;
        };
        if self.animating {
            debug!(state = ?self.state, "toggle ignored, animation in progress");
            return None;
        }

        let direction = self.state.toggle_direction();
        self.animating = true;
        self.state = MenuState::after(direction);
        info!(?direction, "menu toggled");

        let program = build_program(
            direction,
            &self.views,
            self.inset.top,
            screen.width,
            &self.config,
        );
        let options = CommitOptions::new(
            direction.animation_name(),
            self.wait_duration(direction),
            &self.config,
        );
        Some(Playback::commit(program, options))
    }

    /// Lower the guard after a playback finished.
    pub fn complete(&mut self) {
        if !self.animating {
            debug!("completion without a running animation");
        }
        self.animating = false;
    }
}
