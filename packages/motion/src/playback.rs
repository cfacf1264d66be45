//! # Playback: samples a program over wall-clock time
//!
//! [`Playback`] is a stepping state machine: every call to
//! [`advance`](Playback::advance) moves the clock forward, eases the overall
//! progress and hands each interpolation whose window has been entered its
//! current value through a [`PropertySink`]. An interpolation stops receiving
//! values once it has delivered its final one.
//!
//! [`play`] drives a playback to completion on any async runtime through the
//! [`FrameClock`] trait; the future resolving is the completion signal. The
//! playback advances by the time the clock reports, not by the requested tick,
//! so a late timer skips ahead instead of stretching the program.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::MenuConfig;
use crate::easing::Easing;
use crate::program::{AnimationProgram, Property};

/// Receives interpolated values. Closures `FnMut(Property, f64)` work as sinks.
pub trait PropertySink {
    fn apply(&mut self, property: Property, value: f64);
}

impl<F> PropertySink for F
where
    F: FnMut(Property, f64),
{
    fn apply(&mut self, property: Property, value: f64) {
        self(property, value)
    }
}

/// Async sleep provided by the host runtime.
pub trait FrameClock {
    /// Sleep for about `duration` and return the wall-clock time that
    /// actually passed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = Duration>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommitOptions {
    pub name: &'static str,
    /// Sampling interval.
    pub tick: Duration,
    /// Wall-clock length of the whole program.
    pub duration: Duration,
    pub easing: Easing,
    /// Restart from the beginning instead of finishing.
    pub repeat: bool,
}

impl CommitOptions {
    pub fn new(name: &'static str, duration: Duration, config: &MenuConfig) -> Self {
        Self {
            name,
            tick: config.tick(),
            duration,
            easing: config.animation.easing,
            repeat: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Running,
    Finished,
}

#[derive(Clone, Debug)]
pub struct Playback {
    program: AnimationProgram,
    options: CommitOptions,
    elapsed: Duration,
    delivered: Vec<bool>,
    status: PlaybackStatus,
}

impl Playback {
    pub fn commit(program: AnimationProgram, options: CommitOptions) -> Self {
        debug!(
            name = options.name,
            duration_ms = options.duration.as_millis() as u64,
            segments = program.len(),
            "committing animation"
        );
        let delivered = vec![false; program.len()];
        Self {
            program,
            options,
            elapsed: Duration::ZERO,
            delivered,
            status: PlaybackStatus::Running,
        }
    }

    pub fn program(&self) -> &AnimationProgram {
        &self.program
    }

    pub fn options(&self) -> &CommitOptions {
        &self.options
    }

    pub fn duration(&self) -> Duration {
        self.options.duration
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }

    /// Linear progress through the program in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.options.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.options.duration.as_secs_f64()).min(1.0)
    }

    /// Move the clock forward by `dt` and apply the values for the new
    /// position.
    pub fn advance<S: PropertySink + ?Sized>(&mut self, dt: Duration, sink: &mut S) -> PlaybackStatus {
        if self.is_finished() {
            return self.status;
        }

        self.elapsed += dt;
        let progress = self.progress();
        // Curves built from trig functions can land a hair short of 1.
        let eased = if progress >= 1.0 {
            1.0
        } else {
            self.options.easing.ease(progress)
        };

        for (segment, delivered) in self.program.segments.iter().zip(self.delivered.iter_mut()) {
            if *delivered {
                continue;
            }
            let t = segment.window.local(eased);
            if t <= 0.0 {
                continue;
            }
            sink.apply(segment.property, segment.value_at(t));
            if t >= 1.0 {
                *delivered = true;
            }
        }

        if progress >= 1.0 {
            if self.options.repeat {
                trace!(name = self.options.name, "restarting animation");
                self.elapsed = Duration::ZERO;
                self.delivered.iter_mut().for_each(|d| *d = false);
            } else {
                debug!(name = self.options.name, "animation finished");
                self.status = PlaybackStatus::Finished;
            }
        }
        self.status
    }
}

/// Run `playback` to completion, sampling once per `clock.sleep`.
///
/// Never resolves for a repeating playback.
pub async fn play<C, S>(mut playback: Playback, clock: &C, sink: &mut S) -> Playback
where
    C: FrameClock,
    S: PropertySink + ?Sized,
{
    let tick = playback.options.tick.max(Duration::from_millis(1));
    while !playback.is_finished() {
        let elapsed = clock.sleep(tick).await;
        playback.advance(elapsed, sink);
    }
    playback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MenuViewSet;
    use crate::program::{Direction, Window};
    use crate::sequencer::build_program;
    use std::cell::Cell;

    /// Clock that returns immediately but counts how often it was asked to sleep.
    #[derive(Default)]
    struct InstantClock {
        sleeps: Cell<u32>,
    }

    impl FrameClock for InstantClock {
        async fn sleep(&self, duration: Duration) -> Duration {
            self.sleeps.set(self.sleeps.get() + 1);
            duration
        }
    }

    /// Clock whose timer always fires `lag` times later than requested.
    struct LateClock {
        lag: u32,
        sleeps: Cell<u32>,
        total: Cell<Duration>,
    }

    impl FrameClock for LateClock {
        async fn sleep(&self, duration: Duration) -> Duration {
            let actual = duration * self.lag;
            self.sleeps.set(self.sleeps.get() + 1);
            self.total.set(self.total.get() + actual);
            actual
        }
    }

    fn options(duration_ms: u64) -> CommitOptions {
        CommitOptions::new("Test", Duration::from_millis(duration_ms), &MenuConfig::default())
    }

    fn single(window: Window) -> AnimationProgram {
        let mut program = AnimationProgram::new(Direction::Open);
        program.add(window, Property::PageScale, 1.0, 0.5);
        program
    }

    #[test]
    fn test_values_follow_progress() {
        let mut playback = Playback::commit(single(Window::FULL), options(100));
        let mut seen = Vec::new();
        let mut sink = |_: Property, v: f64| seen.push(v);

        assert_eq!(playback.advance(Duration::from_millis(50), &mut sink), PlaybackStatus::Running);
        assert_eq!(playback.advance(Duration::from_millis(50), &mut sink), PlaybackStatus::Finished);
        assert_eq!(seen, vec![0.75, 0.5]);
    }

    #[test]
    fn test_segment_silent_outside_window() {
        let mut playback = Playback::commit(single(Window::new(0.5, 0.75)), options(100));
        let calls = Cell::new(0);
        let mut sink = |_: Property, _: f64| calls.set(calls.get() + 1);

        for _ in 0..4 {
            playback.advance(Duration::from_millis(20), &mut sink);
        }
        // 0.2, 0.4 before the window, 0.6 inside, 0.8 clamps to the end.
        assert_eq!(calls.get(), 2);
        playback.advance(Duration::from_millis(20), &mut sink);
        assert_eq!(calls.get(), 2);
        assert!(playback.is_finished());
    }

    #[test]
    fn test_finished_playback_ignores_ticks() {
        let mut playback = Playback::commit(single(Window::FULL), options(10));
        let mut calls = 0;
        let mut sink = |_: Property, _: f64| calls += 1;
        playback.advance(Duration::from_millis(10), &mut sink);
        playback.advance(Duration::from_millis(10), &mut sink);
        assert_eq!(calls, 1);
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let mut playback = Playback::commit(single(Window::FULL), options(0));
        let mut last = None;
        let mut sink = |_: Property, v: f64| last = Some(v);
        assert_eq!(playback.advance(Duration::ZERO, &mut sink), PlaybackStatus::Finished);
        assert_eq!(last, Some(0.5));
    }

    #[test]
    fn test_repeat_restarts() {
        let mut opts = options(20);
        opts.repeat = true;
        let mut playback = Playback::commit(single(Window::FULL), opts);
        let mut calls = 0;
        let mut sink = |_: Property, _: f64| calls += 1;
        for _ in 0..6 {
            assert_eq!(playback.advance(Duration::from_millis(10), &mut sink), PlaybackStatus::Running);
        }
        assert_eq!(calls, 6);
    }

    #[test]
    fn test_easing_shapes_values() {
        let mut opts = options(100);
        opts.easing = Easing::CubicIn;
        let mut playback = Playback::commit(single(Window::FULL), opts);
        let mut seen = Vec::new();
        let mut sink = |_: Property, v: f64| seen.push(v);
        playback.advance(Duration::from_millis(50), &mut sink);
        // cubic-in at 0.5 is 0.125, so the scale has barely moved.
        assert!((seen[0] - (1.0 - 0.5 * 0.125)).abs() < 1e-12);
    }

    #[test]
    fn test_trig_easing_lands_on_final_values() {
        let config = MenuConfig::default().with_easing(Easing::SinIn);
        let views = MenuViewSet::new(0..5);
        let program = build_program(Direction::Open, &views, 20.0, 400.0, &config);
        let mut playback = Playback::commit(program, CommitOptions::new("ExpandAnimation", config.open_duration(), &config));
        let mut last = std::collections::HashMap::new();
        let mut sink = |p: Property, v: f64| {
            last.insert(p, v);
        };
        while !playback.is_finished() {
            playback.advance(config.tick(), &mut sink);
        }
        assert_eq!(last[&Property::IconTranslationY(4)], 0.0);
        assert_eq!(last[&Property::IconOpacity(4)], 1.0);
        assert_eq!(last[&Property::PageScale], 0.9);
    }

    #[tokio::test]
    async fn test_late_timer_does_not_stretch_program() {
        let config = MenuConfig::default();
        let views = MenuViewSet::new(0..5);
        let program = build_program(Direction::Open, &views, 20.0, 400.0, &config);
        let playback = Playback::commit(program, CommitOptions::new("ExpandAnimation", config.open_duration(), &config));

        let clock = LateClock {
            lag: 3,
            sleeps: Cell::new(0),
            total: Cell::new(Duration::ZERO),
        };
        let mut last = std::collections::HashMap::new();
        let mut sink = |p: Property, v: f64| {
            last.insert(p, v);
        };
        let done = play(playback, &clock, &mut sink).await;

        assert!(done.is_finished());
        // 600ms at 48ms per real tick, instead of 38 nominal ticks.
        assert_eq!(clock.sleeps.get(), 13);
        assert!(clock.total.get() < Duration::from_millis(600 + 48));
        assert_eq!(last[&Property::PageTranslationX], 400.0 * 0.35);
        assert_eq!(last[&Property::IconOpacity(4)], 1.0);
    }

    #[tokio::test]
    async fn test_play_delivers_final_values() {
        let config = MenuConfig::default();
        let views = MenuViewSet::new(0..5);
        let program = build_program(Direction::Open, &views, 20.0, 400.0, &config);
        let segments = program.len();
        let playback = Playback::commit(program, CommitOptions::new("ExpandAnimation", config.open_duration(), &config));

        let clock = InstantClock::default();
        let mut last = std::collections::HashMap::new();
        let mut sink = |p: Property, v: f64| {
            last.insert(p, v);
        };
        let done = play(playback, &clock, &mut sink).await;

        assert!(done.is_finished());
        // 600ms at 16ms per tick.
        assert_eq!(clock.sleeps.get(), 38);
        assert_eq!(last.len(), segments);
        assert_eq!(last[&Property::PageScale], 0.9);
        assert_eq!(last[&Property::IconOpacity(4)], 1.0);
        assert_eq!(last[&Property::IconTranslationY(0)], 0.0);
    }
}
