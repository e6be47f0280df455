//! The countdown engine: one target, one surface, one lifecycle.

use super::clock::{Clock, SystemClock};
use super::frame::CountdownFrame;
use super::remaining::RemainingDuration;
use super::target::TargetMoment;
use crate::config::EventConfig;

/// Destination the engine paints frames into.
pub trait DisplaySurface {
    /// Whether the surface is still part of the page.
    ///
    /// Checked before every paint; a detached surface is skipped silently.
    fn is_attached(&self) -> bool {
        true
    }

    /// Replace the surface content with `frame`.
    fn replace(&mut self, frame: &CountdownFrame);
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    fn replace(&mut self, frame: &CountdownFrame) {
        (**self).replace(frame)
    }
}

/// Records every frame, handy for headless use.
impl DisplaySurface for Vec<CountdownFrame> {
    fn replace(&mut self, frame: &CountdownFrame) {
        self.push(frame.clone());
    }
}

/// Engine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Target is still ahead; the engine keeps ticking
    Running,
    /// Remaining time reached zero; the display is frozen at all-zero
    Finished,
}

/// Counts down to a target instant and paints the breakdown.
///
/// All state belongs to the instance, so independent engines can run side
/// by side (one per surface).
pub struct CountdownEngine<S, C = SystemClock> {
    target: TargetMoment,
    first_render: bool,
    phase: Phase,
    surface: S,
    clock: C,
}

impl<S: DisplaySurface, C: Clock> CountdownEngine<S, C> {
    /// Build an engine from host configuration.
    ///
    /// Returns `None` when there is no surface to paint into; the page simply
    /// has no countdown region. An unusable date falls back to the
    /// compiled-in default.
    pub fn init(config: &EventConfig, surface: Option<S>, clock: C) -> Option<Self> {
        let Some(surface) = surface else {
            tracing::debug!("No countdown surface, countdown disabled");
            return None;
        };

        let target = TargetMoment::from_config(&config.date_iso);
        tracing::info!(
            "Countdown target {} ({:?})",
            target.instant(),
            target.source()
        );
        Some(Self::with_target(target, surface, clock))
    }

    /// Build an engine for an already-resolved target.
    pub fn with_target(target: TargetMoment, surface: S, clock: C) -> Self {
        Self {
            target,
            first_render: true,
            phase: Phase::Running,
            surface,
            clock,
        }
    }

    /// Recompute the remaining time and paint it.
    ///
    /// The first non-zero paint carries the entrance animation. Once the
    /// remaining time reaches zero the engine enters [`Phase::Finished`] and
    /// every later tick repaints the all-zero frame.
    pub fn tick(&mut self) -> Phase {
        if !self.surface.is_attached() {
            tracing::trace!("Countdown surface detached, skipping tick");
            return self.phase;
        }

        if self.phase == Phase::Finished {
            self.surface.replace(&CountdownFrame::zero());
            return self.phase;
        }

        let diff = self.target.millis_until(self.clock.now());
        if diff <= 0 {
            self.surface.replace(&CountdownFrame::zero());
            self.phase = Phase::Finished;
            tracing::info!("Countdown finished");
            return self.phase;
        }

        let mut frame = CountdownFrame::from_remaining(&RemainingDuration::from_millis(diff));
        if self.first_render {
            frame = frame.with_entrance();
            self.first_render = false;
        }
        self.surface.replace(&frame);
        self.phase
    }

    /// Time left right now (zero once the target has passed).
    pub fn remaining(&self) -> RemainingDuration {
        RemainingDuration::from_millis(self.target.millis_until(self.clock.now()))
    }

    pub fn target(&self) -> &TargetMoment {
        &self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Whether the entrance animation is still pending.
    pub fn is_first_render(&self) -> bool {
        self.first_render
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
