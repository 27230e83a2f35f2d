//! The expand/collapse state machine.
//!
//! A toggle flips the state and starts an [`AnimationRun`] from whatever
//! the view currently shows. The host drives the run with [`advance`] from
//! its frame loop (or [`tick`] when it owns the clock). Finalization, which
//! re-applies the line clip after a collapse, happens exactly once when the
//! run reaches ratio 1.
//!
//! A toggle during a run replaces it: the old run is dropped along with its
//! pending finalization, and the new run starts from the last interpolated
//! height and angle.
//!
//! [`advance`]: ExpandController::advance
//! [`tick`]: ExpandController::tick

use std::time::Instant;

use crate::animation::{AnimationRun, Frame};
use crate::config::ExpandConfig;
use crate::probe::{MeasuredState, ProbeOutcome};
use crate::surface::{LineClip, Surface};
use crate::transitions::TransitionConfig;

/// Icon angle while collapsed.
pub const COLLAPSED_ROTATION: f32 = 0.0;
/// Icon angle while expanded.
pub const EXPANDED_ROTATION: f32 = 180.0;

/// Observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Collapsed,
    Expanded,
    /// A run is in flight.
    Transitioning,
}

/// Expand state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    /// Target state of the most recent toggle.
    pub expanded: bool,
    /// Fixed by the probe; an untoggleable controller ignores toggles.
    pub toggleable: bool,
}

#[derive(Debug, Clone)]
pub struct ExpandController {
    max_lines: usize,
    measured: MeasuredState,
    state: ToggleState,
    transition: TransitionConfig,
    reduced_motion: bool,
    run: Option<AnimationRun>,
    /// Last frame applied to the surface.
    current: Frame,
}

impl ExpandController {
    /// Controller for a view the probe has already initialized.
    pub fn new(config: &ExpandConfig, outcome: ProbeOutcome) -> Self {
        let measured = outcome.measured;
        let height = if outcome.toggleable {
            measured.height_for(config.max_lines)
        } else {
            measured.natural_height()
        };

        Self {
            max_lines: config.max_lines,
            measured,
            state: ToggleState {
                expanded: false,
                toggleable: outcome.toggleable,
            },
            transition: config.transition,
            reduced_motion: false,
            run: None,
            current: Frame::new(height, COLLAPSED_ROTATION),
        }
    }

    /// When enabled, toggles jump straight to their end state.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn measured(&self) -> MeasuredState {
        self.measured
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    pub fn is_toggleable(&self) -> bool {
        self.state.toggleable
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    pub fn phase(&self) -> Phase {
        match (&self.run, self.state.expanded) {
            (Some(_), _) => Phase::Transitioning,
            (None, true) => Phase::Expanded,
            (None, false) => Phase::Collapsed,
        }
    }

    /// The in-flight run, if any.
    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Height and rotation last applied to the surface.
    pub fn current(&self) -> Frame {
        self.current
    }

    fn collapsed_frame(&self) -> Frame {
        Frame::new(self.measured.height_for(self.max_lines), COLLAPSED_ROTATION)
    }

    fn expanded_frame(&self) -> Frame {
        Frame::new(self.measured.natural_height(), EXPANDED_ROTATION)
    }

    /// Flip the state and start a run toward it.
    ///
    /// Returns false without touching the surface when the content fits and
    /// the controller is inert.
    pub fn toggle<S>(&mut self, now: Instant, surface: &mut S) -> bool
    where
        S: Surface + ?Sized,
    {
        if !self.state.toggleable {
            log::trace!("[expand] toggle ignored, content fits");
            return false;
        }

        if let Some(old) = self.run.take() {
            log::debug!(
                "[expand] superseding run at ratio {:.3}, restarting from height={}",
                old.elapsed_ratio(),
                self.current.height
            );
        }

        self.state.expanded = !self.state.expanded;
        let target = if self.state.expanded {
            // Unclip first so the growing box is never cut short
            surface.apply_line_clip(LineClip::Unlimited);
            self.expanded_frame()
        } else {
            self.collapsed_frame()
        };

        log::debug!(
            "[expand] {} from height={} to height={}",
            if self.state.expanded { "expanding" } else { "collapsing" },
            self.current.height,
            target.height
        );

        self.run = Some(AnimationRun::new(
            self.current,
            target,
            now,
            self.transition,
        ));

        if self.reduced_motion {
            self.tick(1.0, surface);
        }

        true
    }

    /// Drive the run from the wall clock. Returns true while a run is still
    /// in flight.
    pub fn advance<S>(&mut self, now: Instant, surface: &mut S) -> bool
    where
        S: Surface + ?Sized,
    {
        let Some(run) = &self.run else {
            return false;
        };
        let ratio = run.ratio_at(now);
        self.tick(ratio, surface)
    }

    /// Drive the run to elapsed ratio `ratio` in `[0, 1]`. Returns true while
    /// a run is still in flight.
    pub fn tick<S>(&mut self, ratio: f32, surface: &mut S) -> bool
    where
        S: Surface + ?Sized,
    {
        let Some(run) = self.run.as_mut() else {
            return false;
        };

        let frame = run.advance_to(ratio);
        let complete = run.is_complete();

        self.current = frame;
        surface.set_height(frame.height);
        surface.set_rotation(frame.rotation);
        log::trace!(
            "[expand] tick ratio={:.3} height={:.2} rotation={:.1}",
            ratio,
            frame.height,
            frame.rotation
        );

        if complete {
            self.finish(surface);
            return false;
        }
        true
    }

    fn finish<S>(&mut self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        // Taking the run guarantees a single finalization per run
        if self.run.take().is_none() {
            return;
        }

        if !self.state.expanded {
            surface.apply_line_clip(LineClip::Limited(self.max_lines));
        }

        log::debug!(
            "[expand] run finished, expanded={} height={}",
            self.state.expanded,
            self.current.height
        );
    }
}
