//! The expandable text view: configuration, probe and controller wired to a
//! [`ViewState`].

use std::time::Instant;

use crate::config::{ConfigError, ExpandConfig};
use crate::controller::{ExpandController, Phase};
use crate::event::{Event, Key, MouseButton};
use crate::hit::hit_test;
use crate::layout::WidgetLayout;
use crate::measure::TextMeasure;
use crate::probe::{LayoutProbe, ProbeOutcome};
use crate::surface::ViewState;
use crate::text::clip_lines;

/// Part of the widget a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The text block or anywhere else inside the container.
    Text,
    Icon,
}

/// Collapsible text block with an animated toggle icon.
///
/// Initialization is two-phase: [`ExpandTextView::new`] takes the
/// configuration, and [`ExpandTextView::finalize_layout`] measures the text
/// once the host has laid the view out. Until then the view is inert.
#[derive(Debug, Clone)]
pub struct ExpandTextView {
    config: ExpandConfig,
    view: ViewState,
    controller: Option<ExpandController>,
    reduced_motion: bool,
}

impl ExpandTextView {
    pub fn new(config: ExpandConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            view: ViewState::new(),
            controller: None,
            reduced_motion: false,
        })
    }

    pub fn config(&self) -> &ExpandConfig {
        &self.config
    }

    /// Current height, clip, rotation and visibility.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn controller(&self) -> Option<&ExpandController> {
        self.controller.as_ref()
    }

    pub fn is_laid_out(&self) -> bool {
        self.controller.is_some()
    }

    pub fn phase(&self) -> Phase {
        self.controller
            .as_ref()
            .map(ExpandController::phase)
            .unwrap_or_default()
    }

    pub fn is_animating(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(ExpandController::is_animating)
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if let Some(controller) = &mut self.controller {
            controller.set_reduced_motion(enabled);
        }
    }

    /// Measure the text at `width` after the host's first layout pass.
    ///
    /// Runs the probe once. Later calls return the first outcome unchanged;
    /// width changes are not re-measured.
    pub fn finalize_layout<M>(&mut self, measure: &M, width: f32) -> ProbeOutcome
    where
        M: TextMeasure + ?Sized,
    {
        if let Some(controller) = &self.controller {
            log::debug!("[expand] layout already finalized, ignoring width={}", width);
            return ProbeOutcome {
                measured: controller.measured(),
                toggleable: controller.is_toggleable(),
            };
        }

        let outcome = LayoutProbe::new(&self.config).probe(measure, width, &mut self.view);
        let mut controller = ExpandController::new(&self.config, outcome);
        controller.set_reduced_motion(self.reduced_motion);
        self.controller = Some(controller);
        outcome
    }

    /// Route a click. Only an interactive view reacts; returns whether a
    /// toggle started.
    pub fn click(&mut self, target: Target, now: Instant) -> bool {
        if !self.view.interactive {
            return false;
        }
        log::debug!("[expand] click on {:?}", target);
        self.toggle(now)
    }

    /// Route a host event against the last painted `layout`.
    ///
    /// A left click inside the widget and a bare Enter or Space toggle.
    /// Everything else is ignored. Returns whether a toggle started.
    pub fn handle_event(&mut self, event: &Event, layout: &WidgetLayout, now: Instant) -> bool {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => match hit_test(layout, x, y) {
                Some(target) => self.click(target, now),
                None => false,
            },
            Event::Key {
                key: Key::Enter | Key::Char(' '),
                modifiers,
            } if !modifiers.ctrl && !modifiers.alt => self.click(Target::Text, now),
            _ => false,
        }
    }

    /// Toggle between collapsed and expanded. A no-op before layout and when
    /// the content fits.
    pub fn toggle(&mut self, now: Instant) -> bool {
        match &mut self.controller {
            Some(controller) => controller.toggle(now, &mut self.view),
            None => false,
        }
    }

    /// Per-frame update from the wall clock. Returns true while animating.
    pub fn advance(&mut self, now: Instant) -> bool {
        match &mut self.controller {
            Some(controller) => controller.advance(now, &mut self.view),
            None => false,
        }
    }

    /// Per-frame update at an explicit elapsed ratio. Returns true while
    /// animating.
    pub fn tick(&mut self, ratio: f32) -> bool {
        match &mut self.controller {
            Some(controller) => controller.tick(ratio, &mut self.view),
            None => false,
        }
    }

    /// Wrapped lines at `width` with the current line clip applied.
    pub fn lines<M>(&self, measure: &M, width: f32) -> Vec<String>
    where
        M: TextMeasure + ?Sized,
    {
        let paint = self.config.paint();
        let lines = measure.wrap(&self.config.text, width, &paint);
        clip_lines(lines, self.view.line_clip, width.max(0.0).floor() as usize)
    }
}
