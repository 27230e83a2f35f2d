//! One-shot post-layout measurement.

use crate::config::ExpandConfig;
use crate::measure::TextMeasure;
use crate::surface::{LineClip, Surface};
use crate::types::TextPaint;

/// Text metrics fixed after the first layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredState {
    /// Height of one line at the configured size.
    pub line_height: f32,
    /// Lines the full text occupies at the rendered width.
    pub content_lines: usize,
}

impl MeasuredState {
    pub fn height_for(&self, lines: usize) -> f32 {
        lines as f32 * self.line_height
    }

    /// Height of the unclipped text.
    pub fn natural_height(&self) -> f32 {
        self.height_for(self.content_lines)
    }
}

/// What the probe decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeOutcome {
    pub measured: MeasuredState,
    /// True only when the content exceeds the collapsed line budget.
    pub toggleable: bool,
}

/// Measures the text once the host has laid it out and puts the view in
/// its initial state.
#[derive(Debug, Clone)]
pub struct LayoutProbe<'a> {
    text: &'a str,
    paint: TextPaint,
    max_lines: usize,
}

impl<'a> LayoutProbe<'a> {
    pub fn new(config: &'a ExpandConfig) -> Self {
        Self {
            text: &config.text,
            paint: config.paint(),
            max_lines: config.max_lines,
        }
    }

    /// Measure at `width` and apply the initial view state to `surface`.
    ///
    /// Content that fits keeps its natural height with the icon hidden and
    /// click handling detached. Longer content is clipped to the line budget
    /// with an ellipsis and the icon shown at 0°.
    pub fn probe<M, S>(&self, measure: &M, width: f32, surface: &mut S) -> ProbeOutcome
    where
        M: TextMeasure + ?Sized,
        S: Surface + ?Sized,
    {
        let measured = MeasuredState {
            line_height: measure.line_height(&self.paint),
            content_lines: measure.line_count(self.text, width, &self.paint),
        };
        let toggleable = measured.content_lines > self.max_lines;

        if toggleable {
            surface.apply_line_clip(LineClip::Limited(self.max_lines));
            surface.set_height(measured.height_for(self.max_lines));
            surface.set_rotation(0.0);
            surface.set_icon_visible(true);
            surface.set_interactive(true);
        } else {
            surface.apply_line_clip(LineClip::Unlimited);
            surface.set_height(measured.natural_height());
            surface.set_icon_visible(false);
            surface.set_interactive(false);
        }

        log::debug!(
            "[probe] width={} lines={} max_lines={} line_height={} toggleable={}",
            width,
            measured.content_lines,
            self.max_lines,
            measured.line_height,
            toggleable
        );

        ProbeOutcome {
            measured,
            toggleable,
        }
    }
}
