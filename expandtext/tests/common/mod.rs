#![allow(dead_code)]

use expandtext::{LineClip, Surface, TextMeasure, TextPaint, ViewState};

/// Measure that reports a fixed line count regardless of width.
pub struct FixedMeasure {
    pub lines: usize,
    pub line_height: f32,
}

impl FixedMeasure {
    pub fn new(lines: usize, line_height: f32) -> Self {
        Self { lines, line_height }
    }
}

impl TextMeasure for FixedMeasure {
    fn line_count(&self, _text: &str, _width: f32, _paint: &TextPaint) -> usize {
        self.lines
    }

    fn line_height(&self, _paint: &TextPaint) -> f32 {
        self.line_height
    }

    fn wrap(&self, _text: &str, _width: f32, _paint: &TextPaint) -> Vec<String> {
        (1..=self.lines).map(|n| format!("line {n}")).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Clip(LineClip),
    Height(f32),
    Rotation(f32),
    IconVisible(bool),
    Interactive(bool),
}

/// Surface that keeps the resulting state and every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub state: ViewState,
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heights(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Height(h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Rotation(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, wanted: Call) -> Option<usize> {
        self.calls.iter().position(|call| *call == wanted)
    }
}

impl Surface for RecordingSurface {
    fn apply_line_clip(&mut self, clip: LineClip) {
        self.calls.push(Call::Clip(clip));
        self.state.apply_line_clip(clip);
    }

    fn set_height(&mut self, height: f32) {
        self.calls.push(Call::Height(height));
        self.state.set_height(height);
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.calls.push(Call::Rotation(degrees));
        self.state.set_rotation(degrees);
    }

    fn set_icon_visible(&mut self, visible: bool) {
        self.calls.push(Call::IconVisible(visible));
        self.state.set_icon_visible(visible);
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.calls.push(Call::Interactive(interactive));
        self.state.set_interactive(interactive);
    }
}
