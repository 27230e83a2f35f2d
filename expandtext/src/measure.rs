//! Text measurement primitives.

use crate::text::wrap_words;
use crate::types::{Density, TextPaint};

/// Answers layout questions that are only known once text is shaped.
pub trait TextMeasure {
    /// Number of lines `text` occupies when wrapped at `width`.
    fn line_count(&self, text: &str, width: f32, paint: &TextPaint) -> usize;

    /// Height of a single line.
    fn line_height(&self, paint: &TextPaint) -> f32;

    /// The wrapped lines themselves, for hosts that paint text.
    fn wrap(&self, text: &str, width: f32, paint: &TextPaint) -> Vec<String>;
}

/// Terminal measure: one column per cell, one row per line. Text size has
/// no effect on a cell grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn line_count(&self, text: &str, width: f32, paint: &TextPaint) -> usize {
        self.wrap(text, width, paint).len()
    }

    fn line_height(&self, _paint: &TextPaint) -> f32 {
        1.0
    }

    fn wrap(&self, text: &str, width: f32, _paint: &TextPaint) -> Vec<String> {
        wrap_words(text, width.max(0.0).floor() as usize)
    }
}

/// Fixed-pitch measure for pixel hosts. Glyph advance and line spacing are
/// fractions of the text size in device pixels.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    pub density: Density,
    /// Glyph advance as a multiple of the text size.
    pub advance: f32,
    /// Line height as a multiple of the text size.
    pub line_spacing: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            density: Density::default(),
            advance: 0.6,
            line_spacing: 1.2,
        }
    }
}

impl MonospaceMeasure {
    pub fn new(density: Density) -> Self {
        Self {
            density,
            ..Default::default()
        }
    }

    fn columns(&self, width: f32, paint: &TextPaint) -> usize {
        let advance = self.density.to_px(paint.size) * self.advance;
        if advance <= 0.0 {
            return 0;
        }
        (width.max(0.0) / advance).floor() as usize
    }
}

impl TextMeasure for MonospaceMeasure {
    fn line_count(&self, text: &str, width: f32, paint: &TextPaint) -> usize {
        self.wrap(text, width, paint).len()
    }

    fn line_height(&self, paint: &TextPaint) -> f32 {
        (self.density.to_px(paint.size) * self.line_spacing).round()
    }

    fn wrap(&self, text: &str, width: f32, paint: &TextPaint) -> Vec<String> {
        wrap_words(text, self.columns(width, paint))
    }
}
