use super::{Color, Length};

/// Text rendering parameters handed to a [`crate::measure::TextMeasure`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub size: Length,
}

impl TextPaint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: Length) -> Self {
        self.size = size;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}
