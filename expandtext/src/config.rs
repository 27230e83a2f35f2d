//! Widget configuration.

use thiserror::Error;

use crate::transitions::TransitionConfig;
use crate::types::{Color, Icon, Length, TextPaint};

/// Collapsed line budget when none is configured.
pub const DEFAULT_MAX_LINES: usize = 3;

/// Immutable options of an [`crate::ExpandTextView`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandConfig {
    /// Content to render and measure.
    pub text: String,

    /// Text paint color.
    pub text_color: Color,

    /// Text size, drives the line height.
    pub text_size: Length,

    /// Number of lines shown while collapsed. Must be at least 1.
    pub max_lines: usize,

    /// Toggle affordance.
    pub icon: Icon,

    /// Timing of the expand/collapse animation.
    pub transition: TransitionConfig,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_color: Color::default(),
            text_size: Length::default(),
            max_lines: DEFAULT_MAX_LINES,
            icon: Icon::default(),
            transition: TransitionConfig::default(),
        }
    }
}

impl ExpandConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn text_size(mut self, size: Length) -> Self {
        self.text_size = size;
        self
    }

    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Paint parameters handed to the text measure.
    pub fn paint(&self) -> TextPaint {
        TextPaint::new()
            .color(self.text_color.clone())
            .size(self.text_size)
    }

    /// Reject configurations the widget cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines < 1 {
            return Err(ConfigError::InvalidMaxLines(self.max_lines as i64));
        }
        Ok(())
    }

    /// Build a configuration from markup attributes.
    ///
    /// Recognized keys are `text`, `textcolor`, `textsize`, `icon` and
    /// `lines`. Unknown keys are ignored. The result is validated.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();

        for (key, value) in attributes {
            match key {
                "text" => config.text = value.to_string(),
                "textcolor" => {
                    config.text_color = Color::from_hex(value)
                        .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;
                }
                "textsize" => {
                    config.text_size = Length::parse(value)
                        .ok_or_else(|| ConfigError::InvalidLength(value.to_string()))?;
                }
                "icon" => config.icon = parse_icon(value),
                "lines" => {
                    let lines: i64 = value.trim().parse().map_err(|_| ConfigError::InvalidInteger {
                        attribute: "lines",
                        value: value.to_string(),
                    })?;
                    if lines < 1 {
                        return Err(ConfigError::InvalidMaxLines(lines));
                    }
                    config.max_lines = usize::try_from(lines)
                        .map_err(|_| ConfigError::InvalidMaxLines(lines))?;
                }
                other => log::warn!("[config] ignoring unknown attribute '{}'", other),
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_icon(value: &str) -> Icon {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Icon::Glyph(c),
        _ => {
            log::warn!(
                "[config] icon '{}' is not a single glyph, using the built-in icon",
                value
            );
            Icon::Builtin
        }
    }
}

/// Errors raised while building an [`ExpandConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The collapsed line budget is below 1.
    #[error("max lines must be at least 1, got {0}")]
    InvalidMaxLines(i64),

    #[error("invalid color '{0}', expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("invalid length '{0}', expected a number with an sp, dp, dip or px suffix")]
    InvalidLength(String),

    #[error("attribute '{attribute}' expects an integer, got '{value}'")]
    InvalidInteger {
        attribute: &'static str,
        value: String,
    },
}
