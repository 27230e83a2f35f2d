//! The view primitives the probe and the controller drive.
//!
//! A host implements [`Surface`] over whatever element tree it owns. The
//! crate ships [`ViewState`], a plain view model used by the terminal
//! renderer and by tests.

/// Maximum number of lines the text renderer may paint before truncating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineClip {
    #[default]
    Unlimited,
    Limited(usize),
}

impl LineClip {
    /// Whether `line_count` lines would be cut by this clip.
    pub fn truncates(self, line_count: usize) -> bool {
        match self {
            LineClip::Unlimited => false,
            LineClip::Limited(max) => line_count > max,
        }
    }
}

/// Mutable view state of the text element and its toggle icon.
pub trait Surface {
    fn apply_line_clip(&mut self, clip: LineClip);

    /// Height of the text element, in the measure's units.
    fn set_height(&mut self, height: f32);

    /// Rotation of the icon in degrees, clockwise.
    fn set_rotation(&mut self, degrees: f32);

    fn set_icon_visible(&mut self, visible: bool);

    /// Attach or detach click handling on the container and the icon.
    fn set_interactive(&mut self, interactive: bool);
}

/// Owned snapshot of everything a [`Surface`] can be told.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub line_clip: LineClip,
    pub height: f32,
    pub rotation: f32,
    pub icon_visible: bool,
    pub interactive: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for ViewState {
    fn apply_line_clip(&mut self, clip: LineClip) {
        self.line_clip = clip;
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn set_icon_visible(&mut self, visible: bool) {
        self.icon_visible = visible;
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }
}
