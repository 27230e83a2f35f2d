/// A length as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Density-independent units.
    Dip(f32),
    /// Scale-independent units, dip scaled by the font preference.
    Sp(f32),
    /// Device pixels.
    Px(f32),
}

impl Default for Length {
    fn default() -> Self {
        Length::Dip(12.0)
    }
}

impl Length {
    /// Parse `15sp`, `12dp`, `12dip` or `14px`. A bare number is pixels.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (number, ctor): (&str, fn(f32) -> Length) = if let Some(n) = s.strip_suffix("dip") {
            (n, Length::Dip)
        } else if let Some(n) = s.strip_suffix("dp") {
            (n, Length::Dip)
        } else if let Some(n) = s.strip_suffix("sp") {
            (n, Length::Sp)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else {
            (s, Length::Px)
        };

        let value: f32 = number.trim().parse().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(ctor(value))
    }
}

/// Display metrics used to turn a [`Length`] into device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub density: f32,
    pub scaled_density: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    pub const fn with_font_scale(mut self, scale: f32) -> Self {
        self.scaled_density = self.density * scale;
        self
    }

    /// Whole device pixels, rounded half up.
    pub fn to_px(&self, length: Length) -> f32 {
        match length {
            Length::Px(px) => px,
            Length::Dip(dp) => (self.density * dp + 0.5).floor(),
            Length::Sp(sp) => (self.scaled_density * sp + 0.5).floor(),
        }
    }
}
