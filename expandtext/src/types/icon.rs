/// Glyph shown as the toggle affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    /// Built-in expand arrow.
    #[default]
    Builtin,
    Glyph(char),
}

// Each row: glyph at 0°, 90°, 180°, 270° (clockwise).
const ROTATIONS: &[[char; 4]] = &[
    ['▼', '◀', '▲', '▶'],
    ['▾', '◂', '▴', '▸'],
    ['↓', '←', '↑', '→'],
    ['v', '<', '^', '>'],
];

impl Icon {
    pub fn glyph(self) -> char {
        match self {
            Icon::Builtin => ROTATIONS[0][0],
            Icon::Glyph(c) => c,
        }
    }

    /// The glyph turned by `degrees`, snapped to the nearest quarter turn.
    /// Glyphs without known rotations are drawn unrotated.
    pub fn rotated(self, degrees: f32) -> char {
        let glyph = self.glyph();
        let Some((row, col)) = ROTATIONS.iter().enumerate().find_map(|(row, quad)| {
            quad.iter().position(|&c| c == glyph).map(|col| (row, col))
        }) else {
            return glyph;
        };

        let quarter = (degrees / 90.0).round().rem_euclid(4.0) as usize;
        ROTATIONS[row][(col + quarter) % 4]
    }
}
