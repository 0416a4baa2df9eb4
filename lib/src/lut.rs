//! Glyph ramp lookup
//!
//! Ten characters ordered from darkest (densest ink) to lightest (space).

/// Default ramp, darkest first
pub const DEFAULT_RAMP: [char; 10] = [
    '@', // 0: darkest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: lightest
];

/// Immutable ordered set of glyphs indexed by luminance
///
/// Built once per render from the inversion flag; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: [char; 10],
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GlyphRamp {
    /// Creates the ramp, reversed when `invert` is set
    pub fn new(invert: bool) -> Self {
        let mut glyphs = DEFAULT_RAMP;
        if invert {
            glyphs.reverse();
        }
        Self { glyphs }
    }

    /// Returns the same ramp in the opposite order
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs;
        glyphs.reverse();
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.glyphs
    }

    /// Ramp position for an 8-bit luma value
    ///
    /// `round(luma * (len - 1) / 255)`, so it never decreases as luma grows.
    pub fn index_for(&self, luma: u8) -> usize {
        let steps = (self.glyphs.len() - 1) as f64;
        let index = (luma as f64 * steps / 255.0).round() as usize;
        index.min(self.glyphs.len() - 1)
    }

    /// Get the glyph for an 8-bit luma value
    pub fn glyph(&self, luma: u8) -> char {
        self.glyphs[self.index_for(luma)]
    }
}
