use crate::error::{Error, Result};

/// Default terminal font width-to-height ratio
///
/// Character cells are roughly twice as tall as they are wide, so the output
/// needs about half as many rows as a square-pixel mapping would give.
pub const DEFAULT_CHAR_ASPECT: f64 = 0.5;

/// Default output width in characters
pub const DEFAULT_WIDTH: i64 = 80;

/// Widest accepted output, in characters
pub const MAX_WIDTH: i64 = 65_535;

/// Configuration for ASCII rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in characters, in `1..=MAX_WIDTH`
    pub width: i64,
    /// Reverse the glyph ramp once before rendering
    pub invert: bool,
    /// Character cell width-to-height ratio used to derive the row count
    pub char_aspect: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            invert: false,
            char_aspect: DEFAULT_CHAR_ASPECT,
        }
    }
}

impl RenderConfig {
    /// Creates a config with the given width and inversion, keeping the default aspect
    pub fn new(width: i64, invert: bool) -> Self {
        Self {
            width,
            invert,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters
    ///
    /// # Returns
    /// The width as a `u32` ready for the renderer, or `Error::InvalidWidth`
    pub fn validate(&self) -> Result<u32> {
        if !(1..=MAX_WIDTH).contains(&self.width) {
            return Err(Error::InvalidWidth(self.width));
        }
        Ok(self.width as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert_eq!(config.validate().unwrap(), 80);
        assert!(!config.invert);
        assert_eq!(config.char_aspect, 0.5);
    }

    #[test]
    fn test_invalid_width() {
        let mut config = RenderConfig::default();
        config.width = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidWidth(0))));

        config.width = -3;
        assert!(matches!(config.validate(), Err(Error::InvalidWidth(-3))));
    }

    #[test]
    fn test_width_upper_bound() {
        let mut config = RenderConfig::default();
        config.width = MAX_WIDTH;
        assert_eq!(config.validate().unwrap(), 65_535);

        config.width = MAX_WIDTH + 1;
        assert!(matches!(config.validate(), Err(Error::InvalidWidth(65_536))));

        config.width = u32::MAX as i64;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_new_keeps_default_aspect() {
        let config = RenderConfig::new(12, true);
        assert_eq!(config.validate().unwrap(), 12);
        assert!(config.invert);
        assert_eq!(config.char_aspect, DEFAULT_CHAR_ASPECT);
    }
}
