//! Shared style configuration: palette, typography, canvas dimensions.

use crate::error::{Error, Result};
use crate::geometry::Emu;
use serde::{Deserialize, Serialize};

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Create a color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Uppercase hex triplet as used by `<a:srgbClr val="..."/>`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Palette, font, and canvas settings shared by every slide in a run.
///
/// Created once at process start and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Main title and header-band color.
    pub primary: Color,
    /// Default body text color.
    pub text: Color,
    /// First accent (cool blue).
    pub accent_one: Color,
    /// Second accent (teal).
    pub accent_two: Color,
    /// Emphasis color for highlighted lines.
    pub emphasis: Color,
    /// Muted color for footnotes and page numbers.
    pub muted: Color,
    /// Muted text on dark backgrounds (cover subtitle, section subtitle).
    pub on_dark_muted: Color,
    /// Section divider background.
    pub section_background: Color,
    /// Plain white.
    pub white: Color,
    /// Left panel tint for two-column slides.
    pub panel_tint_one: Color,
    /// Right panel tint for two-column slides.
    pub panel_tint_two: Color,
    /// Quadrant fill tints, alternating.
    pub quadrant_tint_one: Color,
    pub quadrant_tint_two: Color,

    /// Font family applied to all text unless overridden per line.
    pub font_family: String,

    /// Canvas width in inches.
    pub canvas_width: f64,
    /// Canvas height in inches.
    pub canvas_height: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x1B, 0x2A, 0x4A),
            text: Color::rgb(0x2C, 0x3E, 0x50),
            accent_one: Color::rgb(0x2E, 0x86, 0xC1),
            accent_two: Color::rgb(0x17, 0xA5, 0x89),
            emphasis: Color::rgb(0xE6, 0x7E, 0x22),
            muted: Color::rgb(0x7F, 0x8C, 0x8D),
            on_dark_muted: Color::rgb(0xAE, 0xBF, 0xD5),
            section_background: Color::rgb(0x1B, 0x2A, 0x4A),
            white: Color::rgb(0xFF, 0xFF, 0xFF),
            panel_tint_one: Color::rgb(0xEB, 0xEF, 0xF5),
            panel_tint_two: Color::rgb(0xE8, 0xF8, 0xF5),
            quadrant_tint_one: Color::rgb(0xF7, 0xF9, 0xFC),
            quadrant_tint_two: Color::rgb(0xEA, 0xF7, 0xF4),
            font_family: "Yu Gothic".to_string(),
            canvas_width: 13.333,
            canvas_height: 7.5,
        }
    }
}

impl StyleConfig {
    /// Validate canvas dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return Err(Error::InvalidBounds(format!(
                "canvas must be positive, got {}x{} inches",
                self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }

    /// Canvas width in EMU.
    pub fn canvas_width_emu(&self) -> Emu {
        Emu::from_inches(self.canvas_width)
    }

    /// Canvas height in EMU.
    pub fn canvas_height_emu(&self) -> Emu {
        Emu::from_inches(self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0x1B, 0x2A, 0x4A).hex(), "1B2A4A");
        assert_eq!(Color::rgb(0xFF, 0xFF, 0xFF).hex(), "FFFFFF");
        assert_eq!(Color::rgb(0, 0, 0).hex(), "000000");
    }

    #[test]
    fn test_default_canvas_is_valid() {
        let style = StyleConfig::default();
        style.validate().unwrap();
        assert_eq!(style.canvas_width_emu(), Emu::from_inches(13.333));
        assert_eq!(style.canvas_height_emu(), Emu::from_inches(7.5));
    }

    #[test]
    fn test_validate_rejects_degenerate_canvas() {
        let mut style = StyleConfig::default();
        style.canvas_height = 0.0;
        assert!(style.validate().is_err());

        style.canvas_height = 7.5;
        style.canvas_width = -1.0;
        assert!(style.validate().is_err());
    }
}
