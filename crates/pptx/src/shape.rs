//! In-memory shape model.
//!
//! Layout routines reduce each slide spec to a flat, ordered list of
//! shapes; the package writer serializes that list into a slide part.

use deck_core::{Alignment, BulletLine, Color, Rect};

/// Preset geometry of a box shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeGeometry {
    Rect,
    RoundedRect,
}

impl ShapeGeometry {
    /// OOXML `prstGeom` preset name.
    pub fn preset(&self) -> &'static str {
        match self {
            ShapeGeometry::Rect => "rect",
            ShapeGeometry::RoundedRect => "roundRect",
        }
    }
}

/// A filled rectangle, optionally outlined.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    pub bounds: Rect,
    pub geometry: ShapeGeometry,
    pub fill: Color,
    /// `None` renders with no outline.
    pub outline: Option<Color>,
}

/// One fully resolved paragraph of a text shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    /// Font size in points.
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub font: String,
    pub align: Alignment,
    /// Space after the paragraph in points.
    pub space_after: f64,
}

impl Paragraph {
    /// Font size in centipoints, as the `sz` attribute expects.
    pub fn size_centipoints(&self) -> i64 {
        (self.size * 100.0).round() as i64
    }

    /// Space-after in centipoints, as `<a:spcPts val>` expects.
    pub fn space_after_centipoints(&self) -> i64 {
        (self.space_after * 100.0).round() as i64
    }
}

/// A word-wrapped text box holding one or more paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub bounds: Rect,
    pub paragraphs: Vec<Paragraph>,
}

/// A positioned slide element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box(BoxShape),
    Text(TextShape),
}

/// Default line style for a stacked-text region. A [`BulletLine`]'s
/// explicit overrides win over these defaults field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDefaults {
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub font: String,
    pub align: Alignment,
    pub space_after: f64,
}

impl LineDefaults {
    /// Resolve a bullet line against these defaults.
    pub fn resolve(&self, line: &BulletLine) -> Paragraph {
        match line {
            BulletLine::Plain(text) => Paragraph {
                text: text.clone(),
                size: self.size,
                bold: self.bold,
                color: self.color,
                font: self.font.clone(),
                align: self.align,
                space_after: self.space_after,
            },
            BulletLine::Styled(styled) => Paragraph {
                text: styled.text.clone(),
                size: styled.size.unwrap_or(self.size),
                bold: styled.bold.unwrap_or(self.bold),
                color: styled.color.unwrap_or(self.color),
                font: styled.font.clone().unwrap_or_else(|| self.font.clone()),
                align: styled.align.unwrap_or(self.align),
                space_after: self.space_after,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::StyledLine;

    fn defaults() -> LineDefaults {
        LineDefaults {
            size: 20.0,
            bold: false,
            color: Color::rgb(0x2C, 0x3E, 0x50),
            font: "Yu Gothic".to_string(),
            align: Alignment::Left,
            space_after: 8.0,
        }
    }

    #[test]
    fn test_plain_line_takes_defaults() {
        let p = defaults().resolve(&BulletLine::plain("本文"));
        assert_eq!(p.text, "本文");
        assert_eq!(p.size, 20.0);
        assert!(!p.bold);
        assert_eq!(p.color, Color::rgb(0x2C, 0x3E, 0x50));
        assert_eq!(p.align, Alignment::Left);
    }

    #[test]
    fn test_styled_line_overrides_only_set_fields() {
        let line: BulletLine = StyledLine::new("強調")
            .size(22.0)
            .bold(true)
            .color(Color::rgb(0xE6, 0x7E, 0x22))
            .into();
        let p = defaults().resolve(&line);
        assert_eq!(p.size, 22.0);
        assert!(p.bold);
        assert_eq!(p.color, Color::rgb(0xE6, 0x7E, 0x22));
        // Unset fields keep the defaults.
        assert_eq!(p.font, "Yu Gothic");
        assert_eq!(p.align, Alignment::Left);
        assert_eq!(p.space_after, 8.0);
    }

    #[test]
    fn test_centipoint_conversion() {
        let p = defaults().resolve(&BulletLine::plain(""));
        assert_eq!(p.size_centipoints(), 2000);
        assert_eq!(p.space_after_centipoints(), 800);
    }

    #[test]
    fn test_geometry_presets() {
        assert_eq!(ShapeGeometry::Rect.preset(), "rect");
        assert_eq!(ShapeGeometry::RoundedRect.preset(), "roundRect");
    }
}
