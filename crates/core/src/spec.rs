//! Declarative slide specifications.
//!
//! Each slide in a deck is described by one [`SlideSpec`] variant; the
//! builder renders exactly one output slide per spec, in order.

use crate::style::Color;
use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// OOXML `algn` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }
}

/// One line of body text, either plain (layout defaults apply) or with
/// explicit per-line style overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BulletLine {
    Plain(String),
    Styled(StyledLine),
}

impl BulletLine {
    /// A plain line rendered with the layout's default style.
    pub fn plain(text: impl Into<String>) -> Self {
        BulletLine::Plain(text.into())
    }

    /// The line's text regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            BulletLine::Plain(text) => text,
            BulletLine::Styled(line) => &line.text,
        }
    }
}

impl From<&str> for BulletLine {
    fn from(text: &str) -> Self {
        BulletLine::Plain(text.to_string())
    }
}

impl From<StyledLine> for BulletLine {
    fn from(line: StyledLine) -> Self {
        BulletLine::Styled(line)
    }
}

/// A body line with explicit style overrides. Unset fields fall back to
/// the defaults of the layout the line appears in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyledLine {
    pub text: String,
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub color: Option<Color>,
    pub font: Option<String>,
    pub align: Option<Alignment>,
}

impl StyledLine {
    /// Start a styled line with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Override the font size in points.
    pub fn size(mut self, points: f64) -> Self {
        self.size = Some(points);
        self
    }

    /// Override the bold flag.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Override the text color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the font family.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Override the paragraph alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }
}

/// Cover slide: headline, subtitle, date, presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub title: String,
    pub subtitle: String,
    pub date_text: String,
    pub presenter_text: String,
}

impl TitleSpec {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        date_text: impl Into<String>,
        presenter_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            date_text: date_text.into(),
            presenter_text: presenter_text.into(),
        }
    }
}

/// Section divider: large number glyph, title, optional subtitle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub number: String,
    pub title: String,
    pub subtitle: Option<String>,
}

impl SectionSpec {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Standard content slide: header band, stacked bullet lines, optional
/// footnote, page footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSpec {
    pub slide_number: u32,
    pub title: String,
    pub bullets: Vec<BulletLine>,
    pub note: Option<String>,
}

impl ContentSpec {
    pub fn new(slide_number: u32, title: impl Into<String>) -> Self {
        Self {
            slide_number,
            title: title.into(),
            bullets: Vec::new(),
            note: None,
        }
    }

    pub fn bullets(mut self, bullets: Vec<BulletLine>) -> Self {
        self.bullets = bullets;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Two tinted side-by-side panels, each with a subtitle and stacked lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoColumnSpec {
    pub slide_number: u32,
    pub title: String,
    pub left_title: String,
    pub left_lines: Vec<BulletLine>,
    pub right_title: String,
    pub right_lines: Vec<BulletLine>,
    pub note: Option<String>,
}

impl TwoColumnSpec {
    pub fn new(slide_number: u32, title: impl Into<String>) -> Self {
        Self {
            slide_number,
            title: title.into(),
            left_title: String::new(),
            left_lines: Vec::new(),
            right_title: String::new(),
            right_lines: Vec::new(),
            note: None,
        }
    }

    pub fn left(mut self, title: impl Into<String>, lines: Vec<BulletLine>) -> Self {
        self.left_title = title.into();
        self.left_lines = lines;
        self
    }

    pub fn right(mut self, title: impl Into<String>, lines: Vec<BulletLine>) -> Self {
        self.right_title = title.into();
        self.right_lines = lines;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// One cell of a quadrant summary slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantPane {
    /// Short label shown on the first line.
    pub label: String,
    /// Body lines below the label.
    pub lines: Vec<String>,
    /// Outline and label color.
    pub accent: Color,
    /// Fill tint.
    pub tint: Color,
}

impl QuadrantPane {
    pub fn new(label: impl Into<String>, lines: Vec<String>, accent: Color, tint: Color) -> Self {
        Self {
            label: label.into(),
            lines,
            accent,
            tint,
        }
    }
}

/// Summary slide with exactly four labeled rounded rectangles in a 2x2 grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantSpec {
    pub slide_number: u32,
    pub title: String,
    pub quadrants: [QuadrantPane; 4],
}

impl QuadrantSpec {
    pub fn new(slide_number: u32, title: impl Into<String>, quadrants: [QuadrantPane; 4]) -> Self {
        Self {
            slide_number,
            title: title.into(),
            quadrants,
        }
    }
}

/// Tagged description of one slide to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlideSpec {
    Title(TitleSpec),
    Section(SectionSpec),
    Content(ContentSpec),
    TwoColumn(TwoColumnSpec),
    Quadrant(QuadrantSpec),
}

impl SlideSpec {
    /// Footer slide number, for the variants that carry one.
    pub fn slide_number(&self) -> Option<u32> {
        match self {
            SlideSpec::Title(_) | SlideSpec::Section(_) => None,
            SlideSpec::Content(spec) => Some(spec.slide_number),
            SlideSpec::TwoColumn(spec) => Some(spec.slide_number),
            SlideSpec::Quadrant(spec) => Some(spec.slide_number),
        }
    }
}

impl From<TitleSpec> for SlideSpec {
    fn from(spec: TitleSpec) -> Self {
        SlideSpec::Title(spec)
    }
}

impl From<SectionSpec> for SlideSpec {
    fn from(spec: SectionSpec) -> Self {
        SlideSpec::Section(spec)
    }
}

impl From<ContentSpec> for SlideSpec {
    fn from(spec: ContentSpec) -> Self {
        SlideSpec::Content(spec)
    }
}

impl From<TwoColumnSpec> for SlideSpec {
    fn from(spec: TwoColumnSpec) -> Self {
        SlideSpec::TwoColumn(spec)
    }
}

impl From<QuadrantSpec> for SlideSpec {
    fn from(spec: QuadrantSpec) -> Self {
        SlideSpec::Quadrant(spec)
    }
}
