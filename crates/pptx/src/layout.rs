//! Layout routines: one function per slide variant.
//!
//! Each routine reduces a spec to an ordered shape list using the fixed
//! frame table. Callers are responsible for keeping bullet counts and
//! text lengths within the fixed regions; there is no overflow handling.

use crate::frames::FrameTable;
use crate::shape::{BoxShape, LineDefaults, Paragraph, Shape, ShapeGeometry, TextShape};
use deck_core::{
    Alignment, BulletLine, Color, ContentSpec, Frame, QuadrantSpec, Rect, Result, SectionSpec,
    SlideSpec, StyleConfig, TitleSpec, TwoColumnSpec,
};

/// Marker title of a placeholder slide emitted for an unassigned number.
pub const PLACEHOLDER_TITLE: &str = "（予備スライド）";

/// Style and geometry context shared by the layout routines.
pub struct LayoutContext<'a> {
    pub style: &'a StyleConfig,
    pub frames: &'a FrameTable,
    /// Deck length shown in `"k / T"` footers.
    pub page_total: u32,
}

impl<'a> LayoutContext<'a> {
    pub fn new(style: &'a StyleConfig, frames: &'a FrameTable, page_total: u32) -> Self {
        Self {
            style,
            frames,
            page_total,
        }
    }

    /// Full-bleed background rectangle.
    fn background(&self, fill: Color) -> Result<Shape> {
        let bounds = Rect::full_canvas(
            self.style.canvas_width_emu(),
            self.style.canvas_height_emu(),
        )?;
        Ok(Shape::Box(BoxShape {
            bounds,
            geometry: ShapeGeometry::Rect,
            fill,
            outline: None,
        }))
    }

    /// Solid rectangle at a frame.
    fn filled_box(&self, frame: Frame, fill: Color) -> Result<Shape> {
        Ok(Shape::Box(BoxShape {
            bounds: frame.rect()?,
            geometry: ShapeGeometry::Rect,
            fill,
            outline: None,
        }))
    }

    /// Single-paragraph text box.
    fn text_box(
        &self,
        frame: Frame,
        text: &str,
        size: f64,
        bold: bool,
        color: Color,
        align: Alignment,
    ) -> Result<Shape> {
        Ok(Shape::Text(TextShape {
            bounds: frame.rect()?,
            paragraphs: vec![Paragraph {
                text: text.to_string(),
                size,
                bold,
                color,
                font: self.style.font_family.clone(),
                align,
                space_after: 0.0,
            }],
        }))
    }

    /// Stacked multi-line text box; each line resolves its own style
    /// against the supplied defaults.
    fn stacked(&self, frame: Frame, lines: &[BulletLine], defaults: &LineDefaults) -> Result<Shape> {
        Ok(Shape::Text(TextShape {
            bounds: frame.rect()?,
            paragraphs: lines.iter().map(|line| defaults.resolve(line)).collect(),
        }))
    }

    /// Colored header band plus the slide title.
    fn header(&self, title: &str) -> Result<Vec<Shape>> {
        let band = Frame::new(
            0.0,
            0.0,
            self.style.canvas_width,
            self.frames.header_band_height,
        );
        Ok(vec![
            self.filled_box(band, self.style.primary)?,
            self.text_box(
                self.frames.header_title,
                title,
                28.0,
                true,
                self.style.white,
                Alignment::Left,
            )?,
        ])
    }

    /// `"k / T"` page-number footer, bottom right.
    fn footer(&self, number: u32) -> Result<Shape> {
        self.text_box(
            self.frames.footer,
            &format!("{} / {}", number, self.page_total),
            10.0,
            false,
            self.style.muted,
            Alignment::Right,
        )
    }

    /// Default line style for content-slide bullets.
    fn content_defaults(&self) -> LineDefaults {
        LineDefaults {
            size: 20.0,
            bold: false,
            color: self.style.text,
            font: self.style.font_family.clone(),
            align: Alignment::Left,
            space_after: 8.0,
        }
    }

    /// Default line style for two-column panel lines (1.6 line spacing).
    fn panel_defaults(&self) -> LineDefaults {
        LineDefaults {
            size: 18.0,
            bold: false,
            color: self.style.text,
            font: self.style.font_family.clone(),
            align: Alignment::Left,
            space_after: 18.0 * 0.6,
        }
    }

    /// Cover slide: full-bleed primary background, horizontal rule
    /// accents, headline, subtitle, date, and presenter.
    pub fn title_slide(&self, spec: &TitleSpec) -> Result<Vec<Shape>> {
        let style = self.style;
        let frames = self.frames;
        Ok(vec![
            self.background(style.primary)?,
            self.filled_box(frames.cover_rule_top, style.accent_two)?,
            self.text_box(
                frames.cover_title,
                &spec.title,
                36.0,
                true,
                style.white,
                Alignment::Left,
            )?,
            self.text_box(
                frames.cover_subtitle,
                &spec.subtitle,
                22.0,
                false,
                style.on_dark_muted,
                Alignment::Left,
            )?,
            self.filled_box(frames.cover_rule_bottom, style.accent_two)?,
            self.text_box(
                frames.cover_date,
                &spec.date_text,
                16.0,
                false,
                style.on_dark_muted,
                Alignment::Left,
            )?,
            self.text_box(
                frames.cover_presenter,
                &spec.presenter_text,
                16.0,
                false,
                style.on_dark_muted,
                Alignment::Right,
            )?,
        ])
    }

    /// Section divider: large number glyph, title, optional subtitle.
    pub fn section_slide(&self, spec: &SectionSpec) -> Result<Vec<Shape>> {
        let style = self.style;
        let frames = self.frames;
        let mut shapes = vec![
            self.background(style.section_background)?,
            self.text_box(
                frames.section_number,
                &spec.number,
                96.0,
                true,
                style.accent_one,
                Alignment::Left,
            )?,
            self.text_box(
                frames.section_title,
                &spec.title,
                36.0,
                true,
                style.white,
                Alignment::Left,
            )?,
        ];
        if let Some(subtitle) = &spec.subtitle {
            shapes.push(self.text_box(
                frames.section_subtitle,
                subtitle,
                20.0,
                false,
                style.on_dark_muted,
                Alignment::Left,
            )?);
        }
        Ok(shapes)
    }

    /// Content slide: header band, stacked bullets, optional footnote,
    /// page footer.
    pub fn content_slide(&self, spec: &ContentSpec) -> Result<Vec<Shape>> {
        let mut shapes = self.header(&spec.title)?;
        shapes.push(self.stacked(self.frames.body, &spec.bullets, &self.content_defaults())?);
        if let Some(note) = &spec.note {
            shapes.push(self.note_line(self.frames.note, note)?);
        }
        shapes.push(self.footer(spec.slide_number)?);
        Ok(shapes)
    }

    /// Two tinted panels side by side, each with a subtitle and lines.
    pub fn two_column_slide(&self, spec: &TwoColumnSpec) -> Result<Vec<Shape>> {
        let style = self.style;
        let frames = self.frames;
        let defaults = self.panel_defaults();

        let mut shapes = self.header(&spec.title)?;
        shapes.push(self.filled_box(frames.left_panel, style.panel_tint_one)?);
        shapes.push(self.text_box(
            frames.left_title,
            &spec.left_title,
            22.0,
            true,
            style.accent_one,
            Alignment::Left,
        )?);
        shapes.push(self.stacked(frames.left_body, &spec.left_lines, &defaults)?);

        shapes.push(self.filled_box(frames.right_panel, style.panel_tint_two)?);
        shapes.push(self.text_box(
            frames.right_title,
            &spec.right_title,
            22.0,
            true,
            style.accent_two,
            Alignment::Left,
        )?);
        shapes.push(self.stacked(frames.right_body, &spec.right_lines, &defaults)?);

        if let Some(note) = &spec.note {
            shapes.push(self.note_line(frames.note_low, note)?);
        }
        shapes.push(self.footer(spec.slide_number)?);
        Ok(shapes)
    }

    /// Quadrant summary: exactly four labeled rounded rectangles in a
    /// 2x2 grid, alternating accent colors.
    pub fn quadrant_slide(&self, spec: &QuadrantSpec) -> Result<Vec<Shape>> {
        let frames = self.frames;
        let mut shapes = self.header(&spec.title)?;

        for (cell, pane) in frames.quadrant_cells.iter().zip(spec.quadrants.iter()) {
            shapes.push(Shape::Box(BoxShape {
                bounds: cell.rect()?,
                geometry: ShapeGeometry::RoundedRect,
                fill: pane.tint,
                outline: Some(pane.accent),
            }));

            let label = frames.quadrant_label.offset(cell.x, cell.y);
            shapes.push(self.text_box(
                label,
                &pane.label,
                20.0,
                true,
                pane.accent,
                Alignment::Left,
            )?);

            let body = frames.quadrant_body.offset(cell.x, cell.y);
            let lines: Vec<BulletLine> =
                pane.lines.iter().map(|l| BulletLine::plain(l)).collect();
            let defaults = LineDefaults {
                size: 16.0,
                bold: false,
                color: self.style.text,
                font: self.style.font_family.clone(),
                align: Alignment::Left,
                space_after: 0.0,
            };
            shapes.push(self.stacked(body, &lines, &defaults)?);
        }
        shapes.push(self.footer(spec.slide_number)?);
        Ok(shapes)
    }

    /// Placeholder slide for a number with no registered spec: marker
    /// title, empty body, footer.
    pub fn placeholder_slide(&self, number: u32) -> Result<Vec<Shape>> {
        let mut shapes = self.header(PLACEHOLDER_TITLE)?;
        shapes.push(self.footer(number)?);
        Ok(shapes)
    }

    /// Dispatch over the slide spec variants.
    pub fn slide(&self, spec: &SlideSpec) -> Result<Vec<Shape>> {
        match spec {
            SlideSpec::Title(spec) => self.title_slide(spec),
            SlideSpec::Section(spec) => self.section_slide(spec),
            SlideSpec::Content(spec) => self.content_slide(spec),
            SlideSpec::TwoColumn(spec) => self.two_column_slide(spec),
            SlideSpec::Quadrant(spec) => self.quadrant_slide(spec),
        }
    }

    fn note_line(&self, frame: Frame, note: &str) -> Result<Shape> {
        self.text_box(frame, note, 14.0, false, self.style.muted, Alignment::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{QuadrantPane, StyledLine};

    fn ctx_parts() -> (StyleConfig, FrameTable) {
        (StyleConfig::default(), FrameTable::standard())
    }

    fn paragraphs(shape: &Shape) -> &[Paragraph] {
        match shape {
            Shape::Text(text) => &text.paragraphs,
            Shape::Box(_) => panic!("expected a text shape"),
        }
    }

    #[test]
    fn test_content_slide_keeps_bullet_count_and_order() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 10);
        let spec = ContentSpec::new(3, "タイトル").bullets(vec![
            "一行目".into(),
            "".into(),
            StyledLine::new("強調行").size(22.0).bold(true).into(),
        ]);
        let shapes = ctx.content_slide(&spec).unwrap();

        // band, title, body, footer
        assert_eq!(shapes.len(), 4);
        let body = paragraphs(&shapes[2]);
        assert_eq!(body.len(), 3);
        assert_eq!(body[0].text, "一行目");
        assert_eq!(body[1].text, "");
        assert_eq!(body[2].text, "強調行");
        assert_eq!(body[2].size, 22.0);
        assert!(body[2].bold);
        // Plain lines carry the documented defaults.
        assert_eq!(body[0].size, 20.0);
        assert_eq!(body[0].color, style.text);
    }

    #[test]
    fn test_content_slide_note_region_skipped_when_absent() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 10);

        let without = ctx.content_slide(&ContentSpec::new(3, "T")).unwrap();
        let with = ctx
            .content_slide(&ContentSpec::new(3, "T").note("補足"))
            .unwrap();
        assert_eq!(with.len(), without.len() + 1);
    }

    #[test]
    fn test_footer_renders_literal_page_fraction() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 33);
        let shapes = ctx.content_slide(&ContentSpec::new(7, "T")).unwrap();
        let footer = paragraphs(shapes.last().unwrap());
        assert_eq!(footer[0].text, "7 / 33");
        assert_eq!(footer[0].align, Alignment::Right);
    }

    #[test]
    fn test_two_column_panel_line_counts_are_independent() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 10);
        let spec = TwoColumnSpec::new(2, "T")
            .left("左", vec!["a".into(), "b".into(), "c".into()])
            .right("右", vec!["x".into()]);
        let shapes = ctx.two_column_slide(&spec).unwrap();

        // band, title, left panel, left title, left body,
        // right panel, right title, right body, footer
        assert_eq!(shapes.len(), 9);
        assert_eq!(paragraphs(&shapes[4]).len(), 3);
        assert_eq!(paragraphs(&shapes[7]).len(), 1);
        // Panel lines use 1.6 line spacing over an 18 pt base.
        assert_eq!(paragraphs(&shapes[4])[0].space_after_centipoints(), 1080);
    }

    #[test]
    fn test_quadrant_slide_always_has_four_boxes_at_fixed_cells() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 33);
        let pane = |label: &str, accent, tint| {
            QuadrantPane::new(label, vec!["line".to_string()], accent, tint)
        };
        let spec = QuadrantSpec::new(
            32,
            "まとめ",
            [
                pane("① 考え方", style.accent_one, style.quadrant_tint_one),
                pane("② 活動内容", style.accent_two, style.quadrant_tint_two),
                pane("③ 成果物", style.accent_one, style.quadrant_tint_one),
                pane("④ お願い", style.accent_two, style.quadrant_tint_two),
            ],
        );
        let shapes = ctx.quadrant_slide(&spec).unwrap();

        let boxes: Vec<&BoxShape> = shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Box(b) if b.geometry == ShapeGeometry::RoundedRect => Some(b),
                _ => None,
            })
            .collect();
        assert_eq!(boxes.len(), 4);
        for (cell, boxed) in frames.quadrant_cells.iter().zip(boxes.iter()) {
            assert_eq!(boxed.bounds, cell.rect().unwrap());
        }
        assert_eq!(boxes[0].outline, Some(style.accent_one));
        assert_eq!(boxes[1].outline, Some(style.accent_two));
    }

    #[test]
    fn test_section_subtitle_optional() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 10);

        let bare = ctx.section_slide(&SectionSpec::new("①", "T")).unwrap();
        let full = ctx
            .section_slide(&SectionSpec::new("①", "T").subtitle("S"))
            .unwrap();
        assert_eq!(bare.len(), 3);
        assert_eq!(full.len(), 4);
    }

    #[test]
    fn test_title_slide_shape_inventory() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 10);
        let spec = TitleSpec::new("A", "B", "C", "D");
        let shapes = ctx.title_slide(&spec).unwrap();

        // background, two rules, title, subtitle, date, presenter
        assert_eq!(shapes.len(), 7);
        let boxes = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Box(_)))
            .count();
        assert_eq!(boxes, 3);
        let presenter = paragraphs(shapes.last().unwrap());
        assert_eq!(presenter[0].align, Alignment::Right);
    }

    #[test]
    fn test_placeholder_has_marker_title_and_empty_body() {
        let (style, frames) = ctx_parts();
        let ctx = LayoutContext::new(&style, &frames, 33);
        let shapes = ctx.placeholder_slide(7).unwrap();

        // band, marker title, footer: no body region at all
        assert_eq!(shapes.len(), 3);
        assert_eq!(paragraphs(&shapes[1])[0].text, PLACEHOLDER_TITLE);
        assert_eq!(paragraphs(&shapes[2])[0].text, "7 / 33");
    }

    #[test]
    fn test_degenerate_canvas_fails_fast() {
        let mut style = StyleConfig::default();
        style.canvas_width = 0.0;
        let frames = FrameTable::standard();
        let ctx = LayoutContext::new(&style, &frames, 10);
        assert!(ctx.title_slide(&TitleSpec::new("A", "B", "C", "D")).is_err());
    }
}
