//! Deck assembly: translate slide specs into a saved `.pptx` artifact.

use crate::frames::FrameTable;
use crate::layout::LayoutContext;
use crate::package;
use crate::shape::Shape;
use deck_core::{
    ContentSpec, DeckPlan, QuadrantSpec, Result, SectionSpec, SlideSpec, StyleConfig, TitleSpec,
    TwoColumnSpec,
};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Builds a deck slide by slide and saves it as a `.pptx` package.
///
/// Slides append in call order; the deck is immutable once saved.
pub struct DeckBuilder {
    style: StyleConfig,
    frames: FrameTable,
    page_total: u32,
    slides: Vec<Vec<Shape>>,
}

impl DeckBuilder {
    /// Create a builder for a deck of `page_total` slides.
    pub fn new(style: StyleConfig, page_total: u32) -> Result<Self> {
        Self::with_frames(style, FrameTable::standard(), page_total)
    }

    /// Create a builder with a custom frame table.
    pub fn with_frames(style: StyleConfig, frames: FrameTable, page_total: u32) -> Result<Self> {
        style.validate()?;
        Ok(Self {
            style,
            frames,
            page_total,
            slides: Vec::new(),
        })
    }

    /// Render every slide of a plan, in order, substituting a
    /// placeholder slide for numbers with no registered spec.
    pub fn from_plan(style: StyleConfig, plan: &DeckPlan) -> Result<Self> {
        let mut builder = Self::new(style, plan.total())?;
        for (number, spec) in plan.iter() {
            match spec {
                Some(spec) => builder.add_slide(spec)?,
                None => {
                    log::debug!("slide {} has no spec, emitting placeholder", number);
                    builder.add_placeholder_slide(number)?;
                }
            }
        }
        Ok(builder)
    }

    fn ctx(&self) -> LayoutContext<'_> {
        LayoutContext::new(&self.style, &self.frames, self.page_total)
    }

    /// Append a slide for any spec variant.
    pub fn add_slide(&mut self, spec: &SlideSpec) -> Result<()> {
        let shapes = self.ctx().slide(spec)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Append a cover slide.
    pub fn add_title_slide(&mut self, spec: &TitleSpec) -> Result<()> {
        let shapes = self.ctx().title_slide(spec)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Append a section divider.
    pub fn add_section_slide(&mut self, spec: &SectionSpec) -> Result<()> {
        let shapes = self.ctx().section_slide(spec)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Append a bulleted content slide.
    pub fn add_content_slide(&mut self, spec: &ContentSpec) -> Result<()> {
        let shapes = self.ctx().content_slide(spec)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Append a two-column slide.
    pub fn add_two_column_slide(&mut self, spec: &TwoColumnSpec) -> Result<()> {
        let shapes = self.ctx().two_column_slide(spec)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Append a quadrant summary slide.
    pub fn add_quadrant_slide(&mut self, spec: &QuadrantSpec) -> Result<()> {
        let shapes = self.ctx().quadrant_slide(spec)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Append a placeholder slide for an unassigned number.
    pub fn add_placeholder_slide(&mut self, number: u32) -> Result<()> {
        let shapes = self.ctx().placeholder_slide(number)?;
        self.slides.push(shapes);
        Ok(())
    }

    /// Number of slides appended so far.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Serialize the deck to a writer. Returns the slide count.
    pub fn save_to_writer<W: Write + Seek>(&self, target: W) -> Result<usize> {
        package::write_package(target, &self.style, &self.slides)?;
        Ok(self.slides.len())
    }

    /// Serialize the deck to a file path. Returns the slide count.
    ///
    /// Fails with an I/O error when the path's parent directory does
    /// not exist or is not writable.
    pub fn save(&self, path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        let count = self.save_to_writer(BufWriter::new(file))?;
        log::info!("saved {} slides to {}", count, path.display());
        Ok(count)
    }
}
