//! Fixed layout geometry, collected in one table.
//!
//! Every visual element's position and size is an explicit constant;
//! there is no layout solving. Keeping the constants here rather than
//! inline in the layout routines lets layout variants share coordinate
//! math instead of duplicating it.

use deck_core::Frame;

/// One inch-fraction per typographic point.
const PT: f64 = 1.0 / 72.0;

/// Named frames for every fixed slide region, in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTable {
    /// Height of the colored header band (full canvas width).
    pub header_band_height: f64,
    /// Header title inside the band.
    pub header_title: Frame,
    /// Page-number footer, bottom right.
    pub footer: Frame,
    /// Main bullet region of a content slide.
    pub body: Frame,
    /// Footnote line of a content slide.
    pub note: Frame,
    /// Footnote line of a two-column slide (sits lower).
    pub note_low: Frame,

    // Cover slide.
    pub cover_rule_top: Frame,
    pub cover_title: Frame,
    pub cover_subtitle: Frame,
    pub cover_rule_bottom: Frame,
    pub cover_date: Frame,
    pub cover_presenter: Frame,

    // Section divider.
    pub section_number: Frame,
    pub section_title: Frame,
    pub section_subtitle: Frame,

    // Two-column slide.
    pub left_panel: Frame,
    pub left_title: Frame,
    pub left_body: Frame,
    pub right_panel: Frame,
    pub right_title: Frame,
    pub right_body: Frame,

    // Quadrant slide: four fixed cells plus label/body insets relative
    // to each cell origin.
    pub quadrant_cells: [Frame; 4],
    pub quadrant_label: Frame,
    pub quadrant_body: Frame,
}

impl FrameTable {
    /// The standard 13.333 x 7.5 in geometry of the consulting deck.
    pub fn standard() -> Self {
        Self {
            header_band_height: 1.2,
            header_title: Frame::new(0.8, 0.15, 11.5, 0.9),
            footer: Frame::new(11.8, 6.9, 1.2, 0.4),
            body: Frame::new(1.0, 1.6, 11.3, 5.0),
            note: Frame::new(1.0, 6.5, 11.3, 0.5),
            note_low: Frame::new(1.0, 6.8, 11.3, 0.5),

            cover_rule_top: Frame::new(1.0, 1.8, 11.3, 3.0 * PT),
            cover_title: Frame::new(1.0, 2.0, 11.3, 1.5),
            cover_subtitle: Frame::new(1.0, 3.5, 11.3, 0.8),
            cover_rule_bottom: Frame::new(1.0, 5.2, 11.3, 1.0 * PT),
            cover_date: Frame::new(1.0, 5.4, 5.0, 0.5),
            cover_presenter: Frame::new(7.0, 5.4, 5.3, 0.5),

            section_number: Frame::new(1.0, 1.5, 2.0, 2.5),
            section_title: Frame::new(1.0, 3.5, 11.0, 1.2),
            section_subtitle: Frame::new(1.0, 4.8, 11.0, 0.8),

            left_panel: Frame::new(0.6, 1.5, 5.6, 5.2),
            left_title: Frame::new(0.8, 1.6, 5.2, 0.6),
            left_body: Frame::new(0.8, 2.3, 5.2, 4.0),
            right_panel: Frame::new(6.8, 1.5, 5.8, 5.2),
            right_title: Frame::new(7.0, 1.6, 5.4, 0.6),
            right_body: Frame::new(7.0, 2.3, 5.4, 4.0),

            quadrant_cells: [
                Frame::new(0.8, 1.5, 5.5, 2.5),
                Frame::new(6.8, 1.5, 5.5, 2.5),
                Frame::new(0.8, 4.3, 5.5, 2.5),
                Frame::new(6.8, 4.3, 5.5, 2.5),
            ],
            // Insets are relative to the owning cell's origin.
            quadrant_label: Frame::new(0.3, 0.2, 4.8, 0.5),
            quadrant_body: Frame::new(0.3, 0.8, 4.8, 1.5),
        }
    }
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::standard()
    }
}
