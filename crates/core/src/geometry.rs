//! Geometry primitives for slide layout.
//!
//! Layout constants are written in inches; the OOXML parts use English
//! Metric Units (EMU). `Frame` is the human-facing inch rectangle,
//! `Rect` the validated EMU rectangle that actually lands in a part.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// EMU per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// EMU per typographic point.
pub const EMU_PER_POINT: f64 = 12_700.0;

/// English Metric Units, the native OOXML coordinate unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Emu(pub i64);

impl Emu {
    /// Zero offset.
    pub const ZERO: Emu = Emu(0);

    /// Convert inches to EMU.
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH).round() as i64)
    }

    /// Convert points to EMU.
    pub fn from_points(points: f64) -> Self {
        Emu((points * EMU_PER_POINT).round() as i64)
    }
}

/// A rectangle in inches, as layout constants are written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    /// Create a frame from inch coordinates.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Translate the frame by an inch offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w,
            h: self.h,
        }
    }

    /// Convert to a validated EMU rectangle.
    pub fn rect(&self) -> Result<Rect> {
        Rect::new(
            Emu::from_inches(self.x),
            Emu::from_inches(self.y),
            Emu::from_inches(self.w),
            Emu::from_inches(self.h),
        )
    }
}

/// A validated rectangle in EMU. Origin must be non-negative and the
/// extent strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    x: Emu,
    y: Emu,
    cx: Emu,
    cy: Emu,
}

impl Rect {
    /// Create a rectangle, failing fast on degenerate bounds.
    pub fn new(x: Emu, y: Emu, cx: Emu, cy: Emu) -> Result<Self> {
        if cx.0 <= 0 || cy.0 <= 0 {
            return Err(Error::InvalidBounds(format!(
                "extent must be positive, got {}x{} EMU",
                cx.0, cy.0
            )));
        }
        if x.0 < 0 || y.0 < 0 {
            return Err(Error::InvalidBounds(format!(
                "origin must be non-negative, got ({}, {}) EMU",
                x.0, y.0
            )));
        }
        Ok(Self { x, y, cx, cy })
    }

    /// Rectangle spanning a full canvas from the top-left corner.
    pub fn full_canvas(width: Emu, height: Emu) -> Result<Self> {
        Self::new(Emu::ZERO, Emu::ZERO, width, height)
    }

    pub fn x(&self) -> Emu {
        self.x
    }

    pub fn y(&self) -> Emu {
        self.y
    }

    pub fn cx(&self) -> Emu {
        self.cx
    }

    pub fn cy(&self) -> Emu {
        self.cy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_from_inches() {
        assert_eq!(Emu::from_inches(1.0), Emu(914_400));
        assert_eq!(Emu::from_inches(0.5), Emu(457_200));
        assert_eq!(Emu::from_inches(13.333), Emu(12_191_695));
    }

    #[test]
    fn test_emu_from_points() {
        assert_eq!(Emu::from_points(1.0), Emu(12_700));
        assert_eq!(Emu::from_points(3.0), Emu(38_100));
    }

    #[test]
    fn test_rect_rejects_zero_extent() {
        assert!(Rect::new(Emu::ZERO, Emu::ZERO, Emu(0), Emu(100)).is_err());
        assert!(Rect::new(Emu::ZERO, Emu::ZERO, Emu(100), Emu(0)).is_err());
    }

    #[test]
    fn test_rect_rejects_negative_extent() {
        let err = Rect::new(Emu::ZERO, Emu::ZERO, Emu(-1), Emu(100)).unwrap_err();
        assert!(err.to_string().contains("Invalid layout bounds"));
    }

    #[test]
    fn test_rect_rejects_negative_origin() {
        assert!(Rect::new(Emu(-1), Emu::ZERO, Emu(100), Emu(100)).is_err());
    }

    #[test]
    fn test_frame_to_rect() {
        let rect = Frame::new(1.0, 2.0, 3.0, 0.5).rect().unwrap();
        assert_eq!(rect.x(), Emu(914_400));
        assert_eq!(rect.y(), Emu(1_828_800));
        assert_eq!(rect.cx(), Emu(2_743_200));
        assert_eq!(rect.cy(), Emu(457_200));
    }

    #[test]
    fn test_frame_offset() {
        let f = Frame::new(1.0, 1.0, 2.0, 2.0).offset(0.3, 0.2);
        assert_eq!(f.x, 1.3);
        assert_eq!(f.y, 1.2);
        assert_eq!(f.w, 2.0);
    }
}
