//! Core domain types for slide-deck generation: style configuration,
//! geometry primitives, slide specifications, and deck plans.

pub mod error;
pub mod geometry;
pub mod plan;
pub mod spec;
pub mod style;

pub use error::{Error, Result};
pub use geometry::{Emu, Frame, Rect};
pub use plan::DeckPlan;
pub use spec::{
    Alignment, BulletLine, ContentSpec, QuadrantPane, QuadrantSpec, SectionSpec, SlideSpec,
    StyledLine, TitleSpec, TwoColumnSpec,
};
pub use style::{Color, StyleConfig};
