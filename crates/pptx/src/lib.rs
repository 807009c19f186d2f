//! PPTX (Office Open XML) writer backend for slide-deck generation.
//!
//! Translates declarative slide specs into positioned shapes and writes
//! the result as an OPC package (ZIP archive of XML parts).

pub mod builder;
pub mod frames;
pub mod layout;
pub mod package;
pub mod shape;
pub mod xml;

pub use builder::DeckBuilder;
pub use frames::FrameTable;
pub use layout::PLACEHOLDER_TITLE;
pub use shape::{BoxShape, LineDefaults, Paragraph, Shape, ShapeGeometry, TextShape};
