//! Error types for slide-deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or saving a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create or write the output file.
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    /// A layout region has zero or negative dimensions.
    #[error("Invalid layout bounds: {0}")]
    InvalidBounds(String),

    /// A deck plan entry is inconsistent (slide number out of range, duplicate, ...).
    #[error("Invalid deck plan: {0}")]
    InvalidPlan(String),

    /// ZIP container error while writing the OPC package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML emission error while writing an OOXML part.
    #[error("XML error: {0}")]
    XmlError(String),
}
