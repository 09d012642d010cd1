//! Error types for raster conversion.
//!
//! The monochrome threshold itself cannot fail. Errors come from the steps
//! around it: building an image from a raw buffer, scaling, packing rows
//! for a paper width and reading or writing files.

use thiserror::Error;

/// Main error type for raster conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw pixel buffer length does not match the declared dimensions.
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Image has zero width or height and cannot be scaled.
    #[error("Image has no pixels")]
    EmptyImage,

    /// Scaling to the paper width would need more lines than a `u32` holds.
    #[error("Scaled image would be {height} lines tall")]
    ScaledTooTall { height: u64 },

    /// Image does not fit on the paper.
    ///
    /// Raised when scaling is disabled and a page is wider than the
    /// printable width, or when packing rows for a narrower paper.
    #[error("Image is {width} dots wide, paper holds {dots} dots")]
    ImageTooWide { width: u32, dots: u32 },

    /// Decoding or encoding an image file failed.
    #[error(transparent)]
    ImageError(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
