//! Thermal Printer Rasterizer
//!
//! This crate turns page images into black and white raster data for 1-bit
//! thermal receipt printers.
//!
//! # Example
//!
//! ```rust,no_run
//! use thermal_raster::{Config, Image, PaperWidth, Rasterizer};
//!
//! let page = Image::from_rgb(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
//! let rasterizer = Rasterizer::new(Config::new(PaperWidth::TwoInch));
//! let rows = rasterizer.render(&page).unwrap();
//! ```

mod bitmap;
mod error;
mod mono;
mod paper;
mod rasterizer;
mod utils;

pub use crate::{
    bitmap::Image,
    error::Error,
    mono::{luminance, to_monochrome, Mono, MonochromeImage, THRESHOLD},
    paper::PaperWidth,
    rasterizer::{Config, Rasterizer},
    utils::{fit_to_width, pack_rows},
};

/// Re-exported so callers can pick a resampling filter without depending
/// on `image` directly.
pub use image::imageops::FilterType;

/// Type alias for 1-bit bitmap data sent to the raster encoder.
///
/// Each inner `Vec<u8>` represents a single raster line, with 8 dots
/// packed into each byte, most significant bit first. A set bit is a
/// black dot. The outer Vec represents the lines from top to bottom.
///
/// For 2 inch paper each row is 48 bytes (384 dots / 8), for 4 inch paper
/// 104 bytes (832 dots / 8).
pub type Matrix = Vec<Vec<u8>>;
