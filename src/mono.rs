//! Monochrome conversion.
//!
//! A flat luminance threshold with no dithering. Midtones are lost, which
//! is acceptable for the text and line art printed on receipts.

use image::{GrayImage, Luma};
use log::debug;

use crate::bitmap::Image;

/// Luminance at or below this value prints black.
pub const THRESHOLD: u8 = 128;

/// A single monochrome pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mono {
    Black,
    White,
}

impl Mono {
    /// Classify a luminance value against [`THRESHOLD`].
    pub fn from_luminance(l: u8) -> Self {
        if l > THRESHOLD {
            Mono::White
        } else {
            Mono::Black
        }
    }

    pub fn is_black(self) -> bool {
        self == Mono::Black
    }
}

/// Perceptual luminance `0.30 R + 0.59 G + 0.11 B`, truncated.
///
/// Computed in integer hundredths so the result is exact; the maximum is
/// `100 * 255 / 100 = 255`. This differs on purpose from truncating the
/// floating point sum, which rounds some exact values such as 129 for
/// `[1, 209, 49]` down by one.
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    let weighted = 30 * u32::from(r) + 59 * u32::from(g) + 11 * u32::from(b);
    (weighted / 100) as u8
}

/// Black and white image with the same dimensions as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonochromeImage {
    width: u32,
    height: u32,
    pixels: Vec<Mono>,
}

impl MonochromeImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// # Panics
    /// If the coordinates are outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Mono {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mono]> {
        // chunks_exact panics on 0
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact(width)
    }

    /// Render as 8-bit grayscale, black = 0 and white = 255.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| match self.pixel(x, y) {
            Mono::Black => Luma([0]),
            Mono::White => Luma([255]),
        })
    }
}

/// Convert a color image into black and white.
///
/// Each pixel becomes [`Mono::White`] when its [`luminance`] is above
/// [`THRESHOLD`], otherwise [`Mono::Black`]. The input is left untouched and
/// a fresh output is allocated on every call.
pub fn to_monochrome(image: &Image) -> MonochromeImage {
    let (width, height) = image.dimensions();
    debug!("monochrome conversion {}x{}", width, height);

    let pixels = image
        .pixels()
        .iter()
        .map(|&px| Mono::from_luminance(luminance(px)))
        .collect();

    MonochromeImage {
        width,
        height,
        pixels,
    }
}
