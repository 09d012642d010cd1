use image::RgbImage;

use crate::error::Error;

/// Color page image as produced by the upstream renderer.
///
/// Pixels are stored row by row, top to bottom. The image is immutable
/// once built; every transform in this crate returns a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Image {
    /// Build an image from packed `R G B` bytes.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        Self::from_channels(width, height, &data, 3)
    }

    /// Build an image from packed `R G B A` bytes.
    ///
    /// Alpha is dropped, only the color channels are kept.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, Error> {
        Self::from_channels(width, height, &data, 4)
    }

    /// Image filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Image {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    fn from_channels(width: u32, height: u32, data: &[u8], channels: usize) -> Result<Self, Error> {
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(channels)
            .map(|px| [px[0], px[1], px[2]])
            .collect();

        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color channels of the pixel at (x, y).
    ///
    /// # Panics
    /// If the coordinates are outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub(crate) fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let raw = self.pixels.iter().flat_map(|px| px.iter().copied()).collect();
        // Length is width * height * 3 by construction.
        RgbImage::from_raw(self.width, self.height, raw).unwrap_or_else(|| RgbImage::new(0, 0))
    }
}

impl From<&RgbImage> for Image {
    fn from(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Image {
            width,
            height,
            pixels: img.pixels().map(|px| px.0).collect(),
        }
    }
}

impl From<RgbImage> for Image {
    fn from(img: RgbImage) -> Self {
        Image::from(&img)
    }
}
