use std::convert::TryFrom;

use image::imageops::{self, FilterType};
use log::debug;

use crate::{
    bitmap::Image,
    error::Error,
    mono::MonochromeImage,
    Matrix,
};

/// Scale a page to the printer dot width, keeping the aspect ratio.
///
/// The new height is `height * dots / width`, truncated and never below one
/// line. Fails with [`Error::ScaledTooTall`] when that height does not fit
/// in a `u32`.
pub fn fit_to_width(image: &Image, dots: u32, filter: FilterType) -> Result<Image, Error> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || dots == 0 {
        return Err(Error::EmptyImage);
    }
    if width == dots {
        return Ok(image.clone());
    }

    let scaled = u64::from(height) * u64::from(dots) / u64::from(width);
    let scaled_height = match u32::try_from(scaled) {
        Ok(h) => h.max(1),
        Err(_) => return Err(Error::ScaledTooTall { height: scaled }),
    };
    debug!(
        "scaling {}x{} to {}x{} ({:?})",
        width, height, dots, scaled_height, filter
    );

    let resized = imageops::resize(&image.to_rgb_image(), dots, scaled_height, filter);
    Ok(Image::from(resized))
}

/// Pack a monochrome image into 1-bit raster lines `dots` wide.
///
/// Each line holds `ceil(dots / 8)` bytes, most significant bit first, with
/// a set bit for a black dot. Lines narrower than `dots` are padded white.
pub fn pack_rows(image: &MonochromeImage, dots: u32) -> Result<Matrix, Error> {
    let (width, height) = image.dimensions();
    if width > dots {
        return Err(Error::ImageTooWide { width, dots });
    }

    let row_bytes = (dots as usize + 7) / 8;
    let mut bw: Matrix = Vec::with_capacity(height as usize);

    for y in 0..height {
        let mut buf = vec![0u8; row_bytes];
        for x in 0..width {
            if image.pixel(x, y).is_black() {
                buf[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
        bw.push(buf);
    }

    Ok(bw)
}
