//! Random block images: every logical pixel drawn as a solid square

use crate::io::error::{Result, invalid_parameter};
use image::{Rgb, RgbImage};
use rand::Rng;

/// Shape of a block image in logical blocks and pixels per block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpec {
    /// Logical blocks horizontally
    pub width: u32,
    /// Logical blocks vertically
    pub height: u32,
    /// Edge length of one block in pixels
    pub block_size: u32,
}

impl BlockSpec {
    /// Raster size in pixels as `(width, height)`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension overflows `u32`
    pub fn pixel_dimensions(&self) -> Result<(u32, u32)> {
        let width = self.width.checked_mul(self.block_size).ok_or_else(|| {
            invalid_parameter("width", &self.width, &"width * block_size overflows")
        })?;
        let height = self.height.checked_mul(self.block_size).ok_or_else(|| {
            invalid_parameter("height", &self.height, &"height * block_size overflows")
        })?;
        Ok((width, height))
    }
}

/// A color with each channel drawn uniformly from the full byte range
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    Rgb(rng.random::<[u8; 3]>())
}

/// Generate one block image, sampling block colors in row-major order
///
/// # Errors
///
/// Returns an error if the pixel dimensions overflow `u32`
pub fn generate_block_image<R: Rng + ?Sized>(spec: &BlockSpec, rng: &mut R) -> Result<RgbImage> {
    let (pixel_width, pixel_height) = spec.pixel_dimensions()?;
    let mut image = RgbImage::new(pixel_width, pixel_height);

    for by in 0..spec.height {
        for bx in 0..spec.width {
            let color = random_color(rng);
            paint_block(&mut image, bx, by, spec.block_size, color);
        }
    }

    Ok(image)
}

// Fill the block_size square whose logical coordinate is (bx, by)
fn paint_block(image: &mut RgbImage, bx: u32, by: u32, block_size: u32, color: Rgb<u8>) {
    let x0 = bx * block_size;
    let y0 = by * block_size;
    for y in y0..y0 + block_size {
        for x in x0..x0 + block_size {
            if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}
