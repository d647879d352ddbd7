//! Contact-sheet packing of tiles into a single preview image

use crate::io::error::Result;
use crate::spatial::SheetLayout;
use image::{Rgb, RgbImage, imageops};

/// Paste tiles onto a padded sheet in input order, wrapping at the layout's column count
///
/// Tiles larger than the layout's tile size are clipped by neighbours, not rejected.
///
/// # Errors
///
/// Returns an error if the sheet dimensions overflow `u32`
pub fn build_contact_sheet(
    tiles: &[RgbImage],
    layout: &SheetLayout,
    background: Rgb<u8>,
) -> Result<RgbImage> {
    let (width, height) = layout.dimensions(tiles.len())?;
    let mut sheet = RgbImage::from_pixel(width, height, background);

    for (index, tile) in tiles.iter().enumerate() {
        let (x, y) = layout.position(index);
        imageops::replace(&mut sheet, tile, x, y);
    }

    Ok(sheet)
}
