//! Average-color sampling of image regions

use crate::spatial::CellBounds;
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgb, RgbImage};

/// How a region is reduced to a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SamplingMethod {
    /// Exact per-channel arithmetic mean, rounded to nearest
    #[default]
    Mean,
    /// Resize to 1x1 with a linear filter; close to the mean but not exact
    Bilinear,
}

/// Reduce a region to one representative color
///
/// A region of a single constant color returns that color under either method.
/// An empty region yields black.
pub fn average_color<I>(region: &I, method: SamplingMethod) -> Rgb<u8>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    match method {
        SamplingMethod::Mean => mean_color(region),
        SamplingMethod::Bilinear => resampled_color(region),
    }
}

/// Average color of the pixels inside `bounds`
///
/// Bounds reaching past the image are clipped to it.
pub fn sample_cell(image: &RgbImage, bounds: CellBounds, method: SamplingMethod) -> Rgb<u8> {
    let cell = imageops::crop_imm(
        image,
        bounds.left,
        bounds.upper,
        bounds.width(),
        bounds.height(),
    );
    average_color(&*cell, method)
}

fn mean_color<I>(region: &I) -> Rgb<u8>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for (_, _, pixel) in region.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
        count += 1;
    }

    if count == 0 {
        return Rgb([0, 0, 0]);
    }

    Rgb(sums.map(|sum| ((sum + count / 2) / count) as u8))
}

fn resampled_color<I>(region: &I) -> Rgb<u8>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    if region.width() == 0 || region.height() == 0 {
        return Rgb([0, 0, 0]);
    }

    let reduced = imageops::resize(region, 1, 1, FilterType::Triangle);
    reduced
        .get_pixel_checked(0, 0)
        .copied()
        .unwrap_or(Rgb([0, 0, 0]))
}
