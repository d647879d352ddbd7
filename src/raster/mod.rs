//! Raster synthesis: color sampling, solid tiles, contact sheets and block images

/// Random block image generation
pub mod blocks;
/// Average-color sampling of image regions
pub mod sampling;
/// Contact-sheet packing
pub mod sheet;
/// Solid-color tiles and their file names
pub mod tiles;

pub use sampling::SamplingMethod;
