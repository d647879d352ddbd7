//! Two small image batch tools sharing one library
//!
//! `generate-tiles` splits a source image into a grid, reduces every cell to its
//! average color, writes one solid-color tile per cell and packs the tiles into a
//! contact sheet. `random-blocks` writes images made of randomly colored square
//! blocks.

#![forbid(unsafe_code)]

/// Command-line drivers, file output and terminal feedback
pub mod io;
/// Color sampling, tile synthesis, contact sheets and block images
pub mod raster;
/// Grid partitioning and contact-sheet geometry
pub mod spatial;

pub use io::error::{Result, TileError};
