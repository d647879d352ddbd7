//! Spatial arithmetic for the tile generator
//!
//! This module contains the integer geometry both halves of the tile pipeline need:
//! - Partitioning a source image into grid cells
//! - Laying out tiles on the contact sheet

/// Grid partitioning of source images into cells
pub mod grid;
/// Contact-sheet dimensions and tile placement
pub mod layout;

pub use grid::{CellBounds, GridCell, GridPartition};
pub use layout::SheetLayout;
