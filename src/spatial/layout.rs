//! Contact-sheet geometry: sheet dimensions and tile placement

use crate::io::error::{Result, invalid_parameter};

/// Fixed-column arrangement of equally sized square tiles with uniform padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    columns: u32,
    tile_size: u32,
    padding: u32,
}

impl SheetLayout {
    /// Create a layout
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is zero
    pub fn new(columns: u32, tile_size: u32, padding: u32) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter(
                "preview_cols",
                &columns,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            columns,
            tile_size,
            padding,
        })
    }

    /// Number of tile columns
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Edge length of each tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Gap between tiles and around the border
    pub const fn padding(&self) -> u32 {
        self.padding
    }

    /// Number of tile rows needed for `tile_count` tiles
    pub const fn rows_for(&self, tile_count: usize) -> usize {
        tile_count.div_ceil(self.columns as usize)
    }

    /// Sheet size `(width, height)` for `tile_count` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension does not fit in `u32`
    pub fn dimensions(&self, tile_count: usize) -> Result<(u32, u32)> {
        let width = self.span(self.columns).ok_or_else(|| {
            invalid_parameter("preview_cols", &self.columns, &"sheet width overflows")
        })?;
        let height = u32::try_from(self.rows_for(tile_count))
            .ok()
            .and_then(|rows| self.span(rows))
            .ok_or_else(|| invalid_parameter("tile_count", &tile_count, &"sheet height overflows"))?;

        Ok((width, height))
    }

    /// Top-left corner of the tile at `index` in input order
    ///
    /// Coordinates are `i64` to match `image::imageops::replace`.
    pub fn position(&self, index: usize) -> (i64, i64) {
        let columns = self.columns as usize;
        let stride = i64::from(self.tile_size) + i64::from(self.padding);
        let col = (index % columns) as i64;
        let row = (index / columns) as i64;
        let padding = i64::from(self.padding);

        (padding + col * stride, padding + row * stride)
    }

    // count * tile_size + (count + 1) * padding
    fn span(&self, count: u32) -> Option<u32> {
        let tiles = count.checked_mul(self.tile_size)?;
        let gaps = count.checked_add(1)?.checked_mul(self.padding)?;
        tiles.checked_add(gaps)
    }
}
