//! Grid partitioning of a source image into row-major cells
//!
//! Cell edges sit at fractional multiples of `width / cols` and `height / rows`,
//! rounded half-to-even and clamped to the image. When the grid is finer than
//! the image some trailing cells collapse to zero area; they are still yielded
//! so callers can report and skip them.

/// Pixel bounds of one cell, half-open on the right and lower edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellBounds {
    /// First column of pixels in the cell
    pub left: u32,
    /// First row of pixels in the cell
    pub upper: u32,
    /// One past the last column of pixels
    pub right: u32,
    /// One past the last row of pixels
    pub lower: u32,
}

impl CellBounds {
    /// Width in pixels, zero for degenerate cells
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels, zero for degenerate cells
    pub const fn height(&self) -> u32 {
        self.lower.saturating_sub(self.upper)
    }

    /// True when rounding left the cell without any pixels
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.lower <= self.upper
    }
}

/// One grid position together with its pixel bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Zero-based grid row
    pub row: u32,
    /// Zero-based grid column
    pub col: u32,
    /// Pixel region covered by this cell
    pub bounds: CellBounds,
}

/// Division of a `width x height` image into `cols x rows` cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPartition {
    width: u32,
    height: u32,
    cols: u32,
    rows: u32,
    cell_width: f64,
    cell_height: f64,
}

impl GridPartition {
    /// Create a partition; grid dimensions below one are raised to one
    pub fn new(width: u32, height: u32, cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            width,
            height,
            cols,
            rows,
            cell_width: f64::from(width) / f64::from(cols),
            cell_height: f64::from(height) / f64::from(rows),
        }
    }

    /// Number of grid columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of grid rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Real-valued cell size as `(width, height)`
    pub const fn cell_size(&self) -> (f64, f64) {
        (self.cell_width, self.cell_height)
    }

    /// Total number of candidate cells, including degenerate ones
    pub const fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Pixel bounds of the cell at `(row, col)`
    pub fn bounds(&self, row: u32, col: u32) -> CellBounds {
        let left = grid_edge(col, self.cell_width);
        let upper = grid_edge(row, self.cell_height);
        let right = grid_edge(col + 1, self.cell_width).min(self.width);
        let lower = grid_edge(row + 1, self.cell_height).min(self.height);

        CellBounds {
            left,
            upper,
            right,
            lower,
        }
    }

    /// Iterate all cells row by row, left to right
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| GridCell {
                row,
                col,
                bounds: self.bounds(row, col),
            })
        })
    }
}

// Half-to-even: an edge at 2.5 lands on 2, one at 3.5 on 4
fn grid_edge(index: u32, step: f64) -> u32 {
    (f64::from(index) * step).round_ties_even() as u32
}
