//! Tests for grid partitioning, rounding and degenerate cell detection

#[cfg(test)]
mod tests {
    use tilesheet::spatial::{CellBounds, GridPartition};

    // Tests candidate count before filtering
    // Verified by dropping the last column from the inner iterator
    #[test]
    fn test_partition_yields_cols_times_rows_cells() {
        for &(w, h, cols, rows) in &[
            (100, 100, 2, 2),
            (640, 480, 8, 5),
            (3, 1, 5, 1),
            (7, 13, 3, 4),
            (1, 1, 4, 4),
        ] {
            let partition = GridPartition::new(w, h, cols, rows);
            assert_eq!(partition.cells().count() as u64, u64::from(cols * rows));
            assert_eq!(partition.cell_count(), u64::from(cols * rows));
        }
    }

    // Tests row-major ordering of cells
    // Verified by swapping the row and column loops
    #[test]
    fn test_cells_are_row_major() {
        let partition = GridPartition::new(30, 20, 3, 2);
        let order: Vec<(u32, u32)> = partition.cells().map(|c| (c.row, c.col)).collect();

        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    // Tests every cell stays inside the image
    // Verified by removing the clamp on right and lower edges
    #[test]
    fn test_cells_within_image_bounds() {
        for &(w, h, cols, rows) in &[(101, 57, 8, 5), (5, 5, 9, 9), (1000, 3, 7, 2)] {
            let partition = GridPartition::new(w, h, cols, rows);
            for cell in partition.cells() {
                assert!(cell.bounds.right <= w, "right edge escapes image: {cell:?}");
                assert!(cell.bounds.lower <= h, "lower edge escapes image: {cell:?}");
            }
        }
    }

    // Tests neighbouring cells share edges so the image is covered without gaps
    // Verified by adding one to every left edge
    #[test]
    fn test_cells_cover_image_without_gaps() {
        let (w, h, cols, rows) = (103, 61, 7, 4);
        let partition = GridPartition::new(w, h, cols, rows);

        for row in 0..rows {
            assert_eq!(partition.bounds(row, 0).left, 0);
            for col in 1..cols {
                assert_eq!(
                    partition.bounds(row, col - 1).right,
                    partition.bounds(row, col).left
                );
            }
            assert_eq!(partition.bounds(row, cols - 1).right, w);
        }

        for col in 0..cols {
            assert_eq!(partition.bounds(0, col).upper, 0);
            for row in 1..rows {
                assert_eq!(
                    partition.bounds(row - 1, col).lower,
                    partition.bounds(row, col).upper
                );
            }
            assert_eq!(partition.bounds(rows - 1, col).lower, h);
        }
    }

    // Tests even division produces equal cells
    // Verified by computing cell height from width
    #[test]
    fn test_even_division() {
        let partition = GridPartition::new(100, 100, 2, 2);

        assert_eq!(
            partition.bounds(1, 1),
            CellBounds {
                left: 50,
                upper: 50,
                right: 100,
                lower: 100,
            }
        );
        assert_eq!(partition.cell_size(), (50.0, 50.0));
    }

    // Tests half-way edges round to the even neighbour
    // Verified by replacing round_ties_even with round
    #[test]
    fn test_round_half_to_even() {
        let partition = GridPartition::new(5, 7, 2, 2);

        // 2.5 rounds down to 2, 3.5 rounds up to 4
        assert_eq!(partition.bounds(0, 0).right, 2);
        assert_eq!(partition.bounds(0, 1).left, 2);
        assert_eq!(partition.bounds(0, 0).lower, 4);
        assert_eq!(partition.bounds(1, 0).upper, 4);
    }

    // Tests degenerate cells appear when the grid is finer than the image
    // Verified by treating equal edges as non-empty
    #[test]
    fn test_degenerate_cells_when_grid_finer_than_image() {
        let partition = GridPartition::new(3, 1, 5, 1);

        let empty: Vec<u32> = partition
            .cells()
            .filter(|c| c.bounds.is_empty())
            .map(|c| c.col)
            .collect();
        assert_eq!(empty, vec![1, 3]);

        let non_empty_area: u32 = partition
            .cells()
            .filter(|c| !c.bounds.is_empty())
            .map(|c| c.bounds.width() * c.bounds.height())
            .sum();
        assert_eq!(non_empty_area, 3);
    }

    // Tests grid dimensions below one are raised to one
    // Verified by removing the max(1) clamp
    #[test]
    fn test_zero_grid_raised_to_one() {
        let partition = GridPartition::new(10, 8, 0, 0);

        assert_eq!(partition.cols(), 1);
        assert_eq!(partition.rows(), 1);

        let cells: Vec<_> = partition.cells().collect();
        assert_eq!(cells.len(), 1);
        assert_eq!(
            cells.first().map(|c| c.bounds),
            Some(CellBounds {
                left: 0,
                upper: 0,
                right: 10,
                lower: 8,
            })
        );
    }

    // Tests width and height of inverted bounds saturate at zero
    // Verified by using plain subtraction
    #[test]
    fn test_cell_bounds_dimensions() {
        let normal = CellBounds {
            left: 2,
            upper: 3,
            right: 7,
            lower: 4,
        };
        assert_eq!((normal.width(), normal.height()), (5, 1));
        assert!(!normal.is_empty());

        let flat = CellBounds {
            left: 4,
            upper: 0,
            right: 4,
            lower: 9,
        };
        assert_eq!(flat.width(), 0);
        assert!(flat.is_empty());
    }
}
