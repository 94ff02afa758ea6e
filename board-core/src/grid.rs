//! Coordinate enumeration from grid dimensions.
//!
//! Keys are produced only from these enumerations, so out-of-bounds keys
//! are prevented by construction rather than checked at the store boundary.
//! Callers read the dimensions fresh from the store immediately before
//! enumerating, which is how a concurrent resize becomes visible to every
//! subsequent render.

use board_types::{CellCoord, EdgeCoord, GridDims};

/// All clue cell coordinates: `0..rows` x `0..cols`, row-major.
pub fn cells(dims: GridDims) -> impl Iterator<Item = CellCoord> {
    (0..dims.rows).flat_map(move |row| (0..dims.cols).map(move |col| CellCoord::new(row, col)))
}

/// All horizontal edge coordinates: `0..=rows` x `0..cols`, row-major.
pub fn horizontal_edges(dims: GridDims) -> impl Iterator<Item = EdgeCoord> {
    (0..=dims.rows).flat_map(move |row| (0..dims.cols).map(move |col| EdgeCoord::new(row, col)))
}

/// All vertical edge coordinates: `0..rows` x `0..=cols`, row-major.
pub fn vertical_edges(dims: GridDims) -> impl Iterator<Item = EdgeCoord> {
    (0..dims.rows).flat_map(move |row| (0..=dims.cols).map(move |col| EdgeCoord::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_is_rows_times_cols() {
        assert_eq!(cells(GridDims::new(2, 3)).count(), 6);
        assert_eq!(cells(GridDims::new(1, 1)).count(), 1);
    }

    #[test]
    fn edge_counts_match_the_grid_shape() {
        let dims = GridDims::new(2, 3);
        // (rows + 1) rows of horizontal edges, one per column.
        assert_eq!(horizontal_edges(dims).count(), 3 * 3);
        // rows of vertical edges, (cols + 1) per row.
        assert_eq!(vertical_edges(dims).count(), 2 * 4);
    }

    #[test]
    fn empty_dims_enumerate_nothing() {
        let dims = GridDims::new(0, 0);
        assert_eq!(cells(dims).count(), 0);
        assert_eq!(horizontal_edges(dims).count(), 0);
        assert_eq!(vertical_edges(dims).count(), 0);
    }

    #[test]
    fn enumeration_is_row_major_and_in_bounds() {
        let dims = GridDims::new(2, 2);
        let all: Vec<_> = cells(dims).collect();
        assert_eq!(all[0], CellCoord::new(0, 0));
        assert_eq!(all[1], CellCoord::new(0, 1));
        assert_eq!(all[2], CellCoord::new(1, 0));
        assert!(all.iter().all(|c| c.row < 2 && c.col < 2));
    }

    #[test]
    fn horizontal_edges_include_the_closing_row() {
        let dims = GridDims::new(1, 1);
        let rows: Vec<_> = horizontal_edges(dims).map(|e| e.row).collect();
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn vertical_edges_include_the_closing_col() {
        let dims = GridDims::new(1, 1);
        let cols: Vec<_> = vertical_edges(dims).map(|e| e.col).collect();
        assert_eq!(cols, vec![0, 1]);
    }
}
