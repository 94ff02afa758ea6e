//! Read-only board snapshots for rendering layers.

use board_types::{CellCoord, ClueValue, EdgeState, GridDims};

/// The board definition a session starts from.
///
/// `dims` supplies the dimension defaults while the `m`/`n` keys are
/// absent; `clues` supplies per-cell fallback values for cells whose keys
/// were never written. Seed fallbacks are display-only: they reach the
/// store only when a completed chooser session commits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSeed {
    /// Starting dimensions.
    pub dims: GridDims,
    /// Row-major fallback clues; may be smaller than the grid.
    pub clues: Vec<Vec<ClueValue>>,
}

impl BoardSeed {
    /// A 1x1 board with no clues.
    pub fn blank() -> Self {
        Self {
            dims: GridDims::default(),
            clues: Vec::new(),
        }
    }

    /// Seed with explicit dimensions and no clues.
    pub fn sized(rows: u32, cols: u32) -> Self {
        Self {
            dims: GridDims::new(rows, cols),
            clues: Vec::new(),
        }
    }

    /// The fallback clue for `cell`; cells outside the seeded values have
    /// none.
    pub fn clue_at(&self, cell: CellCoord) -> ClueValue {
        self.clues
            .get(cell.row as usize)
            .and_then(|row| row.get(cell.col as usize))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for BoardSeed {
    fn default() -> Self {
        Self::blank()
    }
}

/// One consistent snapshot of everything a renderer needs: dimensions,
/// every clue, every edge, and the controls flag, all resolved to their
/// defaults where keys were absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    dims: GridDims,
    controls_visible: bool,
    /// Row-major, `rows x cols`.
    clues: Vec<ClueValue>,
    /// Row-major, `(rows + 1) x cols`.
    horizontal: Vec<EdgeState>,
    /// Row-major, `rows x (cols + 1)`.
    vertical: Vec<EdgeState>,
}

impl BoardView {
    /// Assemble a view from row-major value sequences.
    ///
    /// The sequence lengths must match the enumeration counts for `dims`;
    /// the session snapshot produces them from the same enumeration, so
    /// this holds by construction.
    pub fn from_rows(
        dims: GridDims,
        clues: Vec<ClueValue>,
        horizontal: Vec<EdgeState>,
        vertical: Vec<EdgeState>,
        controls_visible: bool,
    ) -> Self {
        debug_assert_eq!(clues.len() as u64, dims.rows as u64 * dims.cols as u64);
        Self {
            dims,
            controls_visible,
            clues,
            horizontal,
            vertical,
        }
    }

    /// The dimensions this snapshot was taken at.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Whether the resize controls were shown at snapshot time.
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// The clue at `(row, col)`.
    pub fn clue(&self, row: u32, col: u32) -> ClueValue {
        self.clues[(row * self.dims.cols + col) as usize]
    }

    /// The horizontal edge at `(row, col)`, `row` in `0..=rows`.
    pub fn horizontal_edge(&self, row: u32, col: u32) -> EdgeState {
        self.horizontal[(row * self.dims.cols + col) as usize]
    }

    /// The vertical edge at `(row, col)`, `col` in `0..=cols`.
    pub fn vertical_edge(&self, row: u32, col: u32) -> EdgeState {
        self.vertical[(row * (self.dims.cols + 1) + col) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_seed_is_one_by_one_with_no_clues() {
        let seed = BoardSeed::blank();
        assert_eq!(seed.dims, GridDims::new(1, 1));
        assert_eq!(seed.clue_at(CellCoord::new(0, 0)), ClueValue::None);
    }

    #[test]
    fn seed_clues_fall_back_outside_their_extent() {
        let seed = BoardSeed {
            dims: GridDims::new(2, 2),
            clues: vec![vec![ClueValue::Zero]],
        };
        assert_eq!(seed.clue_at(CellCoord::new(0, 0)), ClueValue::Zero);
        assert_eq!(seed.clue_at(CellCoord::new(0, 1)), ClueValue::None);
        assert_eq!(seed.clue_at(CellCoord::new(1, 0)), ClueValue::None);
    }

    #[test]
    fn view_indexes_row_major() {
        let dims = GridDims::new(2, 2);
        let view = BoardView::from_rows(
            dims,
            vec![
                ClueValue::Zero,
                ClueValue::One,
                ClueValue::Two,
                ClueValue::Three,
            ],
            vec![EdgeState::Empty; 6],
            vec![EdgeState::Empty; 6],
            true,
        );
        assert_eq!(view.clue(0, 1), ClueValue::One);
        assert_eq!(view.clue(1, 0), ClueValue::Two);
    }

    #[test]
    fn view_edge_indexing_covers_the_closing_row_and_col() {
        let dims = GridDims::new(1, 1);
        let view = BoardView::from_rows(
            dims,
            vec![ClueValue::None],
            vec![EdgeState::Filled, EdgeState::Crossed],
            vec![EdgeState::Empty, EdgeState::Filled],
            true,
        );
        assert_eq!(view.horizontal_edge(0, 0), EdgeState::Filled);
        assert_eq!(view.horizontal_edge(1, 0), EdgeState::Crossed);
        assert_eq!(view.vertical_edge(0, 0), EdgeState::Empty);
        assert_eq!(view.vertical_edge(0, 1), EdgeState::Filled);
    }
}
