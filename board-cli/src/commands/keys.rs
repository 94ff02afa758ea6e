//! `keys` - dump the store key layout for a grid.

use anyhow::Result;

use board_core::grid;
use board_types::{GridDims, StoreKey};

/// Print every key a `rows x cols` grid reads, grouped by entity kind.
pub fn run(rows: u32, cols: u32) -> Result<()> {
    let dims = GridDims::new(rows, cols);

    println!("{}", StoreKey::Rows);
    println!("{}", StoreKey::Cols);
    println!("{}", StoreKey::ControlsVisible);
    for cell in grid::cells(dims) {
        println!("{}", StoreKey::Clue(cell));
    }
    for at in grid::horizontal_edges(dims) {
        println!("{}", StoreKey::HorizontalEdge(at));
    }
    for at in grid::vertical_edges(dims) {
        println!("{}", StoreKey::VerticalEdge(at));
    }
    Ok(())
}
