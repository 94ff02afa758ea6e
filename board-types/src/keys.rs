//! The typed key space of the shared store.
//!
//! All puzzle state is addressed by string keys in the replicated store.
//! [`StoreKey`] is the single builder for those strings: call sites construct
//! keys from coordinates and kind, never by ad hoc concatenation, which keeps
//! the no-collision invariant by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BoardError;

/// A clue cell position: `0 <= row < m`, `0 <= col < n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    /// Row index.
    pub row: u32,
    /// Column index.
    pub col: u32,
}

impl CellCoord {
    /// Create a cell coordinate.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A border edge position.
///
/// Horizontal edges range over `0..=m` rows and `0..n` columns; vertical
/// edges over `0..m` rows and `0..=n` columns. The bounds are enforced by
/// enumerating coordinates from the current dimensions, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeCoord {
    /// Row index.
    pub row: u32,
    /// Column index.
    pub col: u32,
}

impl EdgeCoord {
    /// Create an edge coordinate.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A key in the shared store.
///
/// The string forms are the interoperability contract for saved boards:
///
/// | variant              | string form                     |
/// |----------------------|---------------------------------|
/// | `Rows`               | `m`                             |
/// | `Cols`               | `n`                             |
/// | `ControlsVisible`    | `resizeVisible`                 |
/// | `Clue(r, c)`         | `number-<r>-<c>`                |
/// | `HorizontalEdge(..)` | `horizontal-border-<r>-<c>`     |
/// | `VerticalEdge(..)`   | `vertical-border-<r>-<c>`       |
///
/// The `number-` scheme is the one loopboard reads and writes. Boards written
/// under the alternate `numbers-` scheme are not interoperable; such keys are
/// left untouched as foreign data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreKey {
    /// Row count of the grid.
    Rows,
    /// Column count of the grid.
    Cols,
    /// Whether the resize controls are still shown.
    ControlsVisible,
    /// The clue value of one cell.
    Clue(CellCoord),
    /// One horizontal border edge.
    HorizontalEdge(EdgeCoord),
    /// One vertical border edge.
    VerticalEdge(EdgeCoord),
}

impl StoreKey {
    /// Key for the clue at `(row, col)`.
    pub fn clue(row: u32, col: u32) -> Self {
        Self::Clue(CellCoord::new(row, col))
    }

    /// Key for the horizontal edge at `(row, col)`.
    pub fn horizontal_edge(row: u32, col: u32) -> Self {
        Self::HorizontalEdge(EdgeCoord::new(row, col))
    }

    /// Key for the vertical edge at `(row, col)`.
    pub fn vertical_edge(row: u32, col: u32) -> Self {
        Self::VerticalEdge(EdgeCoord::new(row, col))
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::Rows => write!(f, "m"),
            StoreKey::Cols => write!(f, "n"),
            StoreKey::ControlsVisible => write!(f, "resizeVisible"),
            StoreKey::Clue(c) => write!(f, "number-{}-{}", c.row, c.col),
            StoreKey::HorizontalEdge(e) => write!(f, "horizontal-border-{}-{}", e.row, e.col),
            StoreKey::VerticalEdge(e) => write!(f, "vertical-border-{}-{}", e.row, e.col),
        }
    }
}

/// Split a `<prefix>-<row>-<col>` tail into its two numeric components.
fn parse_coords(tail: &str) -> Option<(u32, u32)> {
    let (row, col) = tail.split_once('-')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

impl FromStr for StoreKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => return Ok(StoreKey::Rows),
            "n" => return Ok(StoreKey::Cols),
            "resizeVisible" => return Ok(StoreKey::ControlsVisible),
            _ => {}
        }
        if let Some(tail) = s.strip_prefix("number-") {
            if let Some((row, col)) = parse_coords(tail) {
                return Ok(StoreKey::clue(row, col));
            }
        }
        if let Some(tail) = s.strip_prefix("horizontal-border-") {
            if let Some((row, col)) = parse_coords(tail) {
                return Ok(StoreKey::horizontal_edge(row, col));
            }
        }
        if let Some(tail) = s.strip_prefix("vertical-border-") {
            if let Some((row, col)) = parse_coords(tail) {
                return Ok(StoreKey::vertical_edge(row, col));
            }
        }
        Err(BoardError::InvalidKey(s.to_string()))
    }
}
