//! Values held in the shared store.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BoardError;

/// The clue shown in a cell: one of `0..=3`, or no clue at all.
///
/// Stored as a string (`""`, `"0"`, `"1"`, `"2"`, `"3"`). An absent key means
/// [`ClueValue::None`], not zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClueValue {
    /// No clue in this cell.
    #[default]
    None,
    /// Clue `0`.
    Zero,
    /// Clue `1`.
    One,
    /// Clue `2`.
    Two,
    /// Clue `3`.
    Three,
}

impl ClueValue {
    /// All selectable clue values, in chooser order.
    pub const ALL: [ClueValue; 5] = [
        ClueValue::Zero,
        ClueValue::One,
        ClueValue::Two,
        ClueValue::Three,
        ClueValue::None,
    ];

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ClueValue::None => "",
            ClueValue::Zero => "0",
            ClueValue::One => "1",
            ClueValue::Two => "2",
            ClueValue::Three => "3",
        }
    }

    /// Decode the stored string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(ClueValue::None),
            "0" => Some(ClueValue::Zero),
            "1" => Some(ClueValue::One),
            "2" => Some(ClueValue::Two),
            "3" => Some(ClueValue::Three),
            _ => None,
        }
    }
}

impl fmt::Display for ClueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three-valued state of one border edge.
///
/// Stored as its numeric code. An absent key means [`EdgeState::Empty`].
/// The state-to-meaning mapping is part of the saved-board contract:
/// `Filled` renders an opaque edge mark, `Crossed` a cross glyph, `Empty`
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum EdgeState {
    /// No mark.
    #[default]
    Empty = 0,
    /// The edge is part of the loop.
    Filled = 1,
    /// The edge is ruled out.
    Crossed = 2,
}

impl EdgeState {
    /// The stored numeric code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode a stored numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(EdgeState::Empty),
            1 => Some(EdgeState::Filled),
            2 => Some(EdgeState::Crossed),
            _ => None,
        }
    }
}

/// Grid dimensions: `rows` is `m`, `cols` is `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    /// Row count `m`.
    pub rows: u32,
    /// Column count `n`.
    pub cols: u32,
}

impl GridDims {
    /// Create grid dimensions.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A value in the shared store.
///
/// The store itself is untyped beyond this enum; the typed accessors are the
/// decode boundary, and a mismatch is a caller error surfaced as `None` (the
/// store never rejects a write).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreValue {
    /// A string value (clue cells).
    Text(String),
    /// A numeric value (edge states, dimensions).
    Number(u32),
    /// A boolean value (the controls-visible flag).
    Flag(bool),
}

impl StoreValue {
    /// The string content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this is a number.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            StoreValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean content, if this is a flag.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            StoreValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Decode as a clue value.
    pub fn as_clue(&self) -> Option<ClueValue> {
        self.as_text().and_then(ClueValue::parse)
    }

    /// Decode as an edge state.
    pub fn as_edge_state(&self) -> Option<EdgeState> {
        self.as_number().and_then(EdgeState::from_code)
    }

    /// Decode as a clue value, or report which key held the bad encoding.
    pub fn expect_clue(&self, key: &str) -> Result<ClueValue, BoardError> {
        self.as_clue().ok_or_else(|| BoardError::InvalidValue {
            key: key.to_string(),
            expected: "one of \"\", \"0\", \"1\", \"2\", \"3\"",
        })
    }
}

impl From<ClueValue> for StoreValue {
    fn from(clue: ClueValue) -> Self {
        StoreValue::Text(clue.as_str().to_string())
    }
}

impl From<EdgeState> for StoreValue {
    fn from(state: EdgeState) -> Self {
        StoreValue::Number(state.code())
    }
}
