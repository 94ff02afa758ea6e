//! Board definition loading.
//!
//! A board file is TOML: starting dimensions plus optional seed clue rows,
//! written as strings of `0`-`3` and `.` for "no clue".
//!
//! ```toml
//! rows = 2
//! cols = 3
//! clues = ["3.2", "..0"]
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use board_session::BoardSeed;
use board_types::{ClueValue, GridDims};

/// Root configuration for a board file.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Starting row count (default: 1).
    #[serde(default = "default_dim")]
    pub rows: u32,
    /// Starting column count (default: 1).
    #[serde(default = "default_dim")]
    pub cols: u32,
    /// Seed clue rows, one string per row (default: none).
    #[serde(default)]
    pub clues: Vec<String>,
}

fn default_dim() -> u32 {
    1
}

impl BoardConfig {
    /// Convert to a session seed, validating the clue characters.
    pub fn into_seed(self) -> Result<BoardSeed> {
        let mut clues = Vec::with_capacity(self.clues.len());
        for (row_index, row) in self.clues.iter().enumerate() {
            let mut parsed = Vec::with_capacity(row.len());
            for ch in row.chars() {
                let clue = match ch {
                    '.' => ClueValue::None,
                    '0' => ClueValue::Zero,
                    '1' => ClueValue::One,
                    '2' => ClueValue::Two,
                    '3' => ClueValue::Three,
                    other => bail!("invalid clue character {other:?} in row {row_index}"),
                };
                parsed.push(clue);
            }
            clues.push(parsed);
        }
        Ok(BoardSeed {
            dims: GridDims::new(self.rows, self.cols),
            clues,
        })
    }
}

/// Load a seed from `path`, or the blank default when no file was given.
pub fn load_seed(path: Option<&Path>) -> Result<BoardSeed> {
    let Some(path) = path else {
        return Ok(BoardSeed::blank());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading board file {}", path.display()))?;
    let config: BoardConfig =
        toml::from_str(&text).with_context(|| format!("parsing board file {}", path.display()))?;
    config.into_seed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_by_one() {
        let config: BoardConfig = toml::from_str("").unwrap();
        let seed = config.into_seed().unwrap();
        assert_eq!(seed.dims, GridDims::new(1, 1));
        assert!(seed.clues.is_empty());
    }

    #[test]
    fn parses_clue_rows() {
        let config: BoardConfig = toml::from_str(
            r#"
            rows = 2
            cols = 3
            clues = ["3.2", "..0"]
            "#,
        )
        .unwrap();
        let seed = config.into_seed().unwrap();
        assert_eq!(seed.clues[0][0], ClueValue::Three);
        assert_eq!(seed.clues[0][1], ClueValue::None);
        assert_eq!(seed.clues[1][2], ClueValue::Zero);
    }

    #[test]
    fn rejects_unknown_clue_characters() {
        let config: BoardConfig = toml::from_str(r#"clues = ["5"]"#).unwrap();
        assert!(config.into_seed().is_err());
    }

    #[test]
    fn missing_file_defaults_to_blank() {
        let seed = load_seed(None).unwrap();
        assert_eq!(seed, BoardSeed::blank());
    }
}
