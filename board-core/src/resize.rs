//! The grid resize controller.
//!
//! Three interactions, each producing exactly one store write: grow the
//! column count, grow the row count, or confirm the layout (which hides the
//! resize controls for the rest of the shared session's lifetime). There is
//! no shrink operation and no upper bound on growth - dimensions grow
//! without limit by design, they are not clamped.

use board_types::{StoreKey, StoreValue};

/// One resize interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOp {
    /// `m <- m + 1`.
    GrowRows,
    /// `n <- n + 1`.
    GrowCols,
    /// Hide the resize controls; dimensions are untouched.
    Confirm,
}

/// A single-key store write, as produced by a resize interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreWrite {
    /// The target key.
    pub key: StoreKey,
    /// The value to write.
    pub value: StoreValue,
}

/// Apply a resize interaction.
///
/// `rows` and `cols` are the dimension values read fresh from the store
/// immediately before this call; a concurrent resize is picked up by the
/// next interaction's fresh read rather than by any invalidation here.
/// `Confirm` is idempotent: it writes `false` regardless of the flag's
/// current value and never writes `true`.
pub fn apply(op: ResizeOp, rows: u32, cols: u32) -> StoreWrite {
    match op {
        ResizeOp::GrowRows => StoreWrite {
            key: StoreKey::Rows,
            value: StoreValue::Number(rows.saturating_add(1)),
        },
        ResizeOp::GrowCols => StoreWrite {
            key: StoreKey::Cols,
            value: StoreValue::Number(cols.saturating_add(1)),
        },
        ResizeOp::Confirm => StoreWrite {
            key: StoreKey::ControlsVisible,
            value: StoreValue::Flag(false),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_rows_increments_row_key() {
        let write = apply(ResizeOp::GrowRows, 1, 1);
        assert_eq!(write.key, StoreKey::Rows);
        assert_eq!(write.value, StoreValue::Number(2));
    }

    #[test]
    fn grow_cols_increments_col_key() {
        let write = apply(ResizeOp::GrowCols, 3, 5);
        assert_eq!(write.key, StoreKey::Cols);
        assert_eq!(write.value, StoreValue::Number(6));
    }

    #[test]
    fn repeated_growth_accumulates() {
        let mut rows = 1;
        for _ in 0..4 {
            let write = apply(ResizeOp::GrowRows, rows, 1);
            rows = write.value.as_number().unwrap();
        }
        assert_eq!(rows, 5);
    }

    #[test]
    fn growth_never_decrements() {
        for rows in [0, 1, 100] {
            let write = apply(ResizeOp::GrowRows, rows, 1);
            assert!(write.value.as_number().unwrap() >= rows);
        }
    }

    #[test]
    fn growth_saturates_at_the_numeric_limit() {
        let write = apply(ResizeOp::GrowCols, 0, u32::MAX);
        assert_eq!(write.value, StoreValue::Number(u32::MAX));
    }

    #[test]
    fn confirm_hides_controls_and_ignores_dims() {
        let write = apply(ResizeOp::Confirm, 7, 9);
        assert_eq!(write.key, StoreKey::ControlsVisible);
        assert_eq!(write.value, StoreValue::Flag(false));
    }

    #[test]
    fn confirm_is_idempotent() {
        let first = apply(ResizeOp::Confirm, 1, 1);
        let second = apply(ResizeOp::Confirm, 1, 1);
        assert_eq!(first, second);
    }
}
