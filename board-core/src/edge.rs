//! The three-state edge toggle machine.
//!
//! An edge cycles `Empty -> Filled -> Crossed -> Empty` on each direct
//! interaction. Toggling is the only operation: there is no jump to a
//! specific state and no reset other than cycling through.

use board_types::EdgeState;

/// The single store write produced by one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeWrite {
    /// The state to write back to the edge's own key.
    pub next: EdgeState,
}

/// Advance an edge one step along the fixed cycle.
pub fn advance(state: EdgeState) -> EdgeState {
    match state {
        EdgeState::Empty => EdgeState::Filled,
        EdgeState::Filled => EdgeState::Crossed,
        EdgeState::Crossed => EdgeState::Empty,
    }
}

/// Toggle an edge given its current stored state.
///
/// `current` is the value read from the edge's key immediately before the
/// toggle; an absent key resolves to [`EdgeState::Empty`]. The caller writes
/// `next` back to the same key — exactly one write per toggle. The
/// read-then-write pair is not atomic against a concurrent writer to the
/// same key; under last-writer-wins one of the two writes survives, which is
/// an accepted limitation of the store model.
pub fn toggle(current: Option<EdgeState>) -> EdgeWrite {
    EdgeWrite {
        next: advance(current.unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EdgeState; 3] = [EdgeState::Empty, EdgeState::Filled, EdgeState::Crossed];

    #[test]
    fn advance_follows_the_cycle() {
        assert_eq!(advance(EdgeState::Empty), EdgeState::Filled);
        assert_eq!(advance(EdgeState::Filled), EdgeState::Crossed);
        assert_eq!(advance(EdgeState::Crossed), EdgeState::Empty);
    }

    #[test]
    fn advance_is_plus_one_mod_three_on_codes() {
        for state in ALL {
            assert_eq!(advance(state).code(), (state.code() + 1) % 3);
        }
    }

    #[test]
    fn three_toggles_return_to_start() {
        for start in ALL {
            let mut state = start;
            for _ in 0..3 {
                state = toggle(Some(state)).next;
            }
            assert_eq!(state, start);
        }
    }

    #[test]
    fn absent_key_toggles_from_empty() {
        assert_eq!(toggle(None).next, EdgeState::Filled);
    }

    #[test]
    fn toggle_never_leaves_the_enumeration() {
        let mut state = None;
        for _ in 0..10 {
            let next = toggle(state).next;
            assert!(ALL.contains(&next));
            state = Some(next);
        }
    }
}
