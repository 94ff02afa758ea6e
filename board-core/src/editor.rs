//! The clue editor session protocol machine.
//!
//! One machine exists per opened modal chooser. It takes chooser events as
//! input and produces a new state plus the actions to execute; the actual
//! store write and modal teardown are performed by `loopboard-session`.
//! A session commits at most one clue value: the machine reaches its
//! terminal state on the first event and ignores everything after.

use board_types::{ClueSelection, ClueValue, StoreKey};

/// Clue editor session state machine - NO I/O, just state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSession {
    /// The modal is open; at most one selection message may still arrive.
    AwaitingSelection {
        /// The clue key this session was opened for.
        key: StoreKey,
        /// The value shown as pre-selected when the modal opened.
        initial: ClueValue,
    },
    /// Terminal: the session committed a value or was dismissed.
    Closed,
}

impl EditorSession {
    /// Open a session for `key`, pre-selecting `initial`.
    pub fn open(key: StoreKey, initial: ClueValue) -> Self {
        Self::AwaitingSelection { key, initial }
    }

    /// Process an event and return the new state plus actions to execute.
    ///
    /// This is a pure function - no side effects. The caller is responsible
    /// for executing the returned actions in order.
    pub fn on_event(self, event: EditorEvent) -> (Self, Vec<EditorAction>) {
        match (self, event) {
            (Self::AwaitingSelection { key, .. }, EditorEvent::Selected(selection)) => {
                // A selection for some other key cannot happen with one
                // machine per modal; drop it rather than commit to the
                // wrong cell.
                if selection.cell_key != key.to_string() {
                    return (Self::Closed, vec![EditorAction::CloseModal]);
                }
                match ClueValue::parse(&selection.contents) {
                    Some(value) => (
                        Self::Closed,
                        vec![
                            EditorAction::CommitClue { key, value },
                            EditorAction::CloseModal,
                        ],
                    ),
                    // Unknown contents leave the store untouched.
                    None => (Self::Closed, vec![EditorAction::CloseModal]),
                }
            }
            // Dismissal means the chooser is already gone: nothing to write,
            // nothing to close.
            (Self::AwaitingSelection { .. }, EditorEvent::Dismissed) => (Self::Closed, vec![]),
            // The session is single-use: events after close are ignored.
            (Self::Closed, _) => (Self::Closed, vec![]),
        }
    }

    /// Check whether the session has reached its terminal state.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Events that can occur in a chooser session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The chooser sent its one selection message.
    Selected(ClueSelection),
    /// The chooser was dismissed without selecting.
    Dismissed,
}

/// Actions to be executed by the session layer.
///
/// These are instructions, not side effects. `CommitClue` always precedes
/// `CloseModal` so the write lands before the session context is torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Write the chosen value to the clue's key in the shared store.
    CommitClue {
        /// The target clue key.
        key: StoreKey,
        /// The chosen value.
        value: ClueValue,
    },
    /// Terminate the modal session.
    CloseModal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(key: StoreKey, contents: &str) -> EditorEvent {
        EditorEvent::Selected(ClueSelection {
            cell_key: key.to_string(),
            contents: contents.into(),
        })
    }

    #[test]
    fn opens_awaiting_selection() {
        let session = EditorSession::open(StoreKey::clue(0, 0), ClueValue::None);
        assert!(!session.is_closed());
    }

    #[test]
    fn selection_commits_then_closes() {
        let key = StoreKey::clue(0, 0);
        let session = EditorSession::open(key, ClueValue::None);

        let (state, actions) = session.on_event(selection(key, "3"));

        assert!(state.is_closed());
        assert_eq!(
            actions,
            vec![
                EditorAction::CommitClue {
                    key,
                    value: ClueValue::Three,
                },
                EditorAction::CloseModal,
            ]
        );
    }

    #[test]
    fn selecting_none_commits_the_empty_value() {
        let key = StoreKey::clue(2, 1);
        let session = EditorSession::open(key, ClueValue::Two);

        let (_, actions) = session.on_event(selection(key, ""));

        assert!(actions.contains(&EditorAction::CommitClue {
            key,
            value: ClueValue::None,
        }));
    }

    #[test]
    fn dismissal_is_a_silent_no_op() {
        let session = EditorSession::open(StoreKey::clue(0, 0), ClueValue::One);

        let (state, actions) = session.on_event(EditorEvent::Dismissed);

        assert!(state.is_closed());
        assert!(actions.is_empty());
    }

    #[test]
    fn session_is_single_use() {
        let key = StoreKey::clue(0, 0);
        let session = EditorSession::open(key, ClueValue::None);

        let (state, _) = session.on_event(selection(key, "1"));
        // A second message changes nothing: zero or one commit per session.
        let (state, actions) = state.on_event(selection(key, "2"));

        assert!(state.is_closed());
        assert!(actions.is_empty());
    }

    #[test]
    fn mismatched_key_closes_without_commit() {
        let session = EditorSession::open(StoreKey::clue(0, 0), ClueValue::None);

        let (state, actions) = session.on_event(selection(StoreKey::clue(5, 5), "1"));

        assert!(state.is_closed());
        assert_eq!(actions, vec![EditorAction::CloseModal]);
    }

    #[test]
    fn unknown_contents_close_without_commit() {
        let key = StoreKey::clue(0, 0);
        let session = EditorSession::open(key, ClueValue::None);

        let (state, actions) = session.on_event(selection(key, "7"));

        assert!(state.is_closed());
        assert_eq!(actions, vec![EditorAction::CloseModal]);
    }
}
