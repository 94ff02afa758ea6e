//! The modal chooser boundary.
//!
//! The clue chooser runs in a separate, sandboxed UI process owned by the
//! host environment. This module is its contract: [`ModalHost::open`]
//! presents the chooser and hands back a single-fire receiver for the one
//! selection message the chooser may ever send; [`ModalHost::close`]
//! terminates the session. [`MockModalHost`] scripts the chooser for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::oneshot;

use board_types::{ClueSelection, ClueValue, StoreKey};

/// Modal host errors.
#[derive(Debug, Error)]
pub enum ModalError {
    /// The host could not present a chooser.
    #[error("failed to open chooser: {0}")]
    OpenFailed(String),

    /// The host could not tear the chooser session down.
    #[error("failed to close chooser: {0}")]
    CloseFailed(String),
}

/// One selectable option in the chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChooserOption {
    /// The label shown to the participant.
    pub label: &'static str,
    /// The clue value the option commits.
    pub value: ClueValue,
}

/// The closed table of the five chooser options, in display order.
///
/// Option identity lives here, not in dynamically generated labels; the
/// chooser presents exactly these five, mutually exclusive.
pub const CHOOSER_OPTIONS: [ChooserOption; 5] = [
    ChooserOption {
        label: "0",
        value: ClueValue::Zero,
    },
    ChooserOption {
        label: "1",
        value: ClueValue::One,
    },
    ChooserOption {
        label: "2",
        value: ClueValue::Two,
    },
    ChooserOption {
        label: "3",
        value: ClueValue::Three,
    },
    ChooserOption {
        label: "None",
        value: ClueValue::None,
    },
];

/// What the host needs to present one chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserPrompt {
    /// The clue key the chooser edits.
    pub cell_key: StoreKey,
    /// The cell's current value, shown pre-selected.
    pub current: ClueValue,
}

impl ChooserPrompt {
    /// Build a prompt for `cell_key` with `current` pre-selected.
    pub fn new(cell_key: StoreKey, current: ClueValue) -> Self {
        Self { cell_key, current }
    }

    /// The options with their pre-selection flags.
    pub fn options(&self) -> impl Iterator<Item = (ChooserOption, bool)> + '_ {
        CHOOSER_OPTIONS
            .iter()
            .map(move |opt| (*opt, opt.value == self.current))
    }
}

/// The single-fire channel from one chooser back to its host session.
///
/// Yields at most one message. A dropped sender (the participant dismissed
/// the chooser) resolves to `None`.
#[derive(Debug)]
pub struct SelectionReceiver(oneshot::Receiver<ClueSelection>);

impl SelectionReceiver {
    /// Wait for the chooser's one message; `None` on dismissal.
    ///
    /// There is no timeout: a chooser left open indefinitely simply never
    /// resolves, holding no shared resource.
    pub async fn recv(self) -> Option<ClueSelection> {
        self.0.await.ok()
    }
}

/// Host interface for the out-of-process clue chooser.
#[async_trait]
pub trait ModalHost: Send + Sync {
    /// Present a chooser and return the single-fire selection receiver.
    async fn open(&self, prompt: ChooserPrompt) -> Result<SelectionReceiver, ModalError>;

    /// Terminate the chooser session.
    async fn close(&self) -> Result<(), ModalError>;
}

/// Scripted chooser behavior for the mock host.
#[derive(Debug, Clone)]
enum Script {
    /// Immediately select the given value.
    Select(ClueValue),
    /// Immediately dismiss (drop the sender without sending).
    Dismiss,
    /// Keep the sender for manual control via `complete`/`dismiss`.
    Hold,
}

/// Mock modal host for testing.
///
/// Records opened prompts and close calls; scripts each opened chooser to
/// select, dismiss, or stay open for manual driving.
#[derive(Debug, Default)]
pub struct MockModalHost {
    inner: Arc<Mutex<MockModalInner>>,
}

#[derive(Debug, Default)]
struct MockModalInner {
    opened: Vec<ChooserPrompt>,
    close_calls: usize,
    script: VecDeque<Script>,
    held: Option<oneshot::Sender<ClueSelection>>,
    held_key: Option<StoreKey>,
    fail_next_open: Option<String>,
}

impl MockModalHost {
    /// Create a new mock host. Unscripted choosers stay open until driven
    /// with [`complete`](Self::complete) or [`dismiss`](Self::dismiss).
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next opened chooser to select `value` immediately.
    pub fn script_selection(&self, value: ClueValue) {
        let mut inner = self.inner.lock().unwrap();
        inner.script.push_back(Script::Select(value));
    }

    /// Script the next opened chooser to be dismissed immediately.
    pub fn script_dismissal(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.script.push_back(Script::Dismiss);
    }

    /// Script the next opened chooser to stay open.
    pub fn script_hold(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.script.push_back(Script::Hold);
    }

    /// Cause the next `open()` to fail with the given error.
    pub fn fail_next_open(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_open = Some(error.to_string());
    }

    /// Drive a held chooser: select `value`.
    ///
    /// Panics if no chooser is held open.
    pub fn complete(&self, value: ClueValue) {
        let mut inner = self.inner.lock().unwrap();
        let sender = inner.held.take().expect("no chooser held open");
        let key = inner.held_key.take().expect("no chooser held open");
        let _ = sender.send(ClueSelection {
            cell_key: key.to_string(),
            contents: value.as_str().to_string(),
        });
    }

    /// Drive a held chooser: dismiss without selecting.
    pub fn dismiss(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.held = None;
        inner.held_key = None;
    }

    /// All prompts opened so far.
    pub fn opened_prompts(&self) -> Vec<ChooserPrompt> {
        let inner = self.inner.lock().unwrap();
        inner.opened.clone()
    }

    /// The most recently opened prompt.
    pub fn last_prompt(&self) -> Option<ChooserPrompt> {
        let inner = self.inner.lock().unwrap();
        inner.opened.last().cloned()
    }

    /// Number of times `close()` was called.
    pub fn close_calls(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.close_calls
    }
}

impl Clone for MockModalHost {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl ModalHost for MockModalHost {
    async fn open(&self, prompt: ChooserPrompt) -> Result<SelectionReceiver, ModalError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_open.take() {
            return Err(ModalError::OpenFailed(error));
        }

        let key = prompt.cell_key;
        inner.opened.push(prompt);

        let (tx, rx) = oneshot::channel();
        match inner.script.pop_front().unwrap_or(Script::Hold) {
            Script::Select(value) => {
                let _ = tx.send(ClueSelection {
                    cell_key: key.to_string(),
                    contents: value.as_str().to_string(),
                });
            }
            Script::Dismiss => drop(tx),
            Script::Hold => {
                inner.held = Some(tx);
                inner.held_key = Some(key);
            }
        }
        Ok(SelectionReceiver(rx))
    }

    async fn close(&self) -> Result<(), ModalError> {
        let mut inner = self.inner.lock().unwrap();
        inner.close_calls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chooser_table_has_exactly_five_options() {
        assert_eq!(CHOOSER_OPTIONS.len(), 5);
        // "None" maps to the empty stored string.
        let none = CHOOSER_OPTIONS.iter().find(|o| o.label == "None").unwrap();
        assert_eq!(none.value, ClueValue::None);
        assert_eq!(none.value.as_str(), "");
    }

    #[test]
    fn prompt_preselects_the_current_value() {
        let prompt = ChooserPrompt::new(StoreKey::clue(0, 0), ClueValue::Two);
        let selected: Vec<_> = prompt
            .options()
            .filter(|(_, pre)| *pre)
            .map(|(opt, _)| opt.label)
            .collect();
        assert_eq!(selected, vec!["2"]);
    }

    #[tokio::test]
    async fn scripted_selection_arrives_once() {
        let host = MockModalHost::new();
        host.script_selection(ClueValue::Three);

        let rx = host
            .open(ChooserPrompt::new(StoreKey::clue(0, 0), ClueValue::None))
            .await
            .unwrap();
        let selection = rx.recv().await.unwrap();

        assert_eq!(selection.cell_key, "number-0-0");
        assert_eq!(selection.contents, "3");
    }

    #[tokio::test]
    async fn scripted_dismissal_resolves_to_none() {
        let host = MockModalHost::new();
        host.script_dismissal();

        let rx = host
            .open(ChooserPrompt::new(StoreKey::clue(1, 1), ClueValue::One))
            .await
            .unwrap();

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn held_chooser_is_driven_manually() {
        let host = MockModalHost::new();
        host.script_hold();

        let rx = host
            .open(ChooserPrompt::new(StoreKey::clue(2, 0), ClueValue::None))
            .await
            .unwrap();
        host.complete(ClueValue::Zero);

        let selection = rx.recv().await.unwrap();
        assert_eq!(selection.cell_key, "number-2-0");
        assert_eq!(selection.contents, "0");
    }

    #[tokio::test]
    async fn forced_open_failure() {
        let host = MockModalHost::new();
        host.fail_next_open("host gone");

        let result = host
            .open(ChooserPrompt::new(StoreKey::clue(0, 0), ClueValue::None))
            .await;
        assert!(matches!(result, Err(ModalError::OpenFailed(_))));

        // Next open works and is recorded.
        host.script_dismissal();
        host.open(ChooserPrompt::new(StoreKey::clue(0, 0), ClueValue::None))
            .await
            .unwrap();
        assert_eq!(host.opened_prompts().len(), 1);
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let host1 = MockModalHost::new();
        let host2 = host1.clone();
        host1.script_dismissal();

        host2
            .open(ChooserPrompt::new(StoreKey::clue(0, 0), ClueValue::None))
            .await
            .unwrap();
        host2.close().await.unwrap();

        assert_eq!(host1.opened_prompts().len(), 1);
        assert_eq!(host1.close_calls(), 1);
    }
}
