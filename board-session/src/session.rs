//! The interactive session driver.

use std::sync::Arc;

use tokio::task::JoinHandle;

use board_core::editor::{EditorAction, EditorEvent, EditorSession};
use board_core::resize::{self, ResizeOp};
use board_core::{edge, grid};
use board_store::{Store, SyncedValue};
use board_types::{CellCoord, ClueValue, EdgeCoord, EdgeState, GridDims, SessionId, StoreKey};

use crate::modal::{ChooserPrompt, ModalError, ModalHost};
use crate::view::{BoardSeed, BoardView};

/// One participant's session against the shared board.
///
/// Handlers within one session run one at a time to completion; sessions of
/// different participants run concurrently with no coordination beyond the
/// store's per-key last-writer-wins replication. Every handler reads the
/// store fresh and writes at most one key.
pub struct BoardSession {
    id: SessionId,
    store: Arc<dyn Store>,
    modal: Arc<dyn ModalHost>,
    seed: Arc<BoardSeed>,
}

impl BoardSession {
    /// Create a session over `store`, using `modal` for clue choosers.
    pub fn new(store: Arc<dyn Store>, modal: Arc<dyn ModalHost>, seed: BoardSeed) -> Self {
        let id = SessionId::new();
        tracing::debug!(session = %id, "session opened");
        Self {
            id,
            store,
            modal,
            seed: Arc::new(seed),
        }
    }

    /// This session's identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    fn rows(&self) -> SyncedValue<u32> {
        SyncedValue::new(Arc::clone(&self.store), StoreKey::Rows, self.seed.dims.rows)
    }

    fn cols(&self) -> SyncedValue<u32> {
        SyncedValue::new(Arc::clone(&self.store), StoreKey::Cols, self.seed.dims.cols)
    }

    /// Current grid dimensions, read fresh from the store.
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.rows().get(), self.cols().get())
    }

    /// Whether the resize controls are still shown.
    pub fn controls_visible(&self) -> bool {
        SyncedValue::new(Arc::clone(&self.store), StoreKey::ControlsVisible, true).get()
    }

    /// The clue currently shown at `cell`: the stored value, or the seed
    /// fallback while the cell's key was never written.
    pub fn clue(&self, cell: CellCoord) -> ClueValue {
        match self.store.get(&StoreKey::Clue(cell)) {
            Some(value) => value.as_clue().unwrap_or_default(),
            None => self.seed.clue_at(cell),
        }
    }

    fn toggle_edge_key(&self, key: StoreKey) -> EdgeState {
        let current = self.store.get(&key).and_then(|v| v.as_edge_state());
        let write = edge::toggle(current);
        tracing::debug!(session = %self.id, key = %key, next = ?write.next, "edge toggled");
        self.store.set(key, write.next.into());
        write.next
    }

    /// Toggle the horizontal edge at `at` one step along the cycle.
    pub fn toggle_horizontal_edge(&self, at: EdgeCoord) -> EdgeState {
        self.toggle_edge_key(StoreKey::HorizontalEdge(at))
    }

    /// Toggle the vertical edge at `at` one step along the cycle.
    pub fn toggle_vertical_edge(&self, at: EdgeCoord) -> EdgeState {
        self.toggle_edge_key(StoreKey::VerticalEdge(at))
    }

    fn apply_resize(&self, op: ResizeOp) {
        let dims = self.dims();
        let write = resize::apply(op, dims.rows, dims.cols);
        tracing::debug!(session = %self.id, op = ?op, key = %write.key, "resize interaction");
        self.store.set(write.key, write.value);
    }

    /// Grow the grid by one row.
    pub fn grow_rows(&self) {
        self.apply_resize(ResizeOp::GrowRows);
    }

    /// Grow the grid by one column.
    pub fn grow_cols(&self) {
        self.apply_resize(ResizeOp::GrowCols);
    }

    /// Hide the resize controls for the rest of the shared session's
    /// lifetime. Idempotent; never shows them again.
    pub fn confirm_resize(&self) {
        self.apply_resize(ResizeOp::Confirm);
    }

    /// Open a clue chooser for `cell` and return immediately.
    ///
    /// The returned handle only identifies the pending edit; resolution
    /// happens out-of-band. A background task waits for the chooser's one
    /// message, commits it to the store, and closes the chooser session.
    /// If the chooser is dismissed, nothing is written and nothing fails.
    pub async fn edit_clue(&self, cell: CellCoord) -> Result<PendingEdit, ModalError> {
        let key = StoreKey::Clue(cell);
        let current = self.clue(cell);
        let receiver = self
            .modal
            .open(ChooserPrompt::new(key, current))
            .await?;
        tracing::debug!(session = %self.id, key = %key, "chooser opened");

        let machine = EditorSession::open(key, current);
        let store = Arc::clone(&self.store);
        let modal = Arc::clone(&self.modal);
        let session = self.id;
        let handle = tokio::spawn(async move {
            let event = match receiver.recv().await {
                Some(selection) => EditorEvent::Selected(selection),
                None => EditorEvent::Dismissed,
            };
            let (_state, actions) = machine.on_event(event);
            for action in actions {
                match action {
                    EditorAction::CommitClue { key, value } => {
                        tracing::debug!(session = %session, key = %key, value = %value.as_str(), "clue committed");
                        store.set(key, value.into());
                    }
                    EditorAction::CloseModal => {
                        if let Err(error) = modal.close().await {
                            tracing::warn!(session = %session, %error, "chooser close failed");
                        }
                    }
                }
            }
        });

        Ok(PendingEdit { key, handle })
    }

    /// Snapshot the whole board for rendering.
    ///
    /// Dimensions are read fresh immediately before enumerating, so a
    /// concurrent resize is visible to every subsequent snapshot without
    /// explicit invalidation.
    pub fn snapshot(&self) -> BoardView {
        let dims = self.dims();
        let clues = grid::cells(dims).map(|cell| self.clue(cell)).collect();
        let horizontal = grid::horizontal_edges(dims)
            .map(|at| self.edge_state(StoreKey::HorizontalEdge(at)))
            .collect();
        let vertical = grid::vertical_edges(dims)
            .map(|at| self.edge_state(StoreKey::VerticalEdge(at)))
            .collect();
        BoardView::from_rows(dims, clues, horizontal, vertical, self.controls_visible())
    }

    fn edge_state(&self, key: StoreKey) -> EdgeState {
        self.store
            .get(&key)
            .and_then(|v| v.as_edge_state())
            .unwrap_or_default()
    }
}

/// A clue edit that is pending in a chooser.
///
/// The triggering interaction never resolves through this handle; it exists
/// so callers can name the key being edited, and so tests can wait for the
/// out-of-band commit to settle before asserting on the store.
#[derive(Debug)]
pub struct PendingEdit {
    key: StoreKey,
    handle: JoinHandle<()>,
}

impl PendingEdit {
    /// The clue key being edited.
    pub fn key(&self) -> StoreKey {
        self.key
    }

    /// Wait for the background commit task to finish. Test convenience;
    /// production callers drop the handle and observe the store instead.
    pub async fn settled(self) {
        let _ = self.handle.await;
    }
}
