//! # loopboard-session
//!
//! One participant's interactive session against the shared board state.
//!
//! # Architecture
//!
//! [`BoardSession`] is the driver: interaction handlers read the store,
//! consult the pure machines in `loopboard-core`, and perform the store
//! writes and modal I/O the machines dictate.
//!
//! ```text
//! Participant input → BoardSession → Store (replicated, LWW)
//!                          ↓
//!                     ModalHost (out-of-process chooser)
//!                          ↓
//!                  loopboard-core (pure state machines)
//! ```
//!
//! Edge toggles and resize clicks mutate the store synchronously. A clue
//! edit instead opens a chooser through [`ModalHost`] and returns
//! immediately; the chooser's single selection message is committed to the
//! store by a background task, so callers observe the result through the
//! store, never through a return value.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod modal;
mod session;
mod view;

pub use modal::{
    ChooserOption, ChooserPrompt, MockModalHost, ModalError, ModalHost, SelectionReceiver,
    CHOOSER_OPTIONS,
};
pub use session::{BoardSession, PendingEdit};
pub use view::{BoardSeed, BoardView};
