//! # loopboard-core
//!
//! Pure logic for loopboard (no I/O, instant tests).
//!
//! This crate implements the interaction machinery of the shared puzzle
//! board without touching a store, a modal process, or a clock:
//! - the three-state edge toggle machine
//! - the clue editor session protocol machine
//! - the grid resize controller
//! - coordinate enumeration from grid dimensions
//!
//! ## Design Philosophy
//!
//! Every function here takes input and produces a new state plus the store
//! writes or modal actions to execute. The caller (`loopboard-session`)
//! performs the actual store and modal I/O, which keeps these machines
//! testable without mocks and makes each interaction's single-write
//! contract visible in the types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod edge;
pub mod editor;
pub mod grid;
pub mod resize;

pub use edge::{toggle, EdgeWrite};
pub use editor::{EditorAction, EditorEvent, EditorSession};
pub use grid::{cells, horizontal_edges, vertical_edges};
pub use resize::{apply as apply_resize, ResizeOp, StoreWrite};
