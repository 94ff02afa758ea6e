//! # loopboard-types
//!
//! Shared vocabulary for the loopboard synchronized puzzle board:
//! - [`StoreKey`], [`CellCoord`], [`EdgeCoord`] - the typed key space of the
//!   shared store
//! - [`ClueValue`], [`EdgeState`], [`StoreValue`], [`GridDims`] - the values
//!   that live under those keys
//! - [`ClueSelection`], [`StoreOp`], [`SessionId`] - wire payloads
//! - [`BoardError`] - error types
//!
//! Every key is a pure function of its entity's coordinates and kind; two
//! distinct cells or edges can never collide on a key.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod keys;
mod messages;
mod values;

pub use error::BoardError;
pub use keys::{CellCoord, EdgeCoord, StoreKey};
pub use messages::{ClueSelection, SessionId, StoreOp};
pub use values::{ClueValue, EdgeState, GridDims, StoreValue};
