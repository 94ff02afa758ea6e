//! # loopboard-store
//!
//! The shared state store: a synchronized mapping from [`StoreKey`] to
//! [`StoreValue`], replicated to every connected session with per-key
//! last-writer-wins conflict resolution.
//!
//! - [`Store`] is the contract every component mutates puzzle state
//!   through: synchronous `get`/`set`, one key per call, no cross-key
//!   atomicity.
//! - [`StoreHub`] and [`ReplicaStore`] are the in-memory replicated
//!   implementation: the hub stamps each write with a total-order sequence
//!   and fans it out to every attached replica, which applies it only if it
//!   is newer than what that key already holds. Delivery to a replica can be
//!   held and released to script partitions in tests.
//! - [`SyncedValue`] wraps one key with a typed default, the convenience
//!   primitive sessions use for scalar synced fields.
//!
//! [`StoreKey`]: board_types::StoreKey
//! [`StoreValue`]: board_types::StoreValue

#![warn(missing_docs)]
#![warn(clippy::all)]

mod memory;
mod store;
mod synced;

pub use memory::{ReplicaStore, StoreHub};
pub use store::Store;
pub use synced::{StoreCodec, SyncedValue};
