//! The store contract.

use board_types::{StoreKey, StoreValue};

/// A synchronized key-value store.
///
/// Reads are synchronous and reflect the latest locally-known replicated
/// value, which may lag the global latest until replication catches up.
/// Writes touch exactly one key; no operation here needs a transaction or a
/// lock because nothing reads-then-writes two keys atomically. Concurrent
/// writes to the same key resolve per-key last-writer-wins: exactly one
/// write survives and all sessions eventually observe the same final value.
pub trait Store: Send + Sync {
    /// Read a key. Absent keys return `None`; callers resolve the
    /// documented default for the entity kind.
    fn get(&self, key: &StoreKey) -> Option<StoreValue>;

    /// Write a key. Never fails; a conflicting concurrent write is resolved
    /// by the replication layer, not surfaced here.
    fn set(&self, key: StoreKey, value: StoreValue);
}
