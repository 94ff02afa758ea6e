//! Typed single-key wrappers over the store.
//!
//! [`SyncedValue`] is the convenience primitive for scalar synced fields
//! (dimensions, the controls-visible flag, one edge's state): a key, a
//! default for the absent case, and typed `get`/`set` through the store.

use std::sync::Arc;

use board_types::{ClueValue, EdgeState, StoreKey, StoreValue};

use crate::Store;

/// Conversion between a typed field and its stored representation.
pub trait StoreCodec: Sized {
    /// Decode from the stored value. `None` on a type mismatch, which the
    /// wrapper resolves to the default like an absent key.
    fn decode(value: &StoreValue) -> Option<Self>;

    /// Encode into the stored representation.
    fn encode(&self) -> StoreValue;
}

impl StoreCodec for u32 {
    fn decode(value: &StoreValue) -> Option<Self> {
        value.as_number()
    }

    fn encode(&self) -> StoreValue {
        StoreValue::Number(*self)
    }
}

impl StoreCodec for bool {
    fn decode(value: &StoreValue) -> Option<Self> {
        value.as_flag()
    }

    fn encode(&self) -> StoreValue {
        StoreValue::Flag(*self)
    }
}

impl StoreCodec for ClueValue {
    fn decode(value: &StoreValue) -> Option<Self> {
        value.as_clue()
    }

    fn encode(&self) -> StoreValue {
        (*self).into()
    }
}

impl StoreCodec for EdgeState {
    fn decode(value: &StoreValue) -> Option<Self> {
        value.as_edge_state()
    }

    fn encode(&self) -> StoreValue {
        (*self).into()
    }
}

/// One synced scalar field: a key, a default, and a store handle.
#[derive(Clone)]
pub struct SyncedValue<T> {
    store: Arc<dyn Store>,
    key: StoreKey,
    default: T,
}

impl<T: StoreCodec + Clone> SyncedValue<T> {
    /// Bind `key` with `default` for the absent case.
    pub fn new(store: Arc<dyn Store>, key: StoreKey, default: T) -> Self {
        Self {
            store,
            key,
            default,
        }
    }

    /// The bound key.
    pub fn key(&self) -> StoreKey {
        self.key
    }

    /// Read the current value, falling back to the default when the key is
    /// absent or holds a foreign encoding.
    pub fn get(&self) -> T {
        self.store
            .get(&self.key)
            .as_ref()
            .and_then(T::decode)
            .unwrap_or_else(|| self.default.clone())
    }

    /// Write a new value.
    pub fn set(&self, value: T) {
        self.store.set(self.key, value.encode());
    }

    /// Read fresh, transform, write back. The read-then-write pair is not
    /// atomic against concurrent writers to the same key.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.set(f(self.get()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreHub;
    use board_types::SessionId;

    fn store() -> Arc<dyn Store> {
        Arc::new(StoreHub::new().attach(SessionId::new()))
    }

    #[test]
    fn absent_key_yields_default() {
        let rows = SyncedValue::new(store(), StoreKey::Rows, 1u32);
        assert_eq!(rows.get(), 1);
        // Stable across repeated reads.
        assert_eq!(rows.get(), 1);
    }

    #[test]
    fn set_then_get_roundtrips() {
        let store = store();
        let visible = SyncedValue::new(Arc::clone(&store), StoreKey::ControlsVisible, true);
        visible.set(false);
        assert!(!visible.get());
    }

    #[test]
    fn update_reads_fresh_before_writing() {
        let store = store();
        let cols = SyncedValue::new(Arc::clone(&store), StoreKey::Cols, 1u32);

        // A write through another handle is seen by the next update.
        store.set(StoreKey::Cols, StoreValue::Number(7));
        cols.update(|n| n + 1);

        assert_eq!(cols.get(), 8);
    }

    #[test]
    fn foreign_encoding_falls_back_to_default() {
        let store = store();
        store.set(StoreKey::Rows, StoreValue::Text("not a number".into()));

        let rows = SyncedValue::new(store, StoreKey::Rows, 1u32);
        assert_eq!(rows.get(), 1);
    }

    #[test]
    fn edge_state_codec_roundtrips_through_the_store() {
        let store = store();
        let edge = SyncedValue::new(
            Arc::clone(&store),
            StoreKey::horizontal_edge(0, 0),
            EdgeState::Empty,
        );
        edge.set(EdgeState::Crossed);
        assert_eq!(edge.get(), EdgeState::Crossed);
        assert_eq!(
            store.get(&StoreKey::horizontal_edge(0, 0)),
            Some(StoreValue::Number(2))
        );
    }

    #[test]
    fn clue_codec_roundtrips_through_the_store() {
        let store = store();
        let clue = SyncedValue::new(
            Arc::clone(&store),
            StoreKey::clue(0, 0),
            ClueValue::None,
        );
        clue.set(ClueValue::Three);
        assert_eq!(clue.get(), ClueValue::Three);
        assert_eq!(
            store.get(&StoreKey::clue(0, 0)),
            Some(StoreValue::Text("3".into()))
        );
    }
}
