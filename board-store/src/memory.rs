//! In-memory replicated store.
//!
//! A [`StoreHub`] stands in for the host's replication layer: every write
//! published by a replica receives a monotonically increasing stamp and is
//! fanned out to all attached replicas. A replica applies an op to a key
//! only if the op's stamp is newer than the last stamp applied there, so
//! "last received wins" is a total order and every replica converges on the
//! same final value per key.
//!
//! Delivery to a replica can be held ([`ReplicaStore::hold_delivery`]) and
//! later released in order ([`ReplicaStore::release_delivery`]). Held
//! replicas keep serving their own writes immediately (read-your-writes);
//! only remote ops queue. Tests use this to script the concurrent same-key
//! race and verify convergence.

use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use board_types::{SessionId, StoreKey, StoreOp, StoreValue};

use crate::Store;

/// One replica's view of a key.
#[derive(Debug, Clone)]
struct Entry {
    value: StoreValue,
    stamp: u64,
}

/// State shared between a replica handle and the hub.
#[derive(Debug)]
struct ReplicaShared {
    session: SessionId,
    entries: DashMap<String, Entry>,
    delivery: Mutex<Delivery>,
}

#[derive(Debug, Default)]
struct Delivery {
    held: bool,
    queue: VecDeque<StoreOp>,
}

impl ReplicaShared {
    /// Apply an op if it is newer than what the key already holds.
    fn apply(&self, op: StoreOp) {
        use dashmap::mapref::entry::Entry as MapEntry;
        match self.entries.entry(op.key.clone()) {
            MapEntry::Vacant(slot) => {
                slot.insert(Entry {
                    value: op.value,
                    stamp: op.stamp,
                });
            }
            MapEntry::Occupied(mut slot) => {
                if op.stamp >= slot.get().stamp {
                    slot.insert(Entry {
                        value: op.value,
                        stamp: op.stamp,
                    });
                } else {
                    tracing::debug!(
                        session = %self.session,
                        key = %op.key,
                        stamp = op.stamp,
                        have = slot.get().stamp,
                        "dropping stale op"
                    );
                }
            }
        }
    }

    /// Queue or apply a remote op depending on the hold flag.
    fn deliver(&self, op: StoreOp) {
        let mut delivery = self.delivery.lock().unwrap();
        if delivery.held {
            delivery.queue.push_back(op);
        } else {
            drop(delivery);
            self.apply(op);
        }
    }
}

/// The replication hub connecting all replicas of one shared board.
#[derive(Debug, Default)]
pub struct StoreHub {
    inner: Mutex<HubInner>,
}

#[derive(Debug, Default)]
struct HubInner {
    next_stamp: u64,
    replicas: Vec<Arc<ReplicaShared>>,
}

impl StoreHub {
    /// Create a hub with no replicas attached.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Attach a new replica for one session.
    pub fn attach(self: &Arc<Self>, session: SessionId) -> ReplicaStore {
        let shared = Arc::new(ReplicaShared {
            session,
            entries: DashMap::new(),
            delivery: Mutex::new(Delivery::default()),
        });
        let mut inner = self.inner.lock().unwrap();
        // A late joiner starts from the current replicated state.
        if let Some(existing) = inner.replicas.first() {
            for item in existing.entries.iter() {
                shared.entries.insert(
                    item.key().clone(),
                    item.value().clone(),
                );
            }
        }
        inner.replicas.push(Arc::clone(&shared));
        tracing::debug!(session = %session, replicas = inner.replicas.len(), "replica attached");
        ReplicaStore {
            hub: Arc::clone(self),
            shared,
        }
    }

    /// Stamp a write and fan it out to every replica.
    fn publish(&self, origin: &ReplicaShared, key: StoreKey, value: StoreValue) {
        // Stamp assignment and fan-out happen under one lock, so stamps
        // reach each replica in increasing order.
        let mut inner = self.inner.lock().unwrap();
        inner.next_stamp += 1;
        let stamp = inner.next_stamp;
        let op = StoreOp {
            stamp,
            origin: origin.session,
            key: key.to_string(),
            value,
        };
        tracing::debug!(origin = %op.origin, key = %op.key, stamp, "publishing write");
        for replica in &inner.replicas {
            if Arc::as_ptr(replica) == (origin as *const ReplicaShared) {
                // The writer observes its own write immediately, held or not.
                replica.apply(op.clone());
            } else {
                replica.deliver(op.clone());
            }
        }
    }
}

/// One session's handle on the replicated store.
///
/// Cloning shares the replica; dropping all clones leaves the replica
/// attached to the hub (entities are never deleted, and neither are
/// replicas within a board's lifetime).
#[derive(Clone)]
pub struct ReplicaStore {
    hub: Arc<StoreHub>,
    shared: Arc<ReplicaShared>,
}

impl ReplicaStore {
    /// The session this replica belongs to.
    pub fn session(&self) -> SessionId {
        self.shared.session
    }

    /// Hold remote deliveries; ops queue until released.
    pub fn hold_delivery(&self) {
        self.shared.delivery.lock().unwrap().held = true;
    }

    /// Release held deliveries, applying the queued ops in arrival order.
    pub fn release_delivery(&self) {
        let queued: Vec<StoreOp> = {
            let mut delivery = self.shared.delivery.lock().unwrap();
            delivery.held = false;
            delivery.queue.drain(..).collect()
        };
        for op in queued {
            self.shared.apply(op);
        }
    }
}

impl Store for ReplicaStore {
    fn get(&self, key: &StoreKey) -> Option<StoreValue> {
        self.shared
            .entries
            .get(&key.to_string())
            .map(|entry| entry.value.clone())
    }

    fn set(&self, key: StoreKey, value: StoreValue) {
        self.hub.publish(&self.shared, key, value);
    }
}

impl std::fmt::Debug for ReplicaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplicaStore")
            .field("session", &self.shared.session)
            .field("keys", &self.shared.entries.len())
            .finish()
    }
}
