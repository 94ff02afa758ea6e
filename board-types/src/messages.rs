//! Wire payloads: the one-shot chooser selection and the replication op.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BoardError, StoreValue};

/// A unique identifier for one participant's session.
///
/// UUID v4, used as the origin tag on replication ops and in logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(uuid::Uuid);

impl SessionId {
    /// Create a new random SessionId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", &self.0.to_string()[..8])
    }
}

/// The single message a clue chooser sends back to its host session.
///
/// `cell_key` is the string form of the target clue key; `contents` is the
/// stored string form of the chosen value (`""` for "none"). The chooser
/// sends exactly one of these per opened session, or nothing on dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSelection {
    /// String form of the target clue key.
    #[serde(rename = "cellKey")]
    pub cell_key: String,
    /// Stored string form of the chosen value.
    pub contents: String,
}

impl ClueSelection {
    /// Serialize to MessagePack bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BoardError> {
        rmp_serde::to_vec(self).map_err(BoardError::Serialization)
    }

    /// Deserialize from MessagePack bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BoardError> {
        rmp_serde::from_slice(bytes).map_err(BoardError::Deserialization)
    }
}

/// One replicated write, as fanned out between store replicas.
///
/// The hub assigns `stamp` at publish time, so stamps totally order all
/// writes: a replica applies an op to a key only if its stamp is newer than
/// the last one applied there. That makes "last received wins" literal and
/// drives every replica to the same final value per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOp {
    /// Hub-assigned total-order stamp.
    pub stamp: u64,
    /// Session that issued the write.
    pub origin: SessionId,
    /// String form of the written key.
    pub key: String,
    /// The written value.
    pub value: StoreValue,
}

impl StoreOp {
    /// Serialize to MessagePack bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BoardError> {
        rmp_serde::to_vec(self).map_err(BoardError::Serialization)
    }

    /// Deserialize from MessagePack bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BoardError> {
        rmp_serde::from_slice(bytes).map_err(BoardError::Deserialization)
    }
}
