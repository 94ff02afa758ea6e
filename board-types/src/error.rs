//! Error types for loopboard.

use thiserror::Error;

/// Errors that can occur in loopboard operations.
///
/// None of these arise in the ordinary interaction flows: absent keys,
/// dismissed choosers, and concurrent write races all resolve to documented
/// defaults or no-ops. The variants here surface only at parse and decode
/// boundaries.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A store key string did not match any known key scheme.
    #[error("unrecognized store key: {0:?}")]
    InvalidKey(String),

    /// A stored value could not be decoded as the expected type.
    #[error("invalid value for {key}: expected {expected}")]
    InvalidValue {
        /// The key whose value failed to decode.
        key: String,
        /// Human-readable description of the expected encoding.
        expected: &'static str,
    },

    /// MessagePack serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[source] rmp_serde::encode::Error),

    /// MessagePack deserialization failed.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] rmp_serde::decode::Error),
}
