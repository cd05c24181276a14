//! Error types for the tamagotchi-pet crate.
//!
//! None of these reach the player. Storage failures are logged and the
//! in-memory state carries on; invalid snapshots are replaced by a fresh pet.

/// Errors raised by a [`SnapshotStore`](crate::store::SnapshotStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("snapshot I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The state could not be serialized to JSON.
    #[error("snapshot encode error: {source}")]
    Encode {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("snapshot store lock poisoned")]
    Poisoned,
}

/// Reasons a persisted snapshot is rejected.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot is not a well-formed `PetState` JSON object.
    #[error("malformed snapshot: {source}")]
    Malformed {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The snapshot parsed but violates a state invariant.
    #[error("invalid snapshot: {reason}")]
    Invalid {
        /// Which invariant was violated.
        reason: String,
    },
}
