//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup, shutdown and the final save.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The final snapshot write failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: tamagotchi_pet::StoreError,
    },

    /// The decay timer task panicked or was cancelled.
    #[error("tick task failed: {source}")]
    TickTask {
        /// The underlying join error.
        #[from]
        source: tokio::task::JoinError,
    },

    /// Installing or awaiting the shutdown signal handler failed.
    #[error("signal handler error: {source}")]
    Signal {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
