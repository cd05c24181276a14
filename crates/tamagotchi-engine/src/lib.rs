//! Async host for the Tamagotchi pet simulation.
//!
//! Owns the single [`PetSimulationCore`](tamagotchi_pet::PetSimulationCore)
//! behind a task-safe handle, drives the decay timer, and fans state changes
//! out to subscribers. The `tamagotchi-engine` binary wires these together
//! with configuration and logging.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration with environment overrides ([`EngineConfig`])
//! - [`error`] -- Top-level error type ([`EngineError`])
//! - [`handle`] -- Shared access and change notification ([`PetHandle`])
//! - [`runner`] -- Decay timer and health monitor ([`TickLoop`])

pub mod config;
pub mod error;
pub mod handle;
pub mod runner;

pub use config::{ConfigError, EngineConfig};
pub use error::EngineError;
pub use handle::PetHandle;
pub use runner::{TickLoop, spawn_health_monitor};
