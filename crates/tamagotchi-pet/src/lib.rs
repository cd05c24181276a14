//! Pet life-simulation core for the Tamagotchi virtual pet.
//!
//! This crate contains every piece of pet logic: stat decay over elapsed
//! wall-clock time, random soiling and sickness, aging and evolution, the
//! bounded care actions, and local snapshot persistence. It sits between
//! `tamagotchi-types` (the data model) and `tamagotchi-engine` (the async
//! host that drives the tick and fans out state changes).
//!
//! # Modules
//!
//! - [`care`] -- Care actions: feed, hydrate, play, walk, sleep, clean, treat
//! - [`config`] -- Tunable rates, thresholds, and care deltas ([`PetConfig`])
//! - [`error`] -- Error types ([`StoreError`], [`SnapshotError`])
//! - [`evolution`] -- Stage transitions, stage progress, candidate forms
//! - [`health`] -- Health issues and overall classification
//! - [`lifecycle`] -- New pets, genome rolls, snapshot validation
//! - [`simulation`] -- The state owner ([`PetSimulationCore`])
//! - [`store`] -- Snapshot stores ([`FileStore`], [`MemoryStore`])
//! - [`vitals`] -- The per-tick decay ([`TickOutcome`])

pub mod care;
pub mod config;
pub mod error;
pub mod evolution;
pub mod health;
pub mod lifecycle;
pub mod simulation;
pub mod store;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use config::{
    CareConfig, DecayConfig, EventConfig, EvolutionConfig, FoodEffect, GameEffect, PetConfig,
    StartingStats,
};
pub use error::{SnapshotError, StoreError};
pub use lifecycle::{MAX_RARITY, decode_snapshot, new_pet, roll_genome, validate};
pub use simulation::{PetSimulationCore, food_for_meal};
pub use store::{FileStore, MemoryStore, STATE_KEY, SnapshotStore};
pub use vitals::{TickOutcome, apply_decay_tick};
