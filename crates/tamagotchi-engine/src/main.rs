//! Headless host binary for the Tamagotchi pet simulation.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `tamagotchi-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Restore the pet from the data directory (or hatch a new one) and
//!    apply the catch-up tick
//! 4. Start the health monitor and the decay timer
//! 5. Run until Ctrl-C
//! 6. Stop the timer and write a final snapshot

use std::path::Path;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tamagotchi_engine::{EngineConfig, EngineError, PetHandle, TickLoop, spawn_health_monitor};
use tamagotchi_pet::{FileStore, PetSimulationCore};

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "tamagotchi-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the signal handler
/// fails, the timer task panics, or the final snapshot cannot be written.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("tamagotchi-engine starting");
    info!(
        config_file = from_file,
        data_dir = %config.storage.data_dir.display(),
        tick_interval_ms = config.tick.interval_ms,
        max_elapsed_secs = config.pet.max_elapsed_secs,
        "Configuration loaded"
    );

    // 3. Restore or hatch the pet.
    let store = FileStore::new(&config.storage.data_dir);
    let core = PetSimulationCore::load(
        store,
        config.pet.clone(),
        StdRng::from_os_rng(),
        Utc::now(),
    );
    let pet = PetHandle::new(core);
    let state = pet.snapshot();
    info!(
        pet_id = %state.id,
        name = %state.name,
        stage = %state.evolution_stage,
        age_days = state.age_days,
        "Pet ready"
    );

    // 4. Start background tasks.
    let _monitor = spawn_health_monitor(pet.subscribe());
    let ticker = TickLoop::spawn(pet.clone(), config.tick.interval());

    // 5. Run until interrupted.
    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested");

    // 6. Stop the timer and save.
    let ticks = ticker.stop().await?;
    pet.persist().await?;

    info!(ticks, "tamagotchi-engine shutdown complete");
    Ok(())
}

/// Load the engine configuration from `tamagotchi-config.yaml`.
///
/// Looks for the file relative to the current working directory. A missing
/// file yields defaults (environment overrides still apply). The flag
/// reports whether the file was found.
fn load_config() -> Result<(EngineConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((EngineConfig::from_file(config_path)?, true))
    } else {
        let mut config = EngineConfig::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok((config, false))
    }
}
