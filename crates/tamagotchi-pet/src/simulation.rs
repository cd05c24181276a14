//! The pet simulation core: the single owner of the pet state.
//!
//! [`PetSimulationCore`] ties together the decay tick, the care actions and
//! snapshot persistence. Every mutation persists the new state before
//! returning. Persistence failures are logged and never surface to the
//! caller; the in-memory state stays authoritative.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info, warn};

use tamagotchi_types::{
    Activity, EvolutionCandidate, FoodKind, GameKind, HealthReport, MealTime, PetState,
    TreatmentKind,
};

use crate::config::PetConfig;
use crate::error::StoreError;
use crate::store::{STATE_KEY, SnapshotStore};
use crate::vitals::TickOutcome;
use crate::{care, evolution, health, lifecycle, vitals};

/// Owns the pet, its configuration, its snapshot store and its random
/// source.
///
/// The core is synchronous and never suspends. Callers that share it across
/// tasks wrap it in a mutex.
#[derive(Debug)]
pub struct PetSimulationCore<S, R> {
    state: PetState,
    config: PetConfig,
    store: S,
    rng: R,
}

impl<S: SnapshotStore, R: Rng> PetSimulationCore<S, R> {
    /// Restore the pet from `store`, or hatch a new one.
    ///
    /// A missing, unreadable, malformed or invalid snapshot is replaced by a
    /// fresh pet. If `config.catch_up_on_load` is set, one capped decay tick
    /// is applied at `now`. The resulting state is persisted.
    pub fn load(store: S, config: PetConfig, mut rng: R, now: DateTime<Utc>) -> Self {
        let restored = match store.read(STATE_KEY) {
            Ok(Some(raw)) => match lifecycle::decode_snapshot(&raw, &config) {
                Ok(state) => {
                    debug!(
                        pet_id = %state.id,
                        stage = %state.evolution_stage,
                        age_days = state.age_days,
                        "Restored pet snapshot"
                    );
                    Some(state)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding invalid pet snapshot");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read pet snapshot");
                None
            }
        };

        let state = restored.unwrap_or_else(|| {
            let state = lifecycle::new_pet(&config, &mut rng, now);
            info!(pet_id = %state.id, name = %state.name, "New pet hatched");
            state
        });

        let mut core = Self {
            state,
            config,
            store,
            rng,
        };

        if core.config.catch_up_on_load {
            let outcome = core.tick(now);
            if outcome.applied {
                debug!(elapsed_hours = outcome.elapsed_hours, "Applied catch-up tick");
            }
        }
        core.save();
        core
    }

    /// Current pet state.
    pub const fn state(&self) -> &PetState {
        &self.state
    }

    /// Active configuration.
    pub const fn config(&self) -> &PetConfig {
        &self.config
    }

    /// The backing snapshot store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Care actions
    // -----------------------------------------------------------------------

    /// Feed the pet.
    pub fn feed(&mut self, kind: FoodKind) {
        care::feed(&mut self.state, kind, &self.config.care);
        debug!(food = kind.as_str(), hunger = self.state.stats.hunger, "Fed pet");
        self.save();
    }

    /// Give the pet water.
    pub fn hydrate(&mut self) {
        care::hydrate(&mut self.state, &self.config.care);
        debug!(thirst = self.state.stats.thirst, "Hydrated pet");
        self.save();
    }

    /// Play a game with the pet.
    pub fn play(&mut self, kind: GameKind) {
        care::play(&mut self.state, kind, &self.config.care);
        debug!(
            game = kind.as_str(),
            happiness = self.state.stats.happiness,
            energy = self.state.stats.energy,
            "Played with pet"
        );
        self.save();
    }

    /// Walk the pet for `minutes` (capped, negative treated as zero).
    pub fn walk(&mut self, minutes: f64) {
        care::walk(&mut self.state, minutes, &self.config.care);
        debug!(
            minutes = care::effective_walk_minutes(minutes, &self.config.care),
            "Walked pet"
        );
        self.save();
    }

    /// Flip the sleep flag. Returns `true` if the pet is now asleep.
    pub fn toggle_sleep(&mut self) -> bool {
        let sleeping = care::toggle_sleep(&mut self.state);
        debug!(sleeping, "Toggled sleep");
        self.save();
        sleeping
    }

    /// Put the pet to sleep or wake it. No-op if it is already in that state.
    pub fn set_sleeping(&mut self, sleeping: bool) {
        if self.state.status.is_sleeping == sleeping {
            return;
        }
        care::set_sleeping(&mut self.state, sleeping);
        debug!(sleeping, "Set sleep state");
        self.save();
    }

    /// Bathe the pet and clear its droppings.
    pub fn clean(&mut self) {
        care::clean(&mut self.state, &self.config.care);
        debug!("Cleaned pet");
        self.save();
    }

    /// Treat the pet. Returns `true` if the treatment cured sickness.
    pub fn treat(&mut self, kind: TreatmentKind) -> bool {
        let cured = care::treat(&mut self.state, kind, &self.config.care);
        if cured {
            info!(treatment = kind.as_str(), health = self.state.stats.health, "Pet cured");
        } else {
            debug!(treatment = kind.as_str(), health = self.state.stats.health, "Treated pet");
        }
        self.save();
        cured
    }

    /// Mirror one of the owner's real-life activities onto the pet.
    pub fn sync_activity(&mut self, activity: Activity) {
        match activity {
            Activity::Sleep => self.set_sleeping(true),
            Activity::Wake => self.set_sleeping(false),
            Activity::Meal { meal } => self.feed(food_for_meal(meal)),
            Activity::Exercise { minutes } => self.walk(minutes),
        }
    }

    /// Replace the pet with a freshly hatched one born at `now`.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        let previous = self.state.id;
        self.state = lifecycle::new_pet(&self.config, &mut self.rng, now);
        info!(previous = %previous, pet_id = %self.state.id, "Pet reset");
        self.save();
    }

    // -----------------------------------------------------------------------
    // Decay tick
    // -----------------------------------------------------------------------

    /// Apply one decay tick at wall-clock time `now` and persist.
    ///
    /// Skipped (and not persisted) if no time has elapsed since the last
    /// applied tick.
    pub fn advance(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let outcome = self.tick(now);
        if outcome.applied {
            self.save();
        }
        outcome
    }

    fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let outcome = vitals::apply_decay_tick(&mut self.state, &self.config, now, &mut self.rng);
        if !outcome.applied {
            debug!(last_tick_at = %self.state.last_tick_at, %now, "Skipped tick, no time elapsed");
            return outcome;
        }

        debug!(
            elapsed_hours = outcome.elapsed_hours,
            hunger = self.state.stats.hunger,
            thirst = self.state.stats.thirst,
            health = self.state.stats.health,
            age_days = self.state.age_days,
            "Decay tick applied"
        );
        if outcome.soiled {
            debug!(soil_count = self.state.status.soil_count, "Pet soiled");
        }
        if outcome.fell_sick {
            info!(
                health = self.state.stats.health,
                cleanliness = self.state.stats.cleanliness,
                "Pet fell sick"
            );
        }
        if let Some(stage) = outcome.evolved_to {
            info!(stage = %stage, age_days = self.state.age_days, "Pet evolved");
        }
        outcome
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Health issues and overall classification.
    pub fn health_report(&self) -> HealthReport {
        health::assess(&self.state)
    }

    /// Percentage of the current evolution stage already lived.
    pub fn evolution_progress(&self) -> f64 {
        evolution::stage_progress(&self.state, &self.config.evolution)
    }

    /// Possible mature forms and how close the pet is to each.
    pub fn candidate_forms(&self) -> Vec<EvolutionCandidate> {
        evolution::candidate_forms(&self.state)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write the current state to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the state cannot be encoded or written.
    pub fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.state)?;
        self.store.write(STATE_KEY, &raw)
    }

    fn save(&self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, pet_id = %self.state.id, "Failed to persist pet snapshot");
        }
    }
}

/// Which food a real-life meal maps to.
pub const fn food_for_meal(meal: MealTime) -> FoodKind {
    match meal {
        MealTime::Breakfast => FoodKind::Basic,
        MealTime::Lunch | MealTime::Dinner => FoodKind::Meal,
    }
}
