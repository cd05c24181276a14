//! Shared, task-safe access to the simulation core.
//!
//! [`PetHandle`] wraps the single [`PetSimulationCore`] in an async mutex so
//! that owner actions and the decay timer are serialized, and publishes the
//! state after every change on a watch channel. Subscribers always see the
//! latest snapshot; intermediate states may be coalesced.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::{Mutex, watch};

use tamagotchi_pet::{PetSimulationCore, SnapshotStore, StoreError, TickOutcome};
use tamagotchi_types::{Activity, FoodKind, GameKind, HealthReport, PetState, TreatmentKind};

struct Inner<S, R> {
    core: Mutex<PetSimulationCore<S, R>>,
    updates: watch::Sender<PetState>,
}

/// Cloneable handle to the pet. All clones share one core.
pub struct PetHandle<S, R> {
    inner: Arc<Inner<S, R>>,
}

impl<S, R> Clone for PetHandle<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SnapshotStore, R: Rng> PetHandle<S, R> {
    /// Take ownership of a loaded core.
    pub fn new(core: PetSimulationCore<S, R>) -> Self {
        let (updates, _) = watch::channel(core.state().clone());
        Self {
            inner: Arc::new(Inner {
                core: Mutex::new(core),
                updates,
            }),
        }
    }

    /// Receive every future state change.
    pub fn subscribe(&self) -> watch::Receiver<PetState> {
        self.inner.updates.subscribe()
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> PetState {
        self.inner.updates.borrow().clone()
    }

    /// Run `f` against the core while holding the lock, then publish the
    /// resulting state.
    async fn mutate<T>(&self, f: impl FnOnce(&mut PetSimulationCore<S, R>) -> T) -> T {
        let mut core = self.inner.core.lock().await;
        let out = f(&mut core);
        self.inner.updates.send_replace(core.state().clone());
        out
    }

    /// Feed the pet.
    pub async fn feed(&self, kind: FoodKind) {
        self.mutate(|core| core.feed(kind)).await;
    }

    /// Give the pet water.
    pub async fn hydrate(&self) {
        self.mutate(PetSimulationCore::hydrate).await;
    }

    /// Play a game with the pet.
    pub async fn play(&self, kind: GameKind) {
        self.mutate(|core| core.play(kind)).await;
    }

    /// Walk the pet.
    pub async fn walk(&self, minutes: f64) {
        self.mutate(|core| core.walk(minutes)).await;
    }

    /// Flip the sleep flag. Returns `true` if the pet is now asleep.
    pub async fn toggle_sleep(&self) -> bool {
        self.mutate(PetSimulationCore::toggle_sleep).await
    }

    /// Bathe the pet.
    pub async fn clean(&self) {
        self.mutate(PetSimulationCore::clean).await;
    }

    /// Treat the pet. Returns `true` if the treatment cured sickness.
    pub async fn treat(&self, kind: TreatmentKind) -> bool {
        self.mutate(|core| core.treat(kind)).await
    }

    /// Mirror a real-life activity onto the pet.
    pub async fn sync_activity(&self, activity: Activity) {
        self.mutate(|core| core.sync_activity(activity)).await;
    }

    /// Replace the pet with a new one.
    pub async fn reset(&self, now: DateTime<Utc>) {
        self.mutate(|core| core.reset(now)).await;
    }

    /// Apply one decay tick. Publishes only if the tick changed the state.
    pub async fn advance(&self, now: DateTime<Utc>) -> TickOutcome {
        let mut core = self.inner.core.lock().await;
        let outcome = core.advance(now);
        if outcome.applied {
            self.inner.updates.send_replace(core.state().clone());
        }
        outcome
    }

    /// Current health assessment.
    pub async fn health_report(&self) -> HealthReport {
        self.inner.core.lock().await.health_report()
    }

    /// Write the current state to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub async fn persist(&self) -> Result<(), StoreError> {
        self.inner.core.lock().await.persist()
    }
}
