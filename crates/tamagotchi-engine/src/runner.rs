//! The recurring decay timer and the health monitor.
//!
//! [`TickLoop`] owns a spawned task that applies one decay tick per period
//! at the current wall-clock time. Missed periods are skipped, not replayed;
//! the tick itself accounts for the elapsed time. The loop exits when
//! [`TickLoop::stop`] is called and is aborted if the guard is dropped, so
//! no tick fires after teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::{Notify, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use tamagotchi_pet::SnapshotStore;
use tamagotchi_pet::health;
use tamagotchi_types::{HealthStatus, PetState};

use crate::handle::PetHandle;

/// Stop signal shared between the guard and the task.
#[derive(Debug, Default)]
struct Shutdown {
    requested: AtomicBool,
    notify: Notify,
}

impl Shutdown {
    fn request(&self) {
        self.requested.store(true, Ordering::Release);
        // `notify_one` stores a permit if the task is not waiting yet.
        self.notify.notify_one();
    }

    fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

/// Guard for the running decay timer.
#[derive(Debug)]
pub struct TickLoop {
    shutdown: Arc<Shutdown>,
    task: Option<JoinHandle<u64>>,
}

impl TickLoop {
    /// Spawn the timer. The first tick fires one full `period` after the
    /// call.
    pub fn spawn<S, R>(pet: PetHandle<S, R>, period: Duration) -> Self
    where
        S: SnapshotStore + Send + 'static,
        R: Rng + Send + 'static,
    {
        let shutdown = Arc::new(Shutdown::default());
        let signal = Arc::clone(&shutdown);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; load already caught up.
            ticker.tick().await;
            info!(
                period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
                "Decay timer started"
            );

            let mut ticks: u64 = 0;
            loop {
                tokio::select! {
                    () = signal.notify.notified() => {}
                    _ = ticker.tick() => {}
                }
                if signal.is_requested() {
                    break;
                }

                let outcome = pet.advance(Utc::now()).await;
                if outcome.applied {
                    ticks = ticks.saturating_add(1);
                }
            }

            info!(ticks, "Decay timer stopped");
            ticks
        });

        Self {
            shutdown,
            task: Some(task),
        }
    }

    /// Stop the timer and wait for the task to finish. Returns the number of
    /// ticks that changed the pet.
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] if the task panicked.
    pub async fn stop(mut self) -> Result<u64, JoinError> {
        self.shutdown.request();
        match self.task.take() {
            Some(task) => task.await,
            None => Ok(0),
        }
    }
}

impl Drop for TickLoop {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            self.shutdown.request();
            task.abort();
        }
    }
}

/// Log health transitions as they are published. Exits when every sender is
/// gone.
pub fn spawn_health_monitor(mut updates: watch::Receiver<PetState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut last = health::assess(&updates.borrow_and_update()).status;
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            let report = health::assess(&state);
            if report.status == last {
                continue;
            }
            match report.status {
                HealthStatus::Critical => warn!(
                    pet_id = %state.id,
                    issues = report.issues.len(),
                    sick = state.status.is_sick,
                    "Pet health is critical"
                ),
                HealthStatus::Warning => info!(
                    pet_id = %state.id,
                    issues = report.issues.len(),
                    "Pet needs attention"
                ),
                HealthStatus::Healthy => debug!(pet_id = %state.id, "Pet is healthy"),
            }
            last = report.status;
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tamagotchi_pet::{MemoryStore, PetConfig, PetSimulationCore};

    use super::*;

    fn handle() -> PetHandle<MemoryStore, SmallRng> {
        PetHandle::new(PetSimulationCore::load(
            MemoryStore::new(),
            PetConfig::default(),
            SmallRng::seed_from_u64(11),
            Utc::now(),
        ))
    }

    #[tokio::test]
    async fn ticks_until_stopped() {
        let pet = handle();
        let born = pet.snapshot().last_tick_at;

        let ticker = TickLoop::spawn(pet.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(120)).await;
        let ticks = ticker.stop().await.unwrap();

        assert!(ticks > 0);
        let state = pet.snapshot();
        assert!(state.last_tick_at > born);
        assert!(state.age_days > 0.0);
    }

    #[tokio::test]
    async fn stop_does_not_wait_for_next_period() {
        let ticker = TickLoop::spawn(handle(), Duration::from_secs(3600));
        let result = tokio::time::timeout(Duration::from_secs(1), ticker.stop()).await;
        assert_eq!(result.unwrap().unwrap(), 0);
    }

    #[tokio::test]
    async fn dropped_guard_stops_ticking() {
        let pet = handle();
        let ticker = TickLoop::spawn(pet.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(40)).await;
        drop(ticker);

        tokio::time::sleep(Duration::from_millis(20)).await;
        let settled = pet.snapshot().last_tick_at;
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(pet.snapshot().last_tick_at, settled);
    }

    #[tokio::test]
    async fn monitor_exits_when_handle_is_gone() {
        let pet = handle();
        let monitor = spawn_health_monitor(pet.subscribe());
        pet.feed(tamagotchi_types::FoodKind::Basic).await;
        drop(pet);
        tokio::time::timeout(Duration::from_secs(1), monitor)
            .await
            .unwrap()
            .unwrap();
    }
}
