//! The decay tick applied to the pet on every timer firing.
//!
//! Order of operations for one tick at wall-clock time `now`:
//!
//! 1. Compute the elapsed time since `last_tick_at`, capped at
//!    `max_elapsed_secs` so a client reopened after days away does not
//!    instantly zero every gauge
//! 2. Skip the tick entirely if no time elapsed (clock skew, double call)
//! 3. Asleep: only regenerate energy
//! 4. Awake: decay hunger, thirst, happiness, energy and cleanliness
//! 5. Awake: starvation and sickness damage to health
//! 6. Awake: Bernoulli draws for soiling and falling sick
//! 7. Age the pet
//! 8. Advance the evolution stage if old enough
//! 9. Stamp `last_tick_at = now`

use chrono::{DateTime, Utc};
use rand::Rng;

use tamagotchi_types::{EvolutionStage, PetState, StatKind};

use crate::config::{DecayConfig, EventConfig, PetConfig};
use crate::evolution;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Result of applying one decay tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Whether the tick changed anything. `false` when no time elapsed.
    pub applied: bool,
    /// Hours of (capped) elapsed time the tick applied.
    pub elapsed_hours: f64,
    /// Whether a new dropping appeared.
    pub soiled: bool,
    /// Whether the pet fell sick this tick.
    pub fell_sick: bool,
    /// The stage the pet evolved into, if it evolved.
    pub evolved_to: Option<EvolutionStage>,
}

impl TickOutcome {
    /// Outcome of a tick that found no elapsed time.
    pub const fn skipped() -> Self {
        Self {
            applied: false,
            elapsed_hours: 0.0,
            soiled: false,
            fell_sick: false,
            evolved_to: None,
        }
    }
}

/// Hours between `last` and `now`, capped at `config.max_elapsed()`.
///
/// Returns `None` if `now` is not after `last`. Measured in nanoseconds, the
/// resolution of the timestamps, so no elapsed time is dropped when the tick
/// stamps `now`.
pub fn capped_elapsed_hours(
    last: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &PetConfig,
) -> Option<f64> {
    let cap_ns = i64::try_from(config.max_elapsed().as_nanos()).unwrap_or(i64::MAX);
    // `None` only past ~292 years, which is over any cap.
    let elapsed_ns = now
        .signed_duration_since(last)
        .num_nanoseconds()
        .unwrap_or(i64::MAX);
    if elapsed_ns <= 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let hours = elapsed_ns.min(cap_ns) as f64 / NANOS_PER_HOUR;
    Some(hours)
}

/// Apply one decay tick at wall-clock time `now`.
///
/// Calling this twice with the same `now` is equivalent to calling it once:
/// the second call sees no elapsed time and is skipped.
pub fn apply_decay_tick(
    state: &mut PetState,
    config: &PetConfig,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> TickOutcome {
    // 1-2. Elapsed window
    let Some(hours) = capped_elapsed_hours(state.last_tick_at, now, config) else {
        return TickOutcome::skipped();
    };

    let mut outcome = TickOutcome {
        applied: true,
        elapsed_hours: hours,
        ..TickOutcome::skipped()
    };

    if state.status.is_sleeping {
        // 3. Sleep suspends all decay and random events
        state
            .stats
            .adjust(StatKind::Energy, config.decay.sleep_energy_regen_per_hour * hours);
    } else {
        // 4. Stat decay
        apply_stat_decay(state, &config.decay, hours);

        // 5. Health damage
        apply_health_damage(state, &config.decay, hours);

        // 6. Random events
        outcome.soiled = roll_soiling(state, &config.events, config.soil_cap, hours, rng);
        outcome.fell_sick = roll_sickness(state, &config.events, hours, rng);
    }

    // 7. Aging
    state.age_days += hours / 24.0;

    // 8. Evolution
    outcome.evolved_to = evolution::try_evolve(state, &config.evolution);

    // 9. Stamp
    state.last_tick_at = now;

    outcome
}

fn apply_stat_decay(state: &mut PetState, decay: &DecayConfig, hours: f64) {
    let rates = [
        (StatKind::Hunger, decay.hunger_per_hour),
        (StatKind::Thirst, decay.thirst_per_hour),
        (StatKind::Happiness, decay.happiness_per_hour),
        (StatKind::Energy, decay.energy_per_hour),
        (StatKind::Cleanliness, decay.cleanliness_per_hour),
    ];
    for (stat, rate) in rates {
        state.stats.adjust(stat, -(rate * hours));
    }
}

fn apply_health_damage(state: &mut PetState, decay: &DecayConfig, hours: f64) {
    let mut per_hour = 0.0;
    if state.stats.hunger < decay.starvation_threshold
        || state.stats.thirst < decay.starvation_threshold
    {
        per_hour += decay.starvation_health_per_hour;
    }
    if state.status.is_sick {
        per_hour += decay.sickness_health_per_hour;
    }
    if per_hour > 0.0 {
        state.stats.adjust(StatKind::Health, -(per_hour * hours));
    }
}

/// One Bernoulli trial with probability `p` (clamped into `[0, 1]`).
fn bernoulli(rng: &mut impl Rng, p: f64) -> bool {
    if !p.is_finite() || p <= 0.0 {
        return false;
    }
    rng.random::<f64>() < p.min(1.0)
}

fn roll_soiling(
    state: &mut PetState,
    events: &EventConfig,
    soil_cap: u32,
    hours: f64,
    rng: &mut impl Rng,
) -> bool {
    if state.status.soil_count >= soil_cap {
        return false;
    }
    if bernoulli(rng, events.soil_chance_per_hour * hours) {
        state.status.soil_count = state.status.soil_count.saturating_add(1).min(soil_cap);
        true
    } else {
        false
    }
}

/// Chance per hour of falling sick given the pet's current condition.
pub fn sickness_chance_per_hour(state: &PetState, events: &EventConfig) -> f64 {
    if state.stats.cleanliness < events.low_cleanliness_threshold
        || state.stats.health < events.low_health_threshold
    {
        events.elevated_sickness_chance_per_hour
    } else {
        events.sickness_chance_per_hour
    }
}

fn roll_sickness(state: &mut PetState, events: &EventConfig, hours: f64, rng: &mut impl Rng) -> bool {
    if state.status.is_sick {
        return false;
    }
    let p = sickness_chance_per_hour(state, events) * hours;
    if bernoulli(rng, p) {
        state.status.is_sick = true;
        true
    } else {
        false
    }
}
