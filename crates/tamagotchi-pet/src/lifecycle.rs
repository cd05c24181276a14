//! Pet creation and snapshot validation.
//!
//! A new pet starts as an egg with mid-range gauges and a freshly rolled
//! genome. A persisted snapshot is accepted only if it satisfies every state
//! invariant; anything else is rejected so the caller can fall back to
//! [`new_pet`]. A soil count above the configured cap is clamped on load
//! rather than rejected, so lowering the cap keeps the pet.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use tamagotchi_types::{
    EvolutionStage, Genome, PetId, PetState, PetStats, PetStatus, Traits, clamp_gauge,
};

use crate::config::PetConfig;
use crate::error::SnapshotError;

/// Highest genome rarity tier.
pub const MAX_RARITY: u8 = 10;

/// Create a fresh pet born at `now`.
pub fn new_pet(config: &PetConfig, rng: &mut impl Rng, now: DateTime<Utc>) -> PetState {
    let start = &config.starting_stats;
    PetState {
        id: PetId::new(),
        name: config.default_name.clone(),
        age_days: 0.0,
        stats: PetStats {
            hunger: clamp_gauge(start.hunger),
            thirst: clamp_gauge(start.thirst),
            happiness: clamp_gauge(start.happiness),
            energy: clamp_gauge(start.energy),
            health: clamp_gauge(start.health),
            cleanliness: clamp_gauge(start.cleanliness),
        },
        status: PetStatus::default(),
        genome: Some(roll_genome(rng)),
        evolution_stage: EvolutionStage::Egg,
        last_tick_at: now,
    }
}

/// Roll a random genome: uniform rarity tier and uniform traits.
pub fn roll_genome(rng: &mut impl Rng) -> Genome {
    Genome {
        rarity: rng.random_range(1..=MAX_RARITY),
        traits: Traits {
            intelligence: rng.random_range(0.0..=1.0),
            strength: rng.random_range(0.0..=1.0),
            agility: rng.random_range(0.0..=1.0),
        },
    }
}

/// Parse and validate a persisted snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] if `raw` is not a complete
/// `PetState` object, or [`SnapshotError::Invalid`] if it violates an
/// invariant (see [`validate`]).
pub fn decode_snapshot(raw: &str, config: &PetConfig) -> Result<PetState, SnapshotError> {
    let mut state: PetState = serde_json::from_str(raw)?;
    validate(&state)?;
    if state.status.soil_count > config.soil_cap {
        debug!(
            soil = state.status.soil_count,
            cap = config.soil_cap,
            "Clamping stored soil count to cap"
        );
        state.status.soil_count = config.soil_cap;
    }
    Ok(state)
}

/// Check every state invariant.
///
/// # Errors
///
/// Returns [`SnapshotError::Invalid`] naming the first violated invariant.
pub fn validate(state: &PetState) -> Result<(), SnapshotError> {
    if !state.stats.in_range() {
        return Err(invalid("stat gauge outside 0..=100"));
    }
    if !state.age_days.is_finite() || state.age_days < 0.0 {
        return Err(invalid("age must be a non-negative number"));
    }
    if let Some(genome) = &state.genome {
        if !(1..=MAX_RARITY).contains(&genome.rarity) {
            return Err(SnapshotError::Invalid {
                reason: format!("rarity {} outside 1..={MAX_RARITY}", genome.rarity),
            });
        }
        let t = genome.traits;
        let traits_ok = [t.intelligence, t.strength, t.agility]
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v));
        if !traits_ok {
            return Err(invalid("trait outside 0..=1"));
        }
    }
    Ok(())
}

fn invalid(reason: &str) -> SnapshotError {
    SnapshotError::Invalid {
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn fresh() -> PetState {
        let mut rng = SmallRng::seed_from_u64(7);
        new_pet(&PetConfig::default(), &mut rng, Utc::now())
    }

    #[test]
    fn new_pet_starts_as_mid_range_egg() {
        let pet = fresh();
        assert_eq!(pet.evolution_stage, EvolutionStage::Egg);
        assert!(pet.age_days.abs() < f64::EPSILON);
        assert_eq!(pet.status, PetStatus::default());
        assert_eq!(pet.name, "Tama");
        for kind in tamagotchi_types::StatKind::ALL {
            let v = pet.stats.get(kind);
            assert!((60.0..=90.0).contains(&v), "{kind} = {v}");
        }
    }

    #[test]
    fn new_pet_passes_validation() {
        let pet = fresh();
        assert!(validate(&pet).is_ok());
    }

    #[test]
    fn rolled_genome_is_in_range() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..500 {
            let g = roll_genome(&mut rng);
            assert!((1..=MAX_RARITY).contains(&g.rarity));
            assert!((0.0..=1.0).contains(&g.traits.intelligence));
            assert!((0.0..=1.0).contains(&g.traits.strength));
            assert!((0.0..=1.0).contains(&g.traits.agility));
        }
    }

    #[test]
    fn decode_accepts_valid_snapshot() {
        let pet = fresh();
        let raw = serde_json::to_string(&pet).unwrap();
        let decoded = decode_snapshot(&raw, &PetConfig::default()).unwrap();
        assert_eq!(decoded, pet);
    }

    #[test]
    fn decode_rejects_garbage() {
        let result = decode_snapshot("not json", &PetConfig::default());
        assert!(matches!(result, Err(SnapshotError::Malformed { .. })));
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let result = decode_snapshot(r#"{"name":"Mochi"}"#, &PetConfig::default());
        assert!(matches!(result, Err(SnapshotError::Malformed { .. })));
    }

    #[test]
    fn validate_rejects_out_of_range_gauge() {
        let mut pet = fresh();
        pet.stats.hunger = 140.0;
        assert!(matches!(
            validate(&pet),
            Err(SnapshotError::Invalid { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_age() {
        let mut pet = fresh();
        pet.age_days = -1.0;
        assert!(validate(&pet).is_err());
    }

    #[test]
    fn decode_clamps_soil_to_cap() {
        let mut pet = fresh();
        pet.status.soil_count = 3;
        let raw = serde_json::to_string(&pet).unwrap();
        let config = PetConfig {
            soil_cap: 2,
            ..PetConfig::default()
        };

        let loaded = decode_snapshot(&raw, &config).unwrap();
        assert_eq!(loaded.id, pet.id);
        assert_eq!(loaded.status.soil_count, 2);
    }

    #[test]
    fn validate_rejects_bad_genome() {
        let mut pet = fresh();
        if let Some(g) = pet.genome.as_mut() {
            g.rarity = 0;
        }
        assert!(validate(&pet).is_err());

        let mut pet = fresh();
        if let Some(g) = pet.genome.as_mut() {
            g.traits.agility = 1.5;
        }
        assert!(validate(&pet).is_err());
    }

    #[test]
    fn validate_accepts_missing_genome() {
        let mut pet = fresh();
        pet.genome = None;
        assert!(validate(&pet).is_ok());
    }
}
