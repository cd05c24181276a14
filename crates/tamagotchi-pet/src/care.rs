//! Care actions: the bounded mutations triggered by the owner.
//!
//! Every function here is a pure function of the current state, the action
//! kind and the [`CareConfig`]. None depends on elapsed time. Every touched
//! gauge is clamped into `[0, 100]` and every touched trait into `[0, 1]`.
//! Sickness is only ever cleared by [`treat`].

use tamagotchi_types::{FoodKind, GameKind, PetState, StatKind, TreatmentKind, clamp_trait};

use crate::config::CareConfig;

/// Which trait a care action nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraitKind {
    Intelligence,
    Strength,
    Agility,
}

/// Nudge a genome trait. No-op for a pet without a genome.
fn nudge_trait(state: &mut PetState, kind: TraitKind, delta: f64) {
    if let Some(genome) = state.genome.as_mut() {
        let slot = match kind {
            TraitKind::Intelligence => &mut genome.traits.intelligence,
            TraitKind::Strength => &mut genome.traits.strength,
            TraitKind::Agility => &mut genome.traits.agility,
        };
        *slot = clamp_trait(*slot + delta);
    }
}

/// Feed the pet.
pub fn feed(state: &mut PetState, kind: FoodKind, config: &CareConfig) {
    let effect = config.food(kind);
    state.stats.adjust(StatKind::Hunger, effect.hunger);
    state.stats.adjust(StatKind::Happiness, effect.happiness);
    state.stats.adjust(StatKind::Health, effect.health);
}

/// Give the pet water.
pub fn hydrate(state: &mut PetState, config: &CareConfig) {
    state.stats.adjust(StatKind::Thirst, config.hydrate_amount);
}

/// Play a game. Costs energy (never below 0) and may train a trait.
pub fn play(state: &mut PetState, kind: GameKind, config: &CareConfig) {
    let effect = config.game(kind);
    state.stats.adjust(StatKind::Happiness, effect.happiness);
    state.stats.adjust(StatKind::Energy, -effect.energy_cost);
    nudge_trait(state, TraitKind::Intelligence, effect.intelligence);
    nudge_trait(state, TraitKind::Agility, effect.agility);
    nudge_trait(state, TraitKind::Strength, effect.strength);
}

/// Clamp a walk duration into `[0, walk_max_minutes]`. Negative or
/// non-finite durations have no effect.
pub fn effective_walk_minutes(minutes: f64, config: &CareConfig) -> f64 {
    if !minutes.is_finite() || minutes <= 0.0 {
        return 0.0;
    }
    minutes.min(config.walk_max_minutes.max(0.0))
}

/// Take the pet for a walk. Effects scale linearly with the (capped)
/// duration.
pub fn walk(state: &mut PetState, minutes: f64, config: &CareConfig) {
    let hours = effective_walk_minutes(minutes, config) / 60.0;
    if hours <= 0.0 {
        return;
    }
    state
        .stats
        .adjust(StatKind::Happiness, config.walk_happiness_per_hour * hours);
    state
        .stats
        .adjust(StatKind::Health, config.walk_health_per_hour * hours);
    state
        .stats
        .adjust(StatKind::Energy, -config.walk_energy_per_hour * hours);
    nudge_trait(state, TraitKind::Agility, config.walk_agility_per_hour * hours);
}

/// Put the pet to sleep or wake it up.
///
/// Energy is not touched here; it regenerates in the decay tick while the
/// pet sleeps.
pub const fn set_sleeping(state: &mut PetState, sleeping: bool) {
    state.status.is_sleeping = sleeping;
}

/// Flip the sleep flag. Returns the new value.
pub const fn toggle_sleep(state: &mut PetState) -> bool {
    let sleeping = !state.status.is_sleeping;
    set_sleeping(state, sleeping);
    sleeping
}

/// Bathe the pet and clear its droppings.
pub fn clean(state: &mut PetState, config: &CareConfig) {
    state.stats.set(StatKind::Cleanliness, 100.0);
    state.status.soil_count = 0;
    state.stats.adjust(StatKind::Happiness, config.clean_happiness);
}

/// Apply a treatment. Returns `true` if the treatment cured sickness.
///
/// Medicine always cures. Rest cures only if health ends at or above the
/// recovery threshold. Vitamins never cure.
pub fn treat(state: &mut PetState, kind: TreatmentKind, config: &CareConfig) -> bool {
    state
        .stats
        .adjust(StatKind::Health, config.treatment_health(kind));
    if kind == TreatmentKind::Rest {
        state.stats.adjust(StatKind::Energy, config.rest_energy);
    }

    let cures = match kind {
        TreatmentKind::Medicine => true,
        TreatmentKind::Rest => state.stats.health >= config.rest_recovery_threshold,
        TreatmentKind::Vitamin => false,
    };
    let was_sick = state.status.is_sick;
    if cures {
        state.status.is_sick = false;
    }
    was_sick && cures
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tamagotchi_types::{EvolutionStage, Genome, PetId, PetStats, PetStatus, Traits};

    use super::*;

    fn test_state() -> PetState {
        PetState {
            id: PetId::new(),
            name: "Mochi".to_owned(),
            age_days: 0.0,
            stats: PetStats {
                hunger: 50.0,
                thirst: 50.0,
                happiness: 50.0,
                energy: 50.0,
                health: 50.0,
                cleanliness: 50.0,
            },
            status: PetStatus::default(),
            genome: Some(Genome {
                rarity: 3,
                traits: Traits {
                    intelligence: 0.5,
                    strength: 0.5,
                    agility: 0.5,
                },
            }),
            evolution_stage: EvolutionStage::Egg,
            last_tick_at: Utc::now(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn feed_basic_from_empty() {
        let mut state = test_state();
        state.stats.hunger = 5.0;
        feed(&mut state, FoodKind::Basic, &CareConfig::default());
        assert!(close(state.stats.hunger, 25.0));
    }

    #[test]
    fn feed_snack_trades_health_for_happiness() {
        let mut state = test_state();
        feed(&mut state, FoodKind::Snack, &CareConfig::default());
        assert!(close(state.stats.hunger, 60.0));
        assert!(close(state.stats.happiness, 58.0));
        assert!(close(state.stats.health, 48.0));
    }

    #[test]
    fn feed_clamps_at_full() {
        let mut state = test_state();
        state.stats.hunger = 95.0;
        feed(&mut state, FoodKind::Meal, &CareConfig::default());
        assert!(close(state.stats.hunger, 100.0));
    }

    #[test]
    fn feed_never_cures_sickness() {
        let mut state = test_state();
        state.status.is_sick = true;
        feed(&mut state, FoodKind::Meal, &CareConfig::default());
        assert!(state.status.is_sick);
    }

    #[test]
    fn hydrate_overflow_clamps() {
        let mut state = test_state();
        state.stats.thirst = 95.0;
        let config = CareConfig {
            hydrate_amount: 30.0,
            ..CareConfig::default()
        };
        hydrate(&mut state, &config);
        assert!(close(state.stats.thirst, 100.0));
    }

    #[test]
    fn play_costs_energy_and_trains() {
        let mut state = test_state();
        play(&mut state, GameKind::Puzzle, &CareConfig::default());
        assert!(close(state.stats.happiness, 60.0));
        assert!(close(state.stats.energy, 45.0));
        let traits = state.genome.map(|g| g.traits);
        assert!(traits.is_some_and(|t| close(t.intelligence, 0.53) && close(t.agility, 0.5)));
    }

    #[test]
    fn play_energy_saturates_at_zero() {
        let mut state = test_state();
        state.stats.energy = 4.0;
        play(&mut state, GameKind::Chase, &CareConfig::default());
        assert!(close(state.stats.energy, 0.0));
    }

    #[test]
    fn trait_nudge_clamps_at_one() {
        let mut state = test_state();
        if let Some(g) = state.genome.as_mut() {
            g.traits.agility = 0.99;
        }
        play(&mut state, GameKind::Chase, &CareConfig::default());
        assert!(state.genome.is_some_and(|g| close(g.traits.agility, 1.0)));
    }

    #[test]
    fn play_without_genome_still_works() {
        let mut state = test_state();
        state.genome = None;
        play(&mut state, GameKind::Ball, &CareConfig::default());
        assert!(state.genome.is_none());
        assert!(close(state.stats.happiness, 65.0));
    }

    #[test]
    fn walk_scales_with_duration() {
        let config = CareConfig::default();
        let mut short = test_state();
        let mut long = test_state();
        walk(&mut short, 30.0, &config);
        walk(&mut long, 60.0, &config);
        assert!(close(short.stats.happiness, 55.0));
        assert!(close(long.stats.happiness, 60.0));
        assert!(long.stats.energy < short.stats.energy);
        assert!(close(long.stats.energy, 38.0));
    }

    #[test]
    fn walk_duration_is_capped() {
        let config = CareConfig::default();
        let mut capped = test_state();
        let mut huge = test_state();
        walk(&mut capped, 120.0, &config);
        walk(&mut huge, 10_000.0, &config);
        assert_eq!(capped.stats, huge.stats);
    }

    #[test]
    fn negative_or_nan_walk_has_no_effect() {
        let config = CareConfig::default();
        let before = test_state();
        let mut state = before.clone();
        walk(&mut state, -15.0, &config);
        walk(&mut state, f64::NAN, &config);
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_sleep_flips() {
        let mut state = test_state();
        assert!(toggle_sleep(&mut state));
        assert!(state.status.is_sleeping);
        assert!(!toggle_sleep(&mut state));
        assert!(!state.status.is_sleeping);
        assert!(close(state.stats.energy, 50.0));
    }

    #[test]
    fn clean_resets_soil() {
        let mut state = test_state();
        state.status.soil_count = 3;
        state.stats.cleanliness = 12.0;
        clean(&mut state, &CareConfig::default());
        assert_eq!(state.status.soil_count, 0);
        assert!(close(state.stats.cleanliness, 100.0));
        assert!(close(state.stats.happiness, 55.0));
    }

    #[test]
    fn medicine_always_cures() {
        let mut state = test_state();
        state.status.is_sick = true;
        state.stats.health = 5.0;
        assert!(treat(&mut state, TreatmentKind::Medicine, &CareConfig::default()));
        assert!(!state.status.is_sick);
        assert!(close(state.stats.health, 30.0));
    }

    #[test]
    fn rest_below_threshold_keeps_sickness() {
        let mut state = test_state();
        state.status.is_sick = true;
        state.stats.health = 40.0;
        assert!(!treat(&mut state, TreatmentKind::Rest, &CareConfig::default()));
        assert!(state.status.is_sick);
        assert!(close(state.stats.health, 50.0));
        assert!(close(state.stats.energy, 65.0));
    }

    #[test]
    fn rest_crossing_threshold_cures() {
        let mut state = test_state();
        state.status.is_sick = true;
        state.stats.health = 75.0;
        assert!(treat(&mut state, TreatmentKind::Rest, &CareConfig::default()));
        assert!(!state.status.is_sick);
    }

    #[test]
    fn vitamin_never_cures() {
        let mut state = test_state();
        state.status.is_sick = true;
        state.stats.health = 99.0;
        assert!(!treat(&mut state, TreatmentKind::Vitamin, &CareConfig::default()));
        assert!(state.status.is_sick);
        assert!(close(state.stats.health, 100.0));
    }

    #[test]
    fn treating_healthy_pet_reports_no_cure() {
        let mut state = test_state();
        assert!(!treat(&mut state, TreatmentKind::Medicine, &CareConfig::default()));
        assert!(!state.status.is_sick);
    }
}
