//! Tunable parameters for the pet simulation.
//!
//! [`PetConfig`] bundles every rate, threshold, probability and care delta so
//! that callers (the engine, tests) can override defaults. Every struct
//! deserializes with per-field defaults, so a YAML file only needs to name
//! the values it changes.
//!
//! Rates are expressed per hour of elapsed wall-clock time. Probabilities
//! are per hour and scaled linearly by the elapsed window.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use tamagotchi_types::{EvolutionStage, FoodKind, GameKind, TreatmentKind};

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    /// Name given to a freshly created pet.
    pub default_name: String,

    /// Longest elapsed window a single decay tick may apply, in seconds
    /// (default: 120). Longer gaps are truncated to this window.
    pub max_elapsed_secs: u64,

    /// Maximum number of uncleaned droppings (default: 3).
    pub soil_cap: u32,

    /// Whether `load` applies one capped catch-up tick after restoring a
    /// snapshot (default: true).
    pub catch_up_on_load: bool,

    /// Starting gauges for a new pet.
    pub starting_stats: StartingStats,

    /// Per-hour decay rates.
    pub decay: DecayConfig,

    /// Random soiling and sickness.
    pub events: EventConfig,

    /// Care-action deltas.
    pub care: CareConfig,

    /// Evolution age thresholds.
    pub evolution: EvolutionConfig,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            default_name: "Tama".to_owned(),
            max_elapsed_secs: 120,
            soil_cap: 3,
            catch_up_on_load: true,
            starting_stats: StartingStats::default(),
            decay: DecayConfig::default(),
            events: EventConfig::default(),
            care: CareConfig::default(),
            evolution: EvolutionConfig::default(),
        }
    }
}

impl PetConfig {
    /// The decay cap as a [`Duration`].
    pub const fn max_elapsed(&self) -> Duration {
        Duration::from_secs(self.max_elapsed_secs)
    }
}

// ---------------------------------------------------------------------------
// Starting stats
// ---------------------------------------------------------------------------

/// Gauges of a freshly created pet. All mid-range so that a new pet is
/// neither in trouble nor maxed out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StartingStats {
    /// Starting hunger (default: 70).
    pub hunger: f64,
    /// Starting thirst (default: 70).
    pub thirst: f64,
    /// Starting happiness (default: 60).
    pub happiness: f64,
    /// Starting energy (default: 80).
    pub energy: f64,
    /// Starting health (default: 90).
    pub health: f64,
    /// Starting cleanliness (default: 80).
    pub cleanliness: f64,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            hunger: 70.0,
            thirst: 70.0,
            happiness: 60.0,
            energy: 80.0,
            health: 90.0,
            cleanliness: 80.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Decay
// ---------------------------------------------------------------------------

/// Stat decay applied by the tick, per elapsed hour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Hunger lost per hour while awake (default: 1.0).
    pub hunger_per_hour: f64,
    /// Thirst lost per hour while awake (default: 1.5). Kept at or above the
    /// hunger rate.
    pub thirst_per_hour: f64,
    /// Happiness lost per hour while awake (default: 0.5).
    pub happiness_per_hour: f64,
    /// Energy lost per hour while awake (default: 0.8).
    pub energy_per_hour: f64,
    /// Cleanliness lost per hour while awake (default: 0.4).
    pub cleanliness_per_hour: f64,
    /// Energy regained per hour while asleep (default: 12.0).
    pub sleep_energy_regen_per_hour: f64,
    /// Hunger or thirst below this causes starvation damage (default: 15).
    pub starvation_threshold: f64,
    /// Health lost per hour while starving or dehydrated (default: 1.0).
    pub starvation_health_per_hour: f64,
    /// Health lost per hour while sick (default: 2.0). Kept at or above the
    /// starvation penalty.
    pub sickness_health_per_hour: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_per_hour: 1.0,
            thirst_per_hour: 1.5,
            happiness_per_hour: 0.5,
            energy_per_hour: 0.8,
            cleanliness_per_hour: 0.4,
            sleep_energy_regen_per_hour: 12.0,
            starvation_threshold: 15.0,
            starvation_health_per_hour: 1.0,
            sickness_health_per_hour: 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Random events
// ---------------------------------------------------------------------------

/// Bernoulli draws made by the tick.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Chance per hour of a new dropping (default: 0.05).
    pub soil_chance_per_hour: f64,
    /// Chance per hour of falling sick under normal conditions
    /// (default: 0.005).
    pub sickness_chance_per_hour: f64,
    /// Chance per hour of falling sick when cleanliness or health is low
    /// (default: 0.02).
    pub elevated_sickness_chance_per_hour: f64,
    /// Cleanliness below this raises the sickness chance (default: 25).
    pub low_cleanliness_threshold: f64,
    /// Health below this raises the sickness chance (default: 40).
    pub low_health_threshold: f64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            soil_chance_per_hour: 0.05,
            sickness_chance_per_hour: 0.005,
            elevated_sickness_chance_per_hour: 0.02,
            low_cleanliness_threshold: 25.0,
            low_health_threshold: 40.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Care
// ---------------------------------------------------------------------------

/// Gauge deltas of a single food kind.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FoodEffect {
    /// Hunger restored.
    pub hunger: f64,
    /// Happiness change.
    pub happiness: f64,
    /// Health change.
    pub health: f64,
}

/// Gauge and trait deltas of a single game kind.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GameEffect {
    /// Happiness gained.
    pub happiness: f64,
    /// Energy spent.
    pub energy_cost: f64,
    /// Intelligence nudge.
    #[serde(default)]
    pub intelligence: f64,
    /// Agility nudge.
    #[serde(default)]
    pub agility: f64,
    /// Strength nudge.
    #[serde(default)]
    pub strength: f64,
}

/// A food effect as written in a config file. Unset fields keep the food
/// kind's default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FoodEffectPatch {
    hunger: Option<f64>,
    happiness: Option<f64>,
    health: Option<f64>,
}

impl FoodEffectPatch {
    fn over(self, base: FoodEffect) -> FoodEffect {
        FoodEffect {
            hunger: self.hunger.unwrap_or(base.hunger),
            happiness: self.happiness.unwrap_or(base.happiness),
            health: self.health.unwrap_or(base.health),
        }
    }
}

/// A game effect as written in a config file. Unset fields keep the game
/// kind's default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GameEffectPatch {
    happiness: Option<f64>,
    energy_cost: Option<f64>,
    intelligence: Option<f64>,
    agility: Option<f64>,
    strength: Option<f64>,
}

impl GameEffectPatch {
    fn over(self, base: GameEffect) -> GameEffect {
        GameEffect {
            happiness: self.happiness.unwrap_or(base.happiness),
            energy_cost: self.energy_cost.unwrap_or(base.energy_cost),
            intelligence: self.intelligence.unwrap_or(base.intelligence),
            agility: self.agility.unwrap_or(base.agility),
            strength: self.strength.unwrap_or(base.strength),
        }
    }
}

fn food_over<'de, D: Deserializer<'de>>(d: D, base: FoodEffect) -> Result<FoodEffect, D::Error> {
    FoodEffectPatch::deserialize(d).map(|patch| patch.over(base))
}

fn game_over<'de, D: Deserializer<'de>>(d: D, base: GameEffect) -> Result<GameEffect, D::Error> {
    GameEffectPatch::deserialize(d).map(|patch| patch.over(base))
}

fn de_basic_food<'de, D: Deserializer<'de>>(d: D) -> Result<FoodEffect, D::Error> {
    food_over(d, default_basic_food())
}

fn de_fruit<'de, D: Deserializer<'de>>(d: D) -> Result<FoodEffect, D::Error> {
    food_over(d, default_fruit())
}

fn de_snack<'de, D: Deserializer<'de>>(d: D) -> Result<FoodEffect, D::Error> {
    food_over(d, default_snack())
}

fn de_meal<'de, D: Deserializer<'de>>(d: D) -> Result<FoodEffect, D::Error> {
    food_over(d, default_meal())
}

fn de_ball<'de, D: Deserializer<'de>>(d: D) -> Result<GameEffect, D::Error> {
    game_over(d, default_ball())
}

fn de_puzzle<'de, D: Deserializer<'de>>(d: D) -> Result<GameEffect, D::Error> {
    game_over(d, default_puzzle())
}

fn de_chase<'de, D: Deserializer<'de>>(d: D) -> Result<GameEffect, D::Error> {
    game_over(d, default_chase())
}

const fn default_basic_food() -> FoodEffect {
    FoodEffect {
        hunger: 20.0,
        happiness: 0.0,
        health: 0.0,
    }
}

const fn default_fruit() -> FoodEffect {
    FoodEffect {
        hunger: 15.0,
        happiness: 2.0,
        health: 3.0,
    }
}

const fn default_snack() -> FoodEffect {
    FoodEffect {
        hunger: 10.0,
        happiness: 8.0,
        health: -2.0,
    }
}

const fn default_meal() -> FoodEffect {
    FoodEffect {
        hunger: 25.0,
        happiness: 3.0,
        health: 2.0,
    }
}

const fn default_ball() -> GameEffect {
    GameEffect {
        happiness: 15.0,
        energy_cost: 10.0,
        intelligence: 0.0,
        agility: 0.02,
        strength: 0.0,
    }
}

const fn default_puzzle() -> GameEffect {
    GameEffect {
        happiness: 10.0,
        energy_cost: 5.0,
        intelligence: 0.03,
        agility: 0.0,
        strength: 0.0,
    }
}

const fn default_chase() -> GameEffect {
    GameEffect {
        happiness: 20.0,
        energy_cost: 15.0,
        intelligence: 0.0,
        agility: 0.03,
        strength: 0.01,
    }
}

/// Effects of care actions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    /// Plain pellet.
    #[serde(deserialize_with = "de_basic_food")]
    pub basic_food: FoodEffect,
    /// Fruit.
    #[serde(deserialize_with = "de_fruit")]
    pub fruit: FoodEffect,
    /// Snack.
    #[serde(deserialize_with = "de_snack")]
    pub snack: FoodEffect,
    /// Full meal.
    #[serde(deserialize_with = "de_meal")]
    pub meal: FoodEffect,

    /// Thirst restored by `hydrate` (default: 25).
    pub hydrate_amount: f64,

    /// Fetch.
    #[serde(deserialize_with = "de_ball")]
    pub ball: GameEffect,
    /// Brain teaser.
    #[serde(deserialize_with = "de_puzzle")]
    pub puzzle: GameEffect,
    /// Running game.
    #[serde(deserialize_with = "de_chase")]
    pub chase: GameEffect,

    /// Longest walk that still adds effect, in minutes (default: 120).
    pub walk_max_minutes: f64,
    /// Happiness per hour walked (default: 10).
    pub walk_happiness_per_hour: f64,
    /// Health per hour walked (default: 5).
    pub walk_health_per_hour: f64,
    /// Energy spent per hour walked (default: 12).
    pub walk_energy_per_hour: f64,
    /// Agility nudge per hour walked (default: 0.02).
    pub walk_agility_per_hour: f64,

    /// Happiness gained from a bath (default: 5).
    pub clean_happiness: f64,

    /// Health restored by medicine (default: 25).
    pub medicine_health: f64,
    /// Health restored by rest (default: 10).
    pub rest_health: f64,
    /// Energy restored by rest (default: 15).
    pub rest_energy: f64,
    /// Rest cures sickness only if health ends at or above this (default: 80).
    pub rest_recovery_threshold: f64,
    /// Health restored by a vitamin (default: 5).
    pub vitamin_health: f64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            basic_food: default_basic_food(),
            fruit: default_fruit(),
            snack: default_snack(),
            meal: default_meal(),
            hydrate_amount: 25.0,
            ball: default_ball(),
            puzzle: default_puzzle(),
            chase: default_chase(),
            walk_max_minutes: 120.0,
            walk_happiness_per_hour: 10.0,
            walk_health_per_hour: 5.0,
            walk_energy_per_hour: 12.0,
            walk_agility_per_hour: 0.02,
            clean_happiness: 5.0,
            medicine_health: 25.0,
            rest_health: 10.0,
            rest_energy: 15.0,
            rest_recovery_threshold: 80.0,
            vitamin_health: 5.0,
        }
    }
}

impl CareConfig {
    /// Effect of a food kind.
    pub const fn food(&self, kind: FoodKind) -> FoodEffect {
        match kind {
            FoodKind::Basic => self.basic_food,
            FoodKind::Fruit => self.fruit,
            FoodKind::Snack => self.snack,
            FoodKind::Meal => self.meal,
        }
    }

    /// Effect of a game kind.
    pub const fn game(&self, kind: GameKind) -> GameEffect {
        match kind {
            GameKind::Ball => self.ball,
            GameKind::Puzzle => self.puzzle,
            GameKind::Chase => self.chase,
        }
    }

    /// Health restored by a treatment kind.
    pub const fn treatment_health(&self, kind: TreatmentKind) -> f64 {
        match kind {
            TreatmentKind::Medicine => self.medicine_health,
            TreatmentKind::Rest => self.rest_health,
            TreatmentKind::Vitamin => self.vitamin_health,
        }
    }
}

// ---------------------------------------------------------------------------
// Evolution
// ---------------------------------------------------------------------------

/// Age (in days) a pet must exceed to enter each stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Egg to baby (default: 1).
    pub baby_at_days: f64,
    /// Baby to child (default: 3).
    pub child_at_days: f64,
    /// Child to teen (default: 7).
    pub teen_at_days: f64,
    /// Teen to adult (default: 14).
    pub adult_at_days: f64,
    /// Adult to elder (default: 30).
    pub elder_at_days: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            baby_at_days: 1.0,
            child_at_days: 3.0,
            teen_at_days: 7.0,
            adult_at_days: 14.0,
            elder_at_days: 30.0,
        }
    }
}

impl EvolutionConfig {
    /// Age at which `stage` begins. The egg stage begins at 0.
    pub const fn entry_age(&self, stage: EvolutionStage) -> f64 {
        match stage {
            EvolutionStage::Egg => 0.0,
            EvolutionStage::Baby => self.baby_at_days,
            EvolutionStage::Child => self.child_at_days,
            EvolutionStage::Teen => self.teen_at_days,
            EvolutionStage::Adult => self.adult_at_days,
            EvolutionStage::Elder => self.elder_at_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_keep_thirst_more_urgent_than_hunger() {
        let cfg = DecayConfig::default();
        assert!(cfg.thirst_per_hour >= cfg.hunger_per_hour);
        assert!(cfg.sickness_health_per_hour >= cfg.starvation_health_per_hour);
    }

    #[test]
    fn default_cap_is_two_minutes() {
        let cfg = PetConfig::default();
        assert_eq!(cfg.max_elapsed(), Duration::from_secs(120));
        assert_eq!(cfg.soil_cap, 3);
    }

    #[test]
    fn evolution_thresholds_are_increasing() {
        let cfg = EvolutionConfig::default();
        for pair in EvolutionStage::ALL.windows(2) {
            if let [a, b] = pair {
                assert!(cfg.entry_age(*a) < cfg.entry_age(*b));
            }
        }
    }

    #[test]
    fn food_lookup_matches_fields() {
        let cfg = CareConfig::default();
        assert!((cfg.food(FoodKind::Basic).hunger - 20.0).abs() < f64::EPSILON);
        assert!((cfg.food(FoodKind::Meal).hunger - 25.0).abs() < f64::EPSILON);
        assert!((cfg.game(GameKind::Puzzle).intelligence - 0.03).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg: PetConfig =
            serde_json::from_str(r#"{"max_elapsed_secs": 600, "decay": {"hunger_per_hour": 2.0}}"#)
                .unwrap_or_default();
        assert_eq!(cfg.max_elapsed_secs, 600);
        assert!((cfg.decay.hunger_per_hour - 2.0).abs() < f64::EPSILON);
        assert!((cfg.decay.thirst_per_hour - 1.5).abs() < f64::EPSILON);
        assert_eq!(cfg.soil_cap, 3);
    }

    #[test]
    fn partial_food_effect_keeps_kind_defaults() {
        let json = r#"{"care": {"snack": {"hunger": 12.0}, "chase": {"energy_cost": 20.0}}}"#;
        let cfg: PetConfig = serde_json::from_str(json).unwrap_or_default();
        assert!((cfg.care.snack.hunger - 12.0).abs() < f64::EPSILON);
        assert!((cfg.care.snack.happiness - 8.0).abs() < f64::EPSILON);
        assert!((cfg.care.snack.health + 2.0).abs() < f64::EPSILON);
        assert!((cfg.care.chase.energy_cost - 20.0).abs() < f64::EPSILON);
        assert!((cfg.care.chase.happiness - 20.0).abs() < f64::EPSILON);
        assert!((cfg.care.chase.agility - 0.03).abs() < f64::EPSILON);
        assert_eq!(cfg.care.fruit, CareConfig::default().fruit);
    }
}
