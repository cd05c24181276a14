//! Enumeration types for the pet simulation.
//!
//! Care-action kinds, the evolution ladder, the stat gauges, and the
//! health classification shown to the player.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Evolution
// ---------------------------------------------------------------------------

/// A discrete lifecycle phase. Variants are declared in ladder order, so the
/// derived `Ord` matches the direction of evolution.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EvolutionStage {
    /// Freshly created, not yet hatched.
    #[default]
    Egg,
    /// Hatched.
    Baby,
    /// Early childhood.
    Child,
    /// Adolescent.
    Teen,
    /// Fully grown.
    Adult,
    /// Terminal stage.
    Elder,
}

impl EvolutionStage {
    /// Every stage in ladder order.
    pub const ALL: [Self; 6] = [
        Self::Egg,
        Self::Baby,
        Self::Child,
        Self::Teen,
        Self::Adult,
        Self::Elder,
    ];

    /// Zero-based position on the ladder.
    pub const fn index(self) -> usize {
        match self {
            Self::Egg => 0,
            Self::Baby => 1,
            Self::Child => 2,
            Self::Teen => 3,
            Self::Adult => 4,
            Self::Elder => 5,
        }
    }

    /// The following stage, or `None` for [`EvolutionStage::Elder`].
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Egg => Some(Self::Baby),
            Self::Baby => Some(Self::Child),
            Self::Child => Some(Self::Teen),
            Self::Teen => Some(Self::Adult),
            Self::Adult => Some(Self::Elder),
            Self::Elder => None,
        }
    }

    /// Lowercase name used in logs and the persisted layout.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Egg => "egg",
            Self::Baby => "baby",
            Self::Child => "child",
            Self::Teen => "teen",
            Self::Adult => "adult",
            Self::Elder => "elder",
        }
    }
}

impl core::fmt::Display for EvolutionStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A possible mature form, shown to the player as an evolution goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EvolutionForm {
    /// Balanced, well-kept pet.
    HealthySprout,
    /// Fit and energetic pet.
    AthleticRunner,
    /// Clever and content pet.
    WiseScholar,
    /// Rare pet with uniformly high stats.
    MysticCreature,
}

// ---------------------------------------------------------------------------
// Stat gauges
// ---------------------------------------------------------------------------

/// One of the six bounded stat gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum StatKind {
    /// Satiety (100 = fully fed).
    Hunger,
    /// Hydration (100 = fully hydrated).
    Thirst,
    /// Mood.
    Happiness,
    /// Stamina.
    Energy,
    /// Physical condition.
    Health,
    /// Hygiene.
    Cleanliness,
}

impl StatKind {
    /// Every gauge, in display order.
    pub const ALL: [Self; 6] = [
        Self::Hunger,
        Self::Thirst,
        Self::Happiness,
        Self::Energy,
        Self::Health,
        Self::Cleanliness,
    ];

    /// Lowercase gauge name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hunger => "hunger",
            Self::Thirst => "thirst",
            Self::Happiness => "happiness",
            Self::Energy => "energy",
            Self::Health => "health",
            Self::Cleanliness => "cleanliness",
        }
    }
}

impl core::fmt::Display for StatKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Care actions
// ---------------------------------------------------------------------------

/// What the pet is fed. Each kind restores a different amount of hunger and
/// nudges happiness and health differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum FoodKind {
    /// Plain pellet.
    Basic,
    /// Healthy but light.
    Fruit,
    /// Tasty, slightly unhealthy.
    Snack,
    /// Full meal.
    Meal,
}

impl FoodKind {
    /// Lowercase food name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Fruit => "fruit",
            Self::Snack => "snack",
            Self::Meal => "meal",
        }
    }
}

/// Which game is played with the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GameKind {
    /// Fetch. Trains agility.
    Ball,
    /// Brain teaser. Trains intelligence.
    Puzzle,
    /// Running game. Trains agility and strength.
    Chase,
}

impl GameKind {
    /// Lowercase game name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ball => "ball",
            Self::Puzzle => "puzzle",
            Self::Chase => "chase",
        }
    }
}

/// Which treatment is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TreatmentKind {
    /// Cures sickness unconditionally.
    Medicine,
    /// Forced rest. Cures sickness only if health recovers far enough.
    Rest,
    /// Supplement. Never cures sickness.
    Vitamin,
}

impl TreatmentKind {
    /// Lowercase treatment name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medicine => "medicine",
            Self::Rest => "rest",
            Self::Vitamin => "vitamin",
        }
    }
}

/// Mealtime reported by the lifestyle tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MealTime {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
}

/// A real-life activity of the owner mirrored onto the pet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "type")]
#[ts(export, export_to = "bindings/")]
pub enum Activity {
    /// Owner went to bed.
    Sleep,
    /// Owner woke up.
    Wake,
    /// Owner ate.
    Meal {
        /// Which meal.
        meal: MealTime,
    },
    /// Owner exercised.
    Exercise {
        /// Duration in minutes.
        minutes: f64,
    },
}

// ---------------------------------------------------------------------------
// Health classification
// ---------------------------------------------------------------------------

/// Overall health classification. Ordered from best to worst.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum HealthStatus {
    /// Nothing needs attention.
    #[default]
    Healthy,
    /// Something needs attention soon.
    Warning,
    /// Something needs attention now.
    Critical,
}

/// Severity of a single gauge problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum IssueSeverity {
    /// Gauge is getting low.
    Mild,
    /// Gauge is very low.
    Severe,
}
