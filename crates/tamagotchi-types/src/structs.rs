//! Core entity structs: the pet itself plus the read-only reports derived
//! from it.
//!
//! [`PetState`] serializes with camelCase keys; that JSON object is the
//! persisted snapshot layout read back by the browser front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EvolutionForm, EvolutionStage, HealthStatus, IssueSeverity, StatKind};
use crate::ids::PetId;

/// Lower bound of every stat gauge.
pub const GAUGE_MIN: f64 = 0.0;

/// Upper bound of every stat gauge.
pub const GAUGE_MAX: f64 = 100.0;

/// Clamp a gauge value into `[GAUGE_MIN, GAUGE_MAX]`. Non-finite input maps
/// to the lower bound.
pub fn clamp_gauge(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(GAUGE_MIN, GAUGE_MAX)
    } else {
        GAUGE_MIN
    }
}

/// Clamp a trait value into `[0, 1]`. Non-finite input maps to 0.
pub fn clamp_trait(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The six bounded stat gauges. Higher is always better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PetStats {
    /// Satiety (0--100).
    pub hunger: f64,
    /// Hydration (0--100).
    pub thirst: f64,
    /// Mood (0--100).
    pub happiness: f64,
    /// Stamina (0--100).
    pub energy: f64,
    /// Physical condition (0--100).
    pub health: f64,
    /// Hygiene (0--100).
    pub cleanliness: f64,
}

impl PetStats {
    /// Read a gauge by kind.
    pub const fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Hunger => self.hunger,
            StatKind::Thirst => self.thirst,
            StatKind::Happiness => self.happiness,
            StatKind::Energy => self.energy,
            StatKind::Health => self.health,
            StatKind::Cleanliness => self.cleanliness,
        }
    }

    /// Write a gauge by kind, clamping into range.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        let slot = match kind {
            StatKind::Hunger => &mut self.hunger,
            StatKind::Thirst => &mut self.thirst,
            StatKind::Happiness => &mut self.happiness,
            StatKind::Energy => &mut self.energy,
            StatKind::Health => &mut self.health,
            StatKind::Cleanliness => &mut self.cleanliness,
        };
        *slot = clamp_gauge(value);
    }

    /// Add `delta` (possibly negative) to a gauge, clamping into range.
    pub fn adjust(&mut self, kind: StatKind, delta: f64) {
        self.set(kind, self.get(kind) + delta);
    }

    /// Whether every gauge is finite and within range.
    pub fn in_range(&self) -> bool {
        StatKind::ALL.iter().all(|kind| {
            let v = self.get(*kind);
            v.is_finite() && (GAUGE_MIN..=GAUGE_MAX).contains(&v)
        })
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Discrete conditions derived by the decay tick or set by care actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PetStatus {
    /// Whether the pet is asleep.
    pub is_sleeping: bool,
    /// Whether the pet is sick.
    pub is_sick: bool,
    /// Number of uncleaned droppings (bounded).
    pub soil_count: u32,
}

// ---------------------------------------------------------------------------
// Genome
// ---------------------------------------------------------------------------

/// Heritable traits, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Traits {
    /// Learning aptitude.
    pub intelligence: f64,
    /// Physical power.
    pub strength: f64,
    /// Speed and coordination.
    pub agility: f64,
}

/// Genetic makeup read by breeding and chat features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Genome {
    /// Rarity tier, 1 (common) to 10 (legendary).
    pub rarity: u8,
    /// Trait values.
    pub traits: Traits,
}

// ---------------------------------------------------------------------------
// PetState
// ---------------------------------------------------------------------------

/// The root entity: everything known about the pet.
///
/// Evolution progress is not stored here. It is derived from age and stage
/// on demand so that it can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PetState {
    /// Stable identifier.
    pub id: PetId,
    /// Display name.
    pub name: String,
    /// Age in (fractional) days.
    pub age_days: f64,
    /// Stat gauges.
    pub stats: PetStats,
    /// Discrete conditions.
    pub status: PetStatus,
    /// Optional genome.
    pub genome: Option<Genome>,
    /// Current lifecycle phase.
    pub evolution_stage: EvolutionStage,
    /// When the last decay tick was applied.
    pub last_tick_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Health report
// ---------------------------------------------------------------------------

/// One problem found by the health assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HealthIssue {
    /// The gauge at fault, or `None` for illness.
    pub stat: Option<StatKind>,
    /// How bad it is.
    pub severity: IssueSeverity,
    /// Short label, e.g. "Severe hunger".
    pub label: String,
    /// What the owner should do about it.
    pub recommendation: String,
}

/// Result of assessing the pet's current condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HealthReport {
    /// Worst classification across all issues.
    pub status: HealthStatus,
    /// Every problem found, in gauge order.
    pub issues: Vec<HealthIssue>,
}

// ---------------------------------------------------------------------------
// Evolution candidates
// ---------------------------------------------------------------------------

/// A single requirement for reaching an evolution form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EvolutionRequirement {
    /// Human-readable name, e.g. "Min health".
    pub name: String,
    /// Value needed.
    pub target: f64,
    /// Value the pet currently has.
    pub current: f64,
    /// Whether `current` meets `target`.
    pub met: bool,
}

/// A possible evolution form and how close the pet is to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EvolutionCandidate {
    /// Which form.
    pub form: EvolutionForm,
    /// Flavor text.
    pub description: String,
    /// Rarity of the form (1--10).
    pub rarity: u8,
    /// Requirements with their current values.
    pub requirements: Vec<EvolutionRequirement>,
    /// Weighted progress toward the form (0--100).
    pub progress: f64,
}

impl EvolutionCandidate {
    /// Whether every requirement is met.
    pub fn is_eligible(&self) -> bool {
        self.requirements.iter().all(|r| r.met)
    }
}
