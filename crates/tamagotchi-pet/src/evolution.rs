//! Evolution: age-driven stage transitions, derived stage progress, and the
//! candidate mature forms shown to the player.
//!
//! The stage only ever moves forward, one step per tick, once the pet's age
//! exceeds the entry age of the next stage. Progress is never stored; it is
//! the fraction of the current stage's age window already lived, which makes
//! it continuous and non-decreasing within a stage.

use tamagotchi_types::{
    EvolutionCandidate, EvolutionForm, EvolutionRequirement, EvolutionStage, PetState, StatKind,
};

use crate::config::EvolutionConfig;

/// Advance the stage by one if the pet is old enough.
///
/// Returns the new stage if a transition happened.
pub fn try_evolve(state: &mut PetState, config: &EvolutionConfig) -> Option<EvolutionStage> {
    let next = state.evolution_stage.next()?;
    if state.age_days > config.entry_age(next) {
        state.evolution_stage = next;
        Some(next)
    } else {
        None
    }
}

/// Percentage (0--100) of the current stage's age window already lived.
///
/// The terminal stage always reports 100. A pet whose age is already past
/// the next threshold (it evolves on the coming tick) also reports 100.
pub fn stage_progress(state: &PetState, config: &EvolutionConfig) -> f64 {
    let Some(next) = state.evolution_stage.next() else {
        return 100.0;
    };
    let start = config.entry_age(state.evolution_stage);
    let end = config.entry_age(next);
    let window = end - start;
    if window <= 0.0 {
        return 100.0;
    }
    let pct = (state.age_days - start) / window * 100.0;
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Candidate forms
// ---------------------------------------------------------------------------

/// One weighted requirement before it is rendered for display.
struct Criterion {
    name: &'static str,
    target: f64,
    current: f64,
    weight: f64,
}

impl Criterion {
    const fn new(name: &'static str, target: f64, current: f64, weight: f64) -> Self {
        Self {
            name,
            target,
            current,
            weight,
        }
    }

    fn ratio(&self) -> f64 {
        if self.target <= 0.0 {
            return 1.0;
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }
}

fn candidate(
    form: EvolutionForm,
    description: &str,
    rarity: u8,
    criteria: &[Criterion],
) -> EvolutionCandidate {
    let progress = criteria
        .iter()
        .map(|c| c.ratio() * c.weight)
        .sum::<f64>()
        .clamp(0.0, 100.0);
    EvolutionCandidate {
        form,
        description: description.to_owned(),
        rarity,
        requirements: criteria
            .iter()
            .map(|c| EvolutionRequirement {
                name: c.name.to_owned(),
                target: c.target,
                current: c.current,
                met: c.current >= c.target,
            })
            .collect(),
        progress,
    }
}

/// List every mature form with its requirements and weighted progress.
///
/// A pet without a genome counts as intelligence 0 and rarity 0.
pub fn candidate_forms(state: &PetState) -> Vec<EvolutionCandidate> {
    let stats = &state.stats;
    let age = state.age_days;
    let intelligence = state.genome.map_or(0.0, |g| g.traits.intelligence);
    let rarity = state.genome.map_or(0.0, |g| f64::from(g.rarity));

    let high_gauges = StatKind::ALL
        .iter()
        .filter(|k| stats.get(**k) >= 70.0)
        .count();
    #[allow(clippy::cast_precision_loss)]
    let high_share = high_gauges as f64 / StatKind::ALL.len() as f64;

    vec![
        candidate(
            EvolutionForm::HealthySprout,
            "Balanced young pet.",
            2,
            &[
                Criterion::new("Min health", 70.0, stats.health, 50.0),
                Criterion::new("Min age (days)", 1.0, age, 50.0),
            ],
        ),
        candidate(
            EvolutionForm::AthleticRunner,
            "Loves exercise!",
            4,
            &[
                Criterion::new("Min health", 80.0, stats.health, 34.0),
                Criterion::new("Min energy", 70.0, stats.energy, 33.0),
                Criterion::new("Min age (days)", 3.0, age, 33.0),
            ],
        ),
        candidate(
            EvolutionForm::WiseScholar,
            "Highly intelligent.",
            5,
            &[
                Criterion::new("Min intelligence", 0.7, intelligence, 40.0),
                Criterion::new("Min happiness", 60.0, stats.happiness, 30.0),
                Criterion::new("Min age (days)", 4.0, age, 30.0),
            ],
        ),
        candidate(
            EvolutionForm::MysticCreature,
            "Rare and mysterious.",
            8,
            &[
                Criterion::new("Min rarity", 5.0, rarity, 30.0),
                Criterion::new("Share of stats at 70+", 1.0, high_share, 40.0),
                Criterion::new("Min age (days)", 7.0, age, 30.0),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tamagotchi_types::{Genome, PetId, PetStats, PetStatus, Traits};

    use super::*;

    fn pet(age_days: f64, stage: EvolutionStage) -> PetState {
        PetState {
            id: PetId::new(),
            name: "Mochi".to_owned(),
            age_days,
            stats: PetStats {
                hunger: 80.0,
                thirst: 80.0,
                happiness: 80.0,
                energy: 80.0,
                health: 90.0,
                cleanliness: 80.0,
            },
            status: PetStatus::default(),
            genome: Some(Genome {
                rarity: 6,
                traits: Traits {
                    intelligence: 0.8,
                    strength: 0.5,
                    agility: 0.5,
                },
            }),
            evolution_stage: stage,
            last_tick_at: Utc::now(),
        }
    }

    #[test]
    fn egg_hatches_after_one_day() {
        let cfg = EvolutionConfig::default();
        let mut p = pet(1.0, EvolutionStage::Egg);
        assert_eq!(try_evolve(&mut p, &cfg), None);
        p.age_days = 1.01;
        assert_eq!(try_evolve(&mut p, &cfg), Some(EvolutionStage::Baby));
        assert_eq!(p.evolution_stage, EvolutionStage::Baby);
    }

    #[test]
    fn evolves_one_step_at_a_time() {
        let cfg = EvolutionConfig::default();
        let mut p = pet(20.0, EvolutionStage::Egg);
        assert_eq!(try_evolve(&mut p, &cfg), Some(EvolutionStage::Baby));
        assert_eq!(try_evolve(&mut p, &cfg), Some(EvolutionStage::Child));
        assert_eq!(try_evolve(&mut p, &cfg), Some(EvolutionStage::Teen));
        assert_eq!(try_evolve(&mut p, &cfg), Some(EvolutionStage::Adult));
        assert_eq!(try_evolve(&mut p, &cfg), None);
    }

    #[test]
    fn elder_never_evolves() {
        let cfg = EvolutionConfig::default();
        let mut p = pet(1000.0, EvolutionStage::Elder);
        assert_eq!(try_evolve(&mut p, &cfg), None);
        assert!((stage_progress(&p, &cfg) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_tracks_stage_window() {
        let cfg = EvolutionConfig::default();
        // Baby window is 1..3 days; day 2 is halfway.
        let p = pet(2.0, EvolutionStage::Baby);
        assert!((stage_progress(&p, &cfg) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn progress_is_monotone_within_stage() {
        let cfg = EvolutionConfig::default();
        let mut last = -1.0;
        for step in 0..=100 {
            let p = pet(f64::from(step) * 0.01, EvolutionStage::Egg);
            let now = stage_progress(&p, &cfg);
            assert!(now >= last);
            assert!((0.0..=100.0).contains(&now));
            last = now;
        }
    }

    #[test]
    fn candidates_cover_all_forms() {
        let forms: Vec<_> = candidate_forms(&pet(0.0, EvolutionStage::Egg))
            .into_iter()
            .map(|c| c.form)
            .collect();
        assert_eq!(
            forms,
            vec![
                EvolutionForm::HealthySprout,
                EvolutionForm::AthleticRunner,
                EvolutionForm::WiseScholar,
                EvolutionForm::MysticCreature,
            ]
        );
    }

    #[test]
    fn mature_well_kept_pet_is_eligible_everywhere() {
        let candidates = candidate_forms(&pet(8.0, EvolutionStage::Teen));
        for c in &candidates {
            assert!(c.is_eligible(), "{:?} not eligible", c.form);
            assert!((c.progress - 100.0).abs() < 1e-9, "{:?}", c.form);
        }
    }

    #[test]
    fn sprout_progress_is_half_for_newborn_healthy_pet() {
        let candidates = candidate_forms(&pet(0.0, EvolutionStage::Egg));
        let sprout = candidates
            .iter()
            .find(|c| c.form == EvolutionForm::HealthySprout);
        let progress = sprout.map_or(0.0, |c| c.progress);
        // Health requirement fully met (50), age 0 of 1 (0).
        assert!((progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn missing_genome_blocks_scholar_and_mystic() {
        let mut p = pet(10.0, EvolutionStage::Adult);
        p.genome = None;
        let candidates = candidate_forms(&p);
        for c in &candidates {
            let genetic = matches!(
                c.form,
                EvolutionForm::WiseScholar | EvolutionForm::MysticCreature
            );
            assert_eq!(c.is_eligible(), !genetic, "{:?}", c.form);
        }
    }
}
