//! Shared type definitions for the Tamagotchi pet simulation.
//!
//! This crate is the single source of truth for the pet data model. Types
//! flow downstream to `TypeScript` via `ts-rs` for the browser front end, and
//! the camelCase JSON form of [`PetState`] is the persisted snapshot layout.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for the pet identifier
//! - [`enums`] -- Evolution stages, stat kinds, care-action kinds, health classes
//! - [`structs`] -- The pet state plus derived health and evolution reports

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Activity, EvolutionForm, EvolutionStage, FoodKind, GameKind, HealthStatus, IssueSeverity,
    MealTime, StatKind, TreatmentKind,
};
pub use ids::PetId;
pub use structs::{
    EvolutionCandidate, EvolutionRequirement, GAUGE_MAX, GAUGE_MIN, Genome, HealthIssue,
    HealthReport, PetState, PetStats, PetStatus, Traits, clamp_gauge, clamp_trait,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the browser front end.

    #[test]
    fn export_bindings() {
        // ts-rs writes the bindings to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PetId::export_all();

        let _ = crate::enums::EvolutionStage::export_all();
        let _ = crate::enums::EvolutionForm::export_all();
        let _ = crate::enums::StatKind::export_all();
        let _ = crate::enums::FoodKind::export_all();
        let _ = crate::enums::GameKind::export_all();
        let _ = crate::enums::TreatmentKind::export_all();
        let _ = crate::enums::MealTime::export_all();
        let _ = crate::enums::Activity::export_all();
        let _ = crate::enums::HealthStatus::export_all();
        let _ = crate::enums::IssueSeverity::export_all();

        let _ = crate::structs::PetStats::export_all();
        let _ = crate::structs::PetStatus::export_all();
        let _ = crate::structs::Traits::export_all();
        let _ = crate::structs::Genome::export_all();
        let _ = crate::structs::PetState::export_all();
        let _ = crate::structs::HealthIssue::export_all();
        let _ = crate::structs::HealthReport::export_all();
        let _ = crate::structs::EvolutionRequirement::export_all();
        let _ = crate::structs::EvolutionCandidate::export_all();
    }
}
