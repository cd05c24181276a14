//! Health assessment: turns the raw gauges into issues, care
//! recommendations, and an overall classification.
//!
//! Read-only. Nothing here mutates the pet.

use tamagotchi_types::{
    HealthIssue, HealthReport, HealthStatus, IssueSeverity, PetState, StatKind,
};

/// A care gauge below this is a severe issue.
const SEVERE_BELOW: f64 = 20.0;

/// A severe issue below this makes the pet critical.
const CRITICAL_BELOW: f64 = 10.0;

/// A care gauge below this is a mild issue.
const MILD_BELOW: f64 = 40.0;

/// Health below this is poor health.
const POOR_HEALTH_BELOW: f64 = 50.0;

/// Health below this is critical.
const CRITICAL_HEALTH_BELOW: f64 = 30.0;

/// Labels and recommendations for a care gauge: (severe label, severe
/// advice, mild label, mild advice).
const fn wording(stat: StatKind) -> (&'static str, &'static str, &'static str, &'static str) {
    match stat {
        StatKind::Hunger => (
            "Severe hunger",
            "Feed your pet immediately",
            "Hunger",
            "Your pet needs food soon",
        ),
        StatKind::Thirst => (
            "Severe thirst",
            "Give your pet water immediately",
            "Thirst",
            "Your pet needs water soon",
        ),
        StatKind::Energy => (
            "Exhaustion",
            "Your pet needs to sleep",
            "Tiredness",
            "Your pet should rest soon",
        ),
        StatKind::Happiness => (
            "Depression",
            "Play with your pet to improve its mood",
            "Sadness",
            "Your pet needs more attention",
        ),
        StatKind::Cleanliness => (
            "Unhygienic",
            "Clean your pet",
            "Dirty",
            "Your pet needs a bath soon",
        ),
        StatKind::Health => (
            "Poor health",
            "Improve overall care to restore health",
            "Poor health",
            "Improve overall care to restore health",
        ),
    }
}

/// Assess the pet's current condition.
pub fn assess(state: &PetState) -> HealthReport {
    let mut issues = Vec::new();
    let mut status = HealthStatus::Healthy;

    let care_gauges = [
        StatKind::Hunger,
        StatKind::Thirst,
        StatKind::Energy,
        StatKind::Happiness,
        StatKind::Cleanliness,
    ];
    for stat in care_gauges {
        let value = state.stats.get(stat);
        let (severe_label, severe_advice, mild_label, mild_advice) = wording(stat);
        if value < SEVERE_BELOW {
            issues.push(issue(Some(stat), IssueSeverity::Severe, severe_label, severe_advice));
            status = status.max(if value < CRITICAL_BELOW {
                HealthStatus::Critical
            } else {
                HealthStatus::Warning
            });
        } else if value < MILD_BELOW {
            issues.push(issue(Some(stat), IssueSeverity::Mild, mild_label, mild_advice));
            status = status.max(HealthStatus::Warning);
        }
    }

    let health = state.stats.health;
    if health < POOR_HEALTH_BELOW {
        let (label, advice, _, _) = wording(StatKind::Health);
        let severity = if health < CRITICAL_HEALTH_BELOW {
            IssueSeverity::Severe
        } else {
            IssueSeverity::Mild
        };
        issues.push(issue(Some(StatKind::Health), severity, label, advice));
        status = status.max(if health < CRITICAL_HEALTH_BELOW {
            HealthStatus::Critical
        } else {
            HealthStatus::Warning
        });
    }

    if state.status.is_sick {
        issues.push(issue(
            None,
            IssueSeverity::Severe,
            "Illness",
            "Treat your pet with medicine",
        ));
        status = HealthStatus::Critical;
    }

    HealthReport { status, issues }
}

fn issue(
    stat: Option<StatKind>,
    severity: IssueSeverity,
    label: &str,
    recommendation: &str,
) -> HealthIssue {
    HealthIssue {
        stat,
        severity,
        label: label.to_owned(),
        recommendation: recommendation.to_owned(),
    }
}
