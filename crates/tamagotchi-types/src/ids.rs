//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Pets use UUID v7 (time-ordered) identifiers so that snapshots written by
//! different sessions sort by creation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique, stable identifier for a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetId(pub Uuid);

impl PetId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PetId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PetId> for Uuid {
    fn from(id: PetId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = PetId::new();
        let b = PetId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_serializes_as_bare_uuid() {
        let id = PetId::new();
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", id.into_inner()));
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = PetId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
