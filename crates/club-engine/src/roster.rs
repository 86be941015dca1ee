//! Club Roster
//!
//! Bridges the compiled-in seed list and the persisted roster: reads prefer
//! storage, fall back to the seed, and never fail; writes replace the whole
//! roster under one key. The roster is fixed-size for the life of a process,
//! so replace-all is the only write shape.

use club_model::Club;

use crate::storage::{KeyValueStore, StorageError, CLUBS_KEY};

/// Roster provider backed by a key-value store with a seed fallback.
#[derive(Debug, Clone)]
pub struct ClubRoster {
    seed: Vec<Club>,
}

impl ClubRoster {
    /// A roster that falls back to the given seed list.
    pub fn with_seed(seed: Vec<Club>) -> Self {
        Self { seed }
    }

    /// A roster over the compiled-in seed data.
    pub fn standard() -> Self {
        Self::with_seed(crate::setup::seed_clubs())
    }

    /// The seed list, untouched by any persisted state.
    pub fn seed(&self) -> &[Club] {
        &self.seed
    }

    /// The current roster: the persisted one when present and parseable,
    /// otherwise a copy of the seed. Read problems are logged, never fatal.
    pub fn get_all(&self, store: &dyn KeyValueStore) -> Vec<Club> {
        let raw = match store.get(CLUBS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.seed.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "roster read failed, using seed data");
                return self.seed.clone();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(clubs) => clubs,
            Err(e) => {
                tracing::warn!(error = %e, "stored roster unparseable, using seed data");
                self.seed.clone()
            }
        }
    }

    /// Persists the full roster, JSON-encoded, under the roster key.
    pub fn replace_all(
        &self,
        store: &mut dyn KeyValueStore,
        clubs: &[Club],
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(clubs)?;
        store.set(CLUBS_KEY, &encoded)
    }
}
