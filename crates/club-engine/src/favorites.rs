//! Favorite Clubs
//!
//! A persisted list of club ids the user has starred, stored as a JSON
//! array under one key. Membership is by id; `details` resolves ids against
//! a roster when full records are needed.

use club_model::Club;

use crate::storage::{KeyValueStore, StorageError, FAVORITES_KEY};

/// Store-backed favorite club ids.
pub struct FavoriteList<'a> {
    store: &'a mut dyn KeyValueStore,
}

impl<'a> FavoriteList<'a> {
    pub fn new(store: &'a mut dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// All favorited ids, in insertion order. Absent or unreadable state is
    /// an empty list, never an error.
    pub fn ids(&self) -> Vec<String> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "favorites read failed, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "stored favorites unparseable, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, club_id: &str) -> bool {
        self.ids().iter().any(|id| id == club_id)
    }

    /// Adds a club id; already-favorited ids are left alone.
    pub fn add(&mut self, club_id: &str) -> Result<(), StorageError> {
        let mut ids = self.ids();
        if ids.iter().any(|id| id == club_id) {
            return Ok(());
        }
        ids.push(club_id.to_string());
        self.save(&ids)
    }

    /// Removes a club id; unknown ids are a no-op.
    pub fn remove(&mut self, club_id: &str) -> Result<(), StorageError> {
        let mut ids = self.ids();
        let before = ids.len();
        ids.retain(|id| id != club_id);
        if ids.len() == before {
            return Ok(());
        }
        self.save(&ids)
    }

    /// Full records for every favorited club present in `clubs`.
    pub fn details(&self, clubs: &[Club]) -> Vec<Club> {
        let ids = self.ids();
        clubs
            .iter()
            .filter(|club| ids.iter().any(|id| *id == club.id))
            .cloned()
            .collect()
    }

    fn save(&mut self, ids: &[String]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(ids)?;
        self.store.set(FAVORITES_KEY, &encoded)
    }
}
