//! Catalog Queries
//!
//! Read-only views over a roster: free-text search, grouping for the
//! genre/party-type browse sections, and the active-party filter.

use std::collections::BTreeMap;

use club_model::Club;
use serde::Serialize;

/// Clubs sharing one music genre.
#[derive(Debug, Clone, Serialize)]
pub struct GenreGroup {
    pub genre: String,
    pub clubs: Vec<Club>,
}

/// Clubs sharing one party type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyTypeGroup {
    pub party_type: String,
    pub clubs: Vec<Club>,
}

/// Case-insensitive search over name, description, address, genres and
/// party type. A blank term returns the whole roster.
pub fn search(clubs: &[Club], term: &str) -> Vec<Club> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return clubs.to_vec();
    }
    clubs
        .iter()
        .filter(|club| {
            club.name.to_lowercase().contains(&term)
                || club.description.to_lowercase().contains(&term)
                || club.address.to_lowercase().contains(&term)
                || club
                    .music_genres
                    .iter()
                    .any(|g| g.to_lowercase().contains(&term))
                || club.party_type.label().to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// One group per distinct genre, alphabetical; a club appears in every
/// genre it plays.
pub fn by_music_genre(clubs: &[Club]) -> Vec<GenreGroup> {
    let mut groups: BTreeMap<String, Vec<Club>> = BTreeMap::new();
    for club in clubs {
        for genre in &club.music_genres {
            groups.entry(genre.clone()).or_default().push(club.clone());
        }
    }
    groups
        .into_iter()
        .map(|(genre, clubs)| GenreGroup { genre, clubs })
        .collect()
}

/// One group per party type present in the roster, sorted by label.
pub fn by_party_type(clubs: &[Club]) -> Vec<PartyTypeGroup> {
    let mut groups: BTreeMap<String, Vec<Club>> = BTreeMap::new();
    for club in clubs {
        groups
            .entry(club.party_type.label().to_string())
            .or_default()
            .push(club.clone());
    }
    groups
        .into_iter()
        .map(|(party_type, clubs)| PartyTypeGroup { party_type, clubs })
        .collect()
}

/// Venues currently flagged with an active party.
pub fn active_party_clubs(clubs: &[Club]) -> Vec<Club> {
    clubs.iter().filter(|c| c.active_party).cloned().collect()
}
