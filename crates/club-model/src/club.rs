//! Venue Records
//!
//! The `Club` record is the unit everything else operates on: the roster is a
//! fixed list of clubs, the party simulator flips their `active_party` flag,
//! and the catalog queries filter and group them. Field names serialize in
//! camelCase to stay compatible with the persisted storage format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of party a venue runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyType {
    Regular,
    Students,
    Themed,
    #[serde(rename = "Live Music")]
    LiveMusic,
    #[serde(rename = "EDM")]
    Edm,
}

impl PartyType {
    /// Returns all party type variants.
    pub fn all() -> &'static [PartyType] {
        &[
            PartyType::Regular,
            PartyType::Students,
            PartyType::Themed,
            PartyType::LiveMusic,
            PartyType::Edm,
        ]
    }

    /// The display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            PartyType::Regular => "Regular",
            PartyType::Students => "Students",
            PartyType::Themed => "Themed",
            PartyType::LiveMusic => "Live Music",
            PartyType::Edm => "EDM",
        }
    }
}

impl fmt::Display for PartyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for parsing a PartyType from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsePartyTypeError(pub String);

impl fmt::Display for ParsePartyTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown party type: '{}'", self.0)
    }
}

impl std::error::Error for ParsePartyTypeError {}

impl FromStr for PartyType {
    type Err = ParsePartyTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(PartyType::Regular),
            "Students" => Ok(PartyType::Students),
            "Themed" => Ok(PartyType::Themed),
            "Live Music" => Ok(PartyType::LiveMusic),
            "EDM" => Ok(PartyType::Edm),
            _ => Err(ParsePartyTypeError(s.to_string())),
        }
    }
}

/// A club/event venue shown to end users.
///
/// `id` is unique within a roster. `active_party` is mutated only by the
/// party simulator; every other field is static seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub active_party: bool,
    pub rating: f32,
    pub opening_hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub music_genres: Vec<String>,
    pub party_type: PartyType,
}

impl Club {
    /// True when the venue's static rating clears the given threshold.
    pub fn is_high_rated(&self, threshold: f32) -> bool {
        self.rating >= threshold
    }

    /// Case-insensitive check whether any of the venue's genres match.
    pub fn plays_genre(&self, genre: &str) -> bool {
        self.music_genres
            .iter()
            .any(|g| g.eq_ignore_ascii_case(genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_club() -> Club {
        Club {
            id: "7".to_string(),
            name: "Club Midi".to_string(),
            description: "Famous for electronic music and international DJs.".to_string(),
            address: "Str. Baritiu 26, Cluj-Napoca".to_string(),
            lat: 46.7732,
            lng: 23.5863,
            active_party: true,
            rating: 4.8,
            opening_hours: "23:00 - 06:00".to_string(),
            image: None,
            music_genres: vec!["Techno".to_string(), "House".to_string()],
            party_type: PartyType::Edm,
        }
    }

    #[test]
    fn test_party_type_serialization() {
        assert_eq!(serde_json::to_string(&PartyType::Regular).unwrap(), r#""Regular""#);
        assert_eq!(serde_json::to_string(&PartyType::LiveMusic).unwrap(), r#""Live Music""#);
        assert_eq!(serde_json::to_string(&PartyType::Edm).unwrap(), r#""EDM""#);
    }

    #[test]
    fn test_party_type_parse() {
        assert_eq!("Regular".parse::<PartyType>().unwrap(), PartyType::Regular);
        assert_eq!("Live Music".parse::<PartyType>().unwrap(), PartyType::LiveMusic);
        assert_eq!("EDM".parse::<PartyType>().unwrap(), PartyType::Edm);
        assert!("Disco".parse::<PartyType>().is_err());
    }

    #[test]
    fn test_party_type_label_matches_serialization() {
        for pt in PartyType::all() {
            let json = serde_json::to_string(pt).unwrap();
            assert_eq!(json, format!("\"{}\"", pt.label()));
        }
    }

    #[test]
    fn test_club_serializes_camel_case() {
        let json = serde_json::to_string(&sample_club()).unwrap();
        assert!(json.contains(r#""activeParty":true"#));
        assert!(json.contains(r#""openingHours":"23:00 - 06:00""#));
        assert!(json.contains(r#""musicGenres""#));
        assert!(json.contains(r#""partyType":"EDM""#));
        // No image means no image key at all
        assert!(!json.contains("image"));
    }

    #[test]
    fn test_club_roundtrip() {
        let original = sample_club();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Club = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_club_deserializes_stored_format() {
        // The exact shape previously written to browser storage
        let json = r#"{
            "id": "2",
            "name": "Form Space",
            "description": "Popular venue for electronic music events.",
            "address": "Str. Horea 4, Cluj-Napoca",
            "lat": 46.7710,
            "lng": 23.5794,
            "activeParty": true,
            "rating": 4.7,
            "openingHours": "23:00 - 06:00",
            "musicGenres": ["Techno", "EDM", "Drum and Bass"],
            "partyType": "EDM"
        }"#;
        let club: Club = serde_json::from_str(json).unwrap();
        assert_eq!(club.id, "2");
        assert!(club.active_party);
        assert_eq!(club.party_type, PartyType::Edm);
        assert_eq!(club.image, None);
        assert_eq!(club.music_genres.len(), 3);
    }

    #[test]
    fn test_is_high_rated() {
        let club = sample_club();
        assert!(club.is_high_rated(4.5));
        assert!(!club.is_high_rated(4.9));
    }

    #[test]
    fn test_plays_genre() {
        let club = sample_club();
        assert!(club.plays_genre("techno"));
        assert!(club.plays_genre("House"));
        assert!(!club.plays_genre("Jazz"));
    }
}
