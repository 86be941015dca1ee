//! Seed Roster
//!
//! The compiled-in venue list used when storage holds no roster yet. Sixteen
//! Cluj-Napoca clubs; ids are unique and stable, `active_party` here is only
//! the starting state before the first update run.

use club_model::{Club, PartyType};

fn club(
    id: &str,
    name: &str,
    description: &str,
    address: &str,
    lat: f64,
    lng: f64,
    active_party: bool,
    rating: f32,
    opening_hours: &str,
    music_genres: &[&str],
    party_type: PartyType,
) -> Club {
    Club {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        address: address.to_string(),
        lat,
        lng,
        active_party,
        rating,
        opening_hours: opening_hours.to_string(),
        image: None,
        music_genres: music_genres.iter().map(|g| g.to_string()).collect(),
        party_type,
    }
}

/// The full seed roster, in display order.
pub fn seed_clubs() -> Vec<Club> {
    vec![
        club(
            "1",
            "NOA Club & Restaurant",
            "Upscale club with a great atmosphere and music.",
            "Str. Republicii 109, Cluj-Napoca",
            46.7688,
            23.5994,
            true,
            4.5,
            "22:00 - 05:00",
            &["House", "Pop", "Commercial"],
            PartyType::Regular,
        ),
        club(
            "2",
            "Form Space",
            "Popular venue for electronic music events.",
            "Str. Horea 4, Cluj-Napoca",
            46.7710,
            23.5794,
            true,
            4.7,
            "23:00 - 06:00",
            &["Techno", "EDM", "Drum and Bass"],
            PartyType::Edm,
        ),
        club(
            "3",
            "Phi18",
            "Trendy rooftop club with amazing views of the city.",
            "Str. Piezisa 18, Cluj-Napoca",
            46.7639,
            23.5625,
            true,
            4.3,
            "21:00 - 04:00",
            &["R&B", "Hip Hop", "Reggaeton"],
            PartyType::Themed,
        ),
        club(
            "4",
            "After Eight",
            "One of the oldest and most popular clubs in Cluj.",
            "Str. Brassai Samuel 12, Cluj-Napoca",
            46.7702,
            23.5837,
            true,
            4.2,
            "22:00 - 05:00",
            &["Retro", "80s", "90s", "2000s"],
            PartyType::Students,
        ),
        club(
            "5",
            "Flying Circus",
            "Pub and club with live music and great atmosphere.",
            "Str. Cardinals Iuliu Hossu 2, Cluj-Napoca",
            46.7699,
            23.5876,
            false,
            4.4,
            "20:00 - 03:00",
            &["Rock", "Indie", "Alternative"],
            PartyType::LiveMusic,
        ),
        club(
            "6",
            "Gazette Cluj",
            "Contemporary club with a diverse music selection.",
            "Str. Iuliu Maniu 5, Cluj-Napoca",
            46.7692,
            23.5902,
            true,
            4.1,
            "22:00 - 05:00",
            &["Disco", "Funk", "Dance"],
            PartyType::Regular,
        ),
        club(
            "7",
            "Club Midi",
            "Famous for electronic music and international DJs.",
            "Str. Baritiu 26, Cluj-Napoca",
            46.7732,
            23.5863,
            true,
            4.8,
            "23:00 - 06:00",
            &["Techno", "House", "Minimal"],
            PartyType::Edm,
        ),
        club(
            "8",
            "Euphoria Lounge",
            "Modern club with stunning panoramic views of Cluj.",
            "Str. Piezisa 2, Cluj-Napoca",
            46.7642,
            23.5618,
            true,
            4.6,
            "22:00 - 06:00",
            &["House", "Electronic", "Pop"],
            PartyType::Regular,
        ),
        club(
            "9",
            "Piezisa Social Club",
            "Trendy bar and club with open terrace and great cocktails.",
            "Str. Piezisa 10, Cluj-Napoca",
            46.7637,
            23.5621,
            true,
            4.4,
            "20:00 - 04:00",
            &["Funk", "Soul", "Disco"],
            PartyType::Regular,
        ),
        club(
            "10",
            "Skyline Club",
            "Exclusive rooftop club with premium service and amazing views.",
            "Str. Piezisa 14, Cluj-Napoca",
            46.7635,
            23.5628,
            false,
            4.9,
            "21:00 - 05:00",
            &["Deep House", "Lounge", "Ambient"],
            PartyType::Themed,
        ),
        club(
            "11",
            "Vertigo Bar",
            "High-energy club popular with students and young professionals.",
            "Str. Piezisa 20, Cluj-Napoca",
            46.7631,
            23.5632,
            true,
            4.2,
            "22:30 - 05:30",
            &["Hip Hop", "Trap", "R&B"],
            PartyType::Students,
        ),
        club(
            "12",
            "Piezisa Live",
            "Intimate venue featuring live music performances every night.",
            "Str. Piezisa 23, Cluj-Napoca",
            46.7628,
            23.5635,
            false,
            4.7,
            "19:00 - 02:00",
            &["Jazz", "Blues", "Acoustic"],
            PartyType::LiveMusic,
        ),
        club(
            "13",
            "Techno Bunker",
            "Underground club dedicated to electronic music enthusiasts.",
            "Str. Piezisa 27, Cluj-Napoca",
            46.7626,
            23.5638,
            true,
            4.5,
            "23:00 - 07:00",
            &["Techno", "Minimal", "Industrial"],
            PartyType::Edm,
        ),
        club(
            "14",
            "Sunset Lounge",
            "Relaxed atmosphere with sunset views and quality music.",
            "Str. Piezisa 31, Cluj-Napoca",
            46.7622,
            23.5642,
            false,
            4.3,
            "18:00 - 02:00",
            &["Chill", "Lounge", "Acoustic"],
            PartyType::Regular,
        ),
        club(
            "15",
            "Janis Club",
            "Lively club offering a wide range of music and dance events.",
            "Str. Memorandumului 13, Cluj-Napoca",
            46.7695,
            23.5861,
            true,
            4.4,
            "20:00 - 04:00",
            &["Rock", "Pop", "Alternative"],
            PartyType::Regular,
        ),
        club(
            "16",
            "Booha Bar",
            "Cozy bar with great music and diverse cultural events.",
            "Str. Napoca 8, Cluj-Napoca",
            46.7689,
            23.5866,
            false,
            4.3,
            "18:00 - 02:00",
            &["Indie", "Folk", "Acoustic"],
            PartyType::LiveMusic,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size() {
        assert_eq!(seed_clubs().len(), 16);
    }

    #[test]
    fn test_seed_ids_unique() {
        let clubs = seed_clubs();
        let ids: HashSet<&str> = clubs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), clubs.len());
    }

    #[test]
    fn test_seed_ratings_in_range() {
        for club in seed_clubs() {
            assert!(
                (0.0..=5.0).contains(&club.rating),
                "{} has rating {}",
                club.name,
                club.rating
            );
        }
    }

    #[test]
    fn test_seed_has_high_rated_venues() {
        // The rating bonus needs venues on both sides of the 4.5 threshold
        let clubs = seed_clubs();
        assert!(clubs.iter().any(|c| c.rating >= 4.5));
        assert!(clubs.iter().any(|c| c.rating < 4.5));
    }
}
