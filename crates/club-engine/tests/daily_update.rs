//! End-to-end daily update over a file-backed store.
//!
//! Exercises the full pipeline the way the app drives it: open the store,
//! run the daily check, reopen and verify what survived on disk.

use chrono::NaiveDate;
use club_engine::storage::{KeyValueStore, CLUBS_KEY, UPDATE_KEY};
use club_engine::{ClubRoster, JsonFileStore, PartySimulator, PartyTuning, SeededDice};
use club_model::{Club, LastRun, PartyUpdateRecord};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_first_run_persists_roster_and_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partymap.json");
    let today = date(2025, 3, 1);

    let mut store = JsonFileStore::open(&path).unwrap();
    let roster = ClubRoster::standard();
    let record = {
        let dice = SeededDice::from_seed(42);
        let mut sim = PartySimulator::new(&mut store, roster.clone(), PartyTuning::default(), dice);
        sim.check_and_run(today).unwrap()
    };
    assert_eq!(record.last_updated, LastRun::On(today));

    // Reopen from disk: both keys present and parseable
    let reopened = JsonFileStore::open(&path).unwrap();
    let roster_json = reopened.get(CLUBS_KEY).unwrap().expect("roster persisted");
    let clubs: Vec<Club> = serde_json::from_str(&roster_json).unwrap();
    assert_eq!(clubs.len(), roster.seed().len());

    let record_json = reopened.get(UPDATE_KEY).unwrap().expect("record persisted");
    let persisted: PartyUpdateRecord = serde_json::from_str(&record_json).unwrap();
    assert_eq!(persisted, record);
    assert!(record_json.contains("lastUpdated"));
}

#[test]
fn test_roster_roundtrips_field_for_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partymap.json");
    let roster = ClubRoster::standard();

    let written = {
        let mut store = JsonFileStore::open(&path).unwrap();
        let dice = SeededDice::from_seed(7);
        let mut sim = PartySimulator::new(&mut store, roster.clone(), PartyTuning::default(), dice);
        sim.run(date(2025, 3, 1)).unwrap();
        roster.get_all(&store)
    };

    let store = JsonFileStore::open(&path).unwrap();
    let reloaded = roster.get_all(&store);
    assert_eq!(reloaded, written);
}

#[test]
fn test_same_day_call_is_a_no_op_across_processes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partymap.json");
    let today = date(2025, 3, 1);
    let roster = ClubRoster::standard();

    // First process runs the update
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        let dice = SeededDice::from_seed(42);
        let mut sim = PartySimulator::new(&mut store, roster.clone(), PartyTuning::default(), dice);
        sim.check_and_run(today).unwrap();
    }
    let roster_json_before = JsonFileStore::open(&path)
        .unwrap()
        .get(CLUBS_KEY)
        .unwrap()
        .unwrap();

    // Second process the same day changes nothing, any seed
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        let dice = SeededDice::from_seed(999);
        let mut sim = PartySimulator::new(&mut store, roster.clone(), PartyTuning::default(), dice);
        let record = sim.check_and_run(today).unwrap();
        assert!(record.changed_clubs.is_empty());
        assert_eq!(record.last_updated, LastRun::On(today));
    }
    let roster_json_after = JsonFileStore::open(&path)
        .unwrap()
        .get(CLUBS_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(roster_json_before, roster_json_after);
}

#[test]
fn test_next_day_runs_again() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partymap.json");
    let roster = ClubRoster::standard();

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        let dice = SeededDice::from_seed(42);
        let mut sim = PartySimulator::new(&mut store, roster.clone(), PartyTuning::default(), dice);
        sim.check_and_run(date(2025, 3, 1)).unwrap();
    }
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        let dice = SeededDice::from_seed(42);
        let mut sim = PartySimulator::new(&mut store, roster, PartyTuning::default(), dice);
        let record = sim.check_and_run(date(2025, 3, 2)).unwrap();
        assert_eq!(record.last_updated, LastRun::On(date(2025, 3, 2)));
    }
}
