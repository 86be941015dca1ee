//! Party Status Simulation
//!
//! Once per calendar day the simulator re-rolls which venues have an active
//! party and reports which ones flipped. There is no real event feed behind
//! it; the "AI" the app advertises is this probability model:
//!
//! - each venue is recomputed only when a first draw lands below the
//!   recompute chance (0.3), so roughly 70% of the roster keeps yesterday's
//!   status on any given run;
//! - a recomputed venue hosts a party with probability 0.3, +0.3 on a party
//!   night, +0.3 when rated 4.5 or higher.
//!
//! The mutated roster is persisted before the update record. If the record
//! write fails the last-run marker stays stale and the next call the same
//! day runs again; re-rolling an already-mutated roster is accepted, there
//! is no rollback.

use chrono::{Datelike, NaiveDate, Weekday};
use club_model::PartyUpdateRecord;

use crate::config::PartyTuning;
use crate::dice::Dice;
use crate::roster::ClubRoster;
use crate::storage::{KeyValueStore, StorageError, UPDATE_KEY};

/// Nights that earn the weekend bonus: Friday, Saturday and Sunday.
pub fn is_party_night(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// Daily party-status simulator over a persisted roster.
///
/// The store, roster and draw source are injected so callers decide where
/// state lives and tests control every draw.
pub struct PartySimulator<'a, D: Dice> {
    store: &'a mut dyn KeyValueStore,
    roster: ClubRoster,
    tuning: PartyTuning,
    dice: D,
}

impl<'a, D: Dice> PartySimulator<'a, D> {
    pub fn new(
        store: &'a mut dyn KeyValueStore,
        roster: ClubRoster,
        tuning: PartyTuning,
        dice: D,
    ) -> Self {
        Self {
            store,
            roster,
            tuning,
            dice,
        }
    }

    /// The persisted record of the most recent run, if readable.
    pub fn last_record(&self) -> Option<PartyUpdateRecord> {
        let raw = match self.store.get(UPDATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "update record read failed, treating as never run");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "stored update record unparseable, treating as never run");
                None
            }
        }
    }

    /// Runs the daily update at most once per calendar day.
    ///
    /// When the persisted record already names `today`, nothing is touched
    /// and the returned record carries the persisted date with an empty
    /// change list. Otherwise this is `run(today)`.
    pub fn check_and_run(&mut self, today: NaiveDate) -> Result<PartyUpdateRecord, StorageError> {
        if let Some(record) = self.last_record() {
            if record.last_updated.is_on(today) {
                return Ok(PartyUpdateRecord {
                    last_updated: record.last_updated,
                    changed_clubs: Vec::new(),
                });
            }
        }
        self.run(today)
    }

    /// Unconditionally recomputes party statuses for `today`.
    ///
    /// Mutates the roster in place, persists it, then persists the update
    /// record naming `today` and the flipped venues in roster order.
    pub fn run(&mut self, today: NaiveDate) -> Result<PartyUpdateRecord, StorageError> {
        let mut clubs = self.roster.get_all(&*self.store);
        let party_night = is_party_night(today.weekday());
        let mut changed = Vec::new();

        for club in &mut clubs {
            if self.dice.roll() >= self.tuning.recompute_chance {
                continue;
            }

            let mut p = self.tuning.base_probability;
            if party_night {
                p += self.tuning.weekend_bonus;
            }
            if club.rating >= self.tuning.high_rating_threshold {
                p += self.tuning.high_rating_bonus;
            }

            let active = self.dice.roll() < p;
            if active != club.active_party {
                changed.push(club.name.clone());
            }
            club.active_party = active;
        }

        // Roster first: a failed record write must leave the marker stale so
        // the same-day retry reruns over the persisted roster.
        self.roster.replace_all(self.store, &clubs)?;

        let record = PartyUpdateRecord::on(today, changed);
        let encoded = serde_json::to_string(&record)?;
        self.store.set(UPDATE_KEY, &encoded)?;

        tracing::info!(
            date = %today,
            changed = record.changed_clubs.len(),
            party_night,
            "party update complete"
        );
        Ok(record)
    }
}
