//! Party Update Records
//!
//! Records one run of the daily party-status update: when it last happened
//! and which venues flipped. `LastRun` serializes as a plain string, either
//! a `YYYY-MM-DD` date or the sentinel `"never"`, matching the value the app
//! has always kept in key-value storage.
//!
//! # Example
//!
//! ```
//! use club_model::LastRun;
//!
//! let never: LastRun = "never".parse().unwrap();
//! assert_eq!(never, LastRun::Never);
//! assert_eq!("2026-08-08".parse::<LastRun>().unwrap().to_string(), "2026-08-08");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Storage date format for run markers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sentinel stored when the update has never run.
pub const NEVER: &str = "never";

/// The calendar date of the most recent update run, or "never".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LastRun {
    Never,
    On(NaiveDate),
}

impl LastRun {
    /// True when the marker names exactly the given calendar date.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        matches!(self, LastRun::On(d) if *d == date)
    }

    /// The underlying date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            LastRun::Never => None,
            LastRun::On(d) => Some(*d),
        }
    }
}

impl fmt::Display for LastRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastRun::Never => f.write_str(NEVER),
            LastRun::On(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

/// Error type for parsing a LastRun marker from a string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseLastRunError(pub String);

impl fmt::Display for ParseLastRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid run marker: '{}', expected 'never' or YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for ParseLastRunError {}

impl FromStr for LastRun {
    type Err = ParseLastRunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NEVER {
            return Ok(LastRun::Never);
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(LastRun::On)
            .map_err(|_| ParseLastRunError(s.to_string()))
    }
}

// LastRun serializes as a bare string, not an object
impl Serialize for LastRun {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LastRun {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of one party-status update run.
///
/// `changed_clubs` lists, in roster order, the display names of venues whose
/// `active_party` flag flipped during the run. A same-day repeat call yields
/// an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyUpdateRecord {
    pub last_updated: LastRun,
    pub changed_clubs: Vec<String>,
}

impl PartyUpdateRecord {
    /// A record for a roster that has never been updated.
    pub fn never() -> Self {
        Self {
            last_updated: LastRun::Never,
            changed_clubs: Vec::new(),
        }
    }

    /// A record for a completed run on `date`.
    pub fn on(date: NaiveDate, changed_clubs: Vec<String>) -> Self {
        Self {
            last_updated: LastRun::On(date),
            changed_clubs,
        }
    }

    /// True when the run flipped at least one venue.
    pub fn has_changes(&self) -> bool {
        !self.changed_clubs.is_empty()
    }

    /// One-line notification text for callers that surface update results.
    pub fn summary(&self) -> String {
        match self.changed_clubs.len() {
            0 => "No party changes today.".to_string(),
            1 => "1 club has updated its party status for today.".to_string(),
            n => format!("{} clubs have updated their party status for today.", n),
        }
    }
}
