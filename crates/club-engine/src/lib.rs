//! Partymap Engine
//!
//! Club discovery back end: a seeded venue roster, a daily randomized
//! party-status update with change tracking, favorites, a mock ticket cart,
//! and catalog queries, persisted through a key-value store abstraction.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod dice;
pub mod favorites;
pub mod roster;
pub mod setup;
pub mod simulator;
pub mod storage;

pub use cart::TicketCart;
pub use catalog::{GenreGroup, PartyTypeGroup};
pub use config::{Config, ConfigError, PartyTuning, DEFAULT_TUNING_PATH};
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use favorites::FavoriteList;
pub use roster::ClubRoster;
pub use simulator::PartySimulator;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
