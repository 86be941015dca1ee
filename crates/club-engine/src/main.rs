//! Partymap CLI
//!
//! Runs the daily party-status update over the persisted roster and prints
//! what changed and which venues are active tonight.

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use club_engine::{catalog, ClubRoster, Config, JsonFileStore, PartySimulator, SeededDice};

/// Command line arguments for the daily update
#[derive(Parser, Debug)]
#[command(name = "partymap")]
#[command(about = "Club discovery engine with daily party-status updates")]
struct Args {
    /// Random seed for reproducibility (omit to seed from entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Key-value store file
    #[arg(long, default_value = "data/partymap.json")]
    data_file: PathBuf,

    /// Tuning file with the probability model
    #[arg(long, default_value = club_engine::DEFAULT_TUNING_PATH)]
    tuning: PathBuf,

    /// Calendar date override (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Recompute even if today's update already ran
    #[arg(long)]
    force: bool,

    /// Print the full roster grouped by party type
    #[arg(long)]
    show_roster: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());

    println!("Partymap Party Updates");
    println!("======================");
    println!("Date: {}", today);
    match args.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: entropy"),
    }
    println!("Store: {}", args.data_file.display());
    println!();

    let config = Config::load(&args.tuning).unwrap_or_else(|e| {
        eprintln!("Warning: could not load {}: {}. Using defaults.", args.tuning.display(), e);
        Config::default()
    });

    let mut store = match JsonFileStore::open(&args.data_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: could not open store {}: {}", args.data_file.display(), e);
            process::exit(1);
        }
    };

    let roster = ClubRoster::standard();

    let record = {
        let dice = match args.seed {
            Some(seed) => SeededDice::from_seed(seed),
            None => SeededDice::from_entropy(),
        };
        let mut simulator = PartySimulator::new(&mut store, roster.clone(), config.party, dice);
        let result = if args.force {
            simulator.run(today)
        } else {
            simulator.check_and_run(today)
        };
        match result {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error: party update failed: {}", e);
                process::exit(1);
            }
        }
    };

    println!("{}", record.summary());
    for name in &record.changed_clubs {
        println!("  * {}", name);
    }
    println!("Last updated: {}", record.last_updated);
    println!();

    let clubs = roster.get_all(&store);
    let active = catalog::active_party_clubs(&clubs);
    println!("Active parties tonight ({} of {}):", active.len(), clubs.len());
    for club in &active {
        println!("  {} ({:.1}) - {}", club.name, club.rating, club.opening_hours);
    }

    if args.show_roster {
        println!();
        println!("Full roster by party type:");
        for group in catalog::by_party_type(&clubs) {
            println!("  {}:", group.party_type);
            for club in &group.clubs {
                let status = if club.active_party { "party" } else { "quiet" };
                println!("    {} [{}]", club.name, status);
            }
        }
    }
}
