//! Address Book - Main entry point
//!
//! Reads a JSON array of contacts from stdin and prints the upcoming
//! birthdays as JSON to stdout. Logs go to stderr.
//!
//! Usage: `address-book [--days N] < contacts.json`

use address_book::{AddressBook, Config, Contact};
use anyhow::{bail, Context, Result};
use std::io::{self, Read};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Window from `--days N`, if given.
fn parse_days_arg(args: &[String]) -> Result<Option<u32>> {
    match args {
        [] => Ok(None),
        [flag, value] if flag == "--days" => {
            let days = value
                .parse::<u32>()
                .with_context(|| format!("--days expects a non-negative number, got: {}", value))?;
            Ok(Some(days))
        }
        _ => bail!("Usage: address-book [--days N] < contacts.json"),
    }
}

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let window_days = parse_days_arg(&args)?.unwrap_or(config.window_days);

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read contacts from stdin")?;

    let contacts: Vec<Contact> = match serde_json::from_str(&input) {
        Ok(contacts) => contacts,
        Err(e) => {
            error!("Invalid contacts input: {}", e);
            return Err(e.into());
        }
    };

    let book: AddressBook = contacts.into_iter().collect();
    info!("Loaded {} contacts", book.len());
    info!("\n{}", book);

    let upcoming = book.upcoming_birthdays_today(window_days);
    println!("{}", serde_json::to_string_pretty(&upcoming)?);

    Ok(())
}
