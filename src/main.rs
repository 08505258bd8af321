//! Address Book demo - runs the sample contact scenario and prints the book.
//!
//! This binary is a worked example of the library API, not an interactive
//! shell. Output goes to stdout; logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so the configured level can apply
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();
    if config.demo_contacts {
        seed_sample_contacts(&mut book)?;
        info!(records = book.len(), "Sample contacts loaded");
    }

    println!("{}", book);

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")
            .context("editing John's first phone")?;
        println!("{}", john);

        if let Some(phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), phone);
        }
    }

    if book.delete("Jane").is_some() {
        info!("Deleted Jane");
    }
    println!("Jane present: {}", book.contains("Jane"));

    Ok(())
}

fn seed_sample_contacts(book: &mut AddressBook) -> Result<()> {
    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    Ok(())
}
