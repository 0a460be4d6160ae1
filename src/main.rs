//! Command-line entry point: flag parsing and session wiring.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use antenna::{
    AntennaError, DEFAULT_PORT, SerialTransport, Session, SessionConfig, SessionOutcome, hex_dump,
};

const NOTES: &str = "Notes:
    Write command is as follows: antenna -w -c \"value to be written\"
    Read command is as follows: antenna -r";

/// Command-line controller for a UHF RFID reader on a serial link.
#[derive(Debug, Parser)]
#[command(name = "antenna", version, about, after_help = NOTES)]
struct Cli {
    /// Read command
    #[arg(short, long)]
    read: bool,

    /// Write command
    #[arg(short, long)]
    write: bool,

    /// Content written to tag if write option activated
    #[arg(short, long)]
    content: Option<String>,

    /// Inventory command
    #[arg(short, long)]
    inventory: bool,

    /// Inventory RSSI command
    #[arg(short = 'n', long)]
    inventory_rssi: bool,

    /// Serial device the reader is attached to
    #[arg(short, long, default_value = DEFAULT_PORT)]
    port: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !(cli.read || cli.write || cli.inventory || cli.inventory_rssi) {
        eprintln!("No command given, exiting program.");
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let config = SessionConfig::from_flags(
        cli.read,
        cli.write,
        cli.inventory,
        cli.inventory_rssi,
        cli.content,
    )?;

    let transport = SerialTransport::open(&cli.port).map_err(|e| AntennaError::TransportOpen {
        path: cli.port.clone(),
        detail: e.to_string(),
    })?;

    let mut session = Session::new(transport);
    match session.run(&config, |chunk| println!("{}", hex_dump(chunk)))? {
        SessionOutcome::Displayed => {}
        SessionOutcome::WriteAcked(acked) => {
            println!("{}", if acked { "True" } else { "False" });
        }
    }

    Ok(())
}
