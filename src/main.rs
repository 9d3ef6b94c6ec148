//! USB Foot Pedal Driver CLI
//!
//! A command-line interface for polling USB HID foot pedals.

use clap::Parser;
use hidapi::HidApi;

// CLI definitions
mod cli;
use cli::{Cli, Commands};

// Command handlers (split from main.rs)
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            // Default: poll the built-in pedal
            commands::run::run(None, None)?;
        }
        Some(Commands::Run { vid, pid }) => {
            commands::run::run(vid, pid)?;
        }
        Some(Commands::Calibrate { vid, pid }) => {
            commands::calibrate::calibrate(&vid, &pid)?;
        }
        Some(Commands::List) => {
            let hidapi = HidApi::new()?;
            commands::utility::list(&hidapi)?;
        }
    }

    Ok(())
}
