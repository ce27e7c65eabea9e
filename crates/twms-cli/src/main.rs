//! Truck Weight Management System
//!
//! Registers trucks and their cargo, flags overloads against the weight
//! limit, and keeps the fleet in a flat data file.

mod cli;
mod commands;
mod menu;
mod output;
mod prompt;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
