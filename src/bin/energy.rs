//! Print the total energy in the world: alive bugs, their code, and food.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use clap::Parser;

#[derive(Parser)]
#[command(name = "energy", about = "Total energy in the world")]
struct Cli {
    /// Simulation database
    database: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    println!("{}", store.total_energy()?);
    Ok(())
}
