//! Print the summed age of the currently alive population.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use clap::Parser;

#[derive(Parser)]
#[command(name = "age", about = "Total age of all alive bugs")]
struct Cli {
    /// Simulation database
    database: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    println!("{}", store.total_age()?);
    Ok(())
}
