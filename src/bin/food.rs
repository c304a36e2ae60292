//! List the sizes of all food currently in the world, one per line.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use clap::Parser;

#[derive(Parser)]
#[command(name = "food", about = "List food sizes")]
struct Cli {
    /// Simulation database
    database: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    for size in store.food_sizes()? {
        println!("{}", size);
    }
    Ok(())
}
