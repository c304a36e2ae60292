//! List the ids of all currently alive bugs, one per line.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use clap::Parser;

#[derive(Parser)]
#[command(name = "alive_bugs", about = "List alive bug ids")]
struct Cli {
    /// Simulation database
    database: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    for bug_id in store.alive_bugs()? {
        println!("{}", bug_id);
    }
    Ok(())
}
