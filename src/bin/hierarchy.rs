//! Print a bug's ancestors, nearest first, one id per line.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use clap::Parser;

#[derive(Parser)]
#[command(name = "hierarchy", about = "Walk a bug's ancestor chain")]
struct Cli {
    /// Simulation database
    database: PathBuf,
    /// Bug whose ancestry to walk
    bug_id: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    for ancestor in store.ancestors(cli.bug_id) {
        println!("{}", ancestor?);
    }
    Ok(())
}
