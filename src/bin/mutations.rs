//! Print the mutation history of a bug's whole lineage.
//!
//! The bug's own mutations come first, then each ancestor's formative
//! mutations, rootward.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use bugworld::lineage;
use clap::Parser;

#[derive(Parser)]
#[command(name = "mutations", about = "Mutation history of a bug's lineage")]
struct Cli {
    /// Simulation database
    database: PathBuf,
    /// Bug whose history to report
    bug_id: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    for mutation in lineage::mutation_history(&store, cli.bug_id)? {
        println!("{}", mutation);
    }
    Ok(())
}
