//! List a bug's direct children, one id per line.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::database::Store;
use clap::Parser;

#[derive(Parser)]
#[command(name = "sons", about = "List a bug's direct children")]
struct Cli {
    /// Simulation database
    database: PathBuf,
    /// Bug whose children to list
    bug_id: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let store = Store::open(&cli.database)?;
    for son in store.sons(cli.bug_id)? {
        println!("{}", son);
    }
    Ok(())
}
