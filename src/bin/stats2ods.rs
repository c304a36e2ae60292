//! Convert a periodic-statistics log into an OpenDocument spreadsheet.

use std::path::PathBuf;

use bugworld::cli;
use bugworld::{export, stats};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "stats2ods", about = "Convert a stats log to a spreadsheet")]
struct Cli {
    /// Plain-text statistics log
    stats: PathBuf,
    /// Spreadsheet file to write
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = cli::parse_or_exit();
    let rows = stats::read_stats(&cli.stats)?;
    export::write_ods(&cli.output, &rows)?;
    info!("{} rows written to {}", rows.len(), cli.output.display());
    Ok(())
}
