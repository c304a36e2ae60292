//! Shared argument handling for the report binaries.

use clap::Parser;

/// Parse arguments or exit.
///
/// The reporters keep the original scripts' contract: a bad invocation
/// prints usage to stderr and exits 1. Clap's informational exits
/// (`--help`, `--version`) still go to stdout with status 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
