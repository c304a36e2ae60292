//! # bugworld
//!
//! Read-only reporting tools for bug-ecosystem simulation databases.
//!
//! The simulation itself runs elsewhere and leaves behind a SQLite
//! database of bugs, their lineage, their genome mutations, and the food
//! and energy in the world, plus a plain-text log of periodic statistics.
//! This crate answers questions about those artifacts: who is alive, how
//! old the population is, where a bug's genome came from.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use bugworld::database::Store;
//! use bugworld::lineage;
//!
//! # fn main() -> bugworld::error::Result<()> {
//! let store = Store::open("simulation.db")?;
//!
//! // Who descends from whom?
//! for ancestor in store.ancestors(42) {
//!     println!("{}", ancestor?);
//! }
//!
//! // How did bug 42's genome come to be?
//! for mutation in lineage::mutation_history(&store, 42)? {
//!     println!("{}", mutation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Each report is also available as a standalone binary (`age`,
//! `alive_bugs`, `energy`, `food`, `hierarchy`, `mutations`, `sons`,
//! `stats2ods`); see `src/bin/`.

pub mod cli;
pub mod database;
pub mod error;
pub mod export;
pub mod lineage;
pub mod stats;

pub use database::Store;
pub use error::{Error, Result};
pub use lineage::MutationRecord;
