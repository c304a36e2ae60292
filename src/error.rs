//! Error types shared by every reporter.

use thiserror::Error;

/// Errors raised while reporting on a simulation database.
#[derive(Debug, Error)]
pub enum Error {
    /// A bug exists in `Bug` but in neither `AliveBug` nor `DeadBug`.
    ///
    /// Every bug must have a birth record; a missing one is a data
    /// integrity violation in the database, not a recoverable condition.
    #[error("bug {0} has no birth record in AliveBug or DeadBug")]
    NoBirthRecord(i64),

    /// Any failure from the underlying SQLite store.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// File I/O failure (stats log, spreadsheet output).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// XML emission failure while writing the spreadsheet.
    #[error("spreadsheet write error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
