//! Parser for the simulation's periodic statistics log.
//!
//! The log is free-form text where each line may carry any subset of five
//! labeled counters, e.g. `[12000] Bugs = 35 Food = 102 Energy = 5230`.
//! Each field is matched independently; absent fields stay `None`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Counters parsed from one log line.
///
/// A field that reads `= 0` in the log is `Some(0)`, which is distinct
/// from a field that is absent altogether.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsRow {
    pub bugs: Option<u64>,
    pub food: Option<u64>,
    pub energy: Option<u64>,
    pub mutations: Option<u64>,
    pub age: Option<u64>,
}

impl StatsRow {
    /// Fields in spreadsheet column order.
    pub fn fields(&self) -> [Option<u64>; 5] {
        [self.bugs, self.food, self.energy, self.mutations, self.age]
    }
}

/// Column headers, in the same order as [`StatsRow::fields`].
pub const FIELD_NAMES: [&str; 5] = ["Bugs", "Food", "Energy", "Mutations", "Age"];

/// Line parser with the five field patterns compiled once.
pub struct StatsParser {
    patterns: [Regex; 5],
}

impl StatsParser {
    pub fn new() -> Self {
        let patterns =
            FIELD_NAMES.map(|name| Regex::new(&format!("{} = ([0-9]+)", name)).unwrap());
        Self { patterns }
    }

    /// Extract whatever counters `line` carries.
    pub fn parse_line(&self, line: &str) -> StatsRow {
        let mut values = [None; 5];
        for (value, pattern) in values.iter_mut().zip(&self.patterns) {
            *value = pattern
                .captures(line)
                .and_then(|caps| caps[1].parse().ok());
        }
        let [bugs, food, energy, mutations, age] = values;
        StatsRow {
            bugs,
            food,
            energy,
            mutations,
            age,
        }
    }
}

impl Default for StatsParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole stats log, one [`StatsRow`] per line.
pub fn read_stats<P: AsRef<Path>>(path: P) -> Result<Vec<StatsRow>> {
    let parser = StatsParser::new();
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines() {
        rows.push(parser.parse_line(&line?));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_line_parses_every_field() {
        let parser = StatsParser::new();
        let row = parser
            .parse_line("[12000] Bugs = 35 Food = 102 Energy = 5230 Mutations = 7 Age = 480");
        assert_eq!(
            row,
            StatsRow {
                bugs: Some(35),
                food: Some(102),
                energy: Some(5230),
                mutations: Some(7),
                age: Some(480),
            }
        );
    }

    #[test]
    fn partial_line_leaves_missing_fields_none() {
        let parser = StatsParser::new();
        let row = parser.parse_line("Bugs = 5");
        assert_eq!(row.bugs, Some(5));
        assert_eq!(row.food, None);
        assert_eq!(row.energy, None);
        assert_eq!(row.mutations, None);
        assert_eq!(row.age, None);
    }

    #[test]
    fn zero_is_a_value_not_a_missing_field() {
        let parser = StatsParser::new();
        let row = parser.parse_line("Bugs = 0 Food = 3");
        assert_eq!(row.bugs, Some(0));
        assert_eq!(row.food, Some(3));
    }

    #[test]
    fn unrelated_line_parses_to_empty_row() {
        let parser = StatsParser::new();
        assert_eq!(parser.parse_line("simulation started"), StatsRow::default());
    }

    #[test]
    fn field_order_matches_headers() {
        let row = StatsRow {
            bugs: Some(1),
            food: Some(2),
            energy: Some(3),
            mutations: Some(4),
            age: Some(5),
        };
        assert_eq!(row.fields(), [Some(1), Some(2), Some(3), Some(4), Some(5)]);
    }
}
