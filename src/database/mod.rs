//! Read-only access to a simulation database.
//!
//! All SQL lives here. The schema is owned by the simulation that produced
//! the database; this module only ever reads it. Table and column names
//! follow the upstream schema: `AliveBug` and `DeadBug` are keyed by
//! `bug_id`, `Bug` by `id`.

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::error::{Error, Result};
use crate::lineage::{Ancestors, MutationRecord};

/// Handle to a simulation database, opened read-only for the process
/// lifetime.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database at `path` without write access.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("opened database {}", path.as_ref().display());
        Ok(Self { conn })
    }

    /// Father of `bug_id`, or `None` for a root bug.
    ///
    /// An unknown `bug_id` also yields `None`: for the ancestor walk a bug
    /// that does not exist has no parent.
    pub fn father(&self, bug_id: i64) -> Result<Option<i64>> {
        let row: Option<Option<i64>> = self
            .conn
            .query_row(
                "SELECT father_id FROM Bug WHERE id = ?1",
                [bug_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(row.flatten())
    }

    /// Birth time of `bug_id`: `AliveBug.birth` if currently alive, else
    /// `DeadBug.birth`.
    ///
    /// Returns `Ok(None)` for a bug that died as an egg (`DeadBug.birth` is
    /// NULL). A bug present in neither table has no birth record at all,
    /// which is a data integrity violation and fails with
    /// [`Error::NoBirthRecord`].
    pub fn birth(&self, bug_id: i64) -> Result<Option<i64>> {
        let row: Option<Option<i64>> = self
            .conn
            .query_row(
                "SELECT birth FROM AliveBug WHERE bug_id = ?1 \
                 UNION SELECT birth FROM DeadBug WHERE bug_id = ?1",
                [bug_id],
                |row| row.get(0),
            )
            .optional()?;
        row.ok_or(Error::NoBirthRecord(bug_id))
    }

    /// Ids of all currently alive bugs.
    pub fn alive_bugs(&self) -> Result<Vec<i64>> {
        self.column("SELECT bug_id FROM AliveBug ORDER BY bug_id", [])
    }

    /// Sizes of all food currently in the world.
    pub fn food_sizes(&self) -> Result<Vec<i64>> {
        self.column("SELECT size FROM Food ORDER BY id", [])
    }

    /// Direct children of `bug_id`.
    pub fn sons(&self, bug_id: i64) -> Result<Vec<i64>> {
        self.column(
            "SELECT id FROM Bug WHERE father_id = ?1 ORDER BY id",
            [bug_id],
        )
    }

    /// Summed age of the current population: for every alive bug, the
    /// latest environment time minus its birth. Zero if nothing is alive.
    pub fn total_age(&self) -> Result<i64> {
        self.sum(
            "SELECT SUM((SELECT MAX(time) FROM Environment) - birth) \
             FROM AliveBug",
        )
    }

    /// Total energy in the world: alive-bug energy, plus the code size of
    /// alive bugs' genomes, plus the food lying around. Each empty
    /// aggregate counts as zero.
    pub fn total_energy(&self) -> Result<i64> {
        let bugs = self.sum("SELECT SUM(energy) FROM AliveBug")?;
        let code = self.sum(
            "SELECT SUM(size) FROM Code \
             WHERE bug_id IN (SELECT bug_id FROM AliveBug)",
        )?;
        let food = self.sum("SELECT SUM(size) FROM Food")?;
        debug!("energy: bugs={} code={} food={}", bugs, code, food);
        Ok(bugs + code + food)
    }

    /// Mutations recorded for `bug_id`, chronologically ordered.
    ///
    /// With `total` set, every mutation is returned. Otherwise only the
    /// formative ones are kept: mutations with `time` strictly before the
    /// bug's own birth. A bug that died as an egg never hatched, so its
    /// formative list is empty.
    pub fn mutations(&self, bug_id: i64, total: bool) -> Result<Vec<MutationRecord>> {
        let mut sql = String::from(
            "SELECT time, position, original, mutated FROM Mutation \
             WHERE bug_id = ?1",
        );
        let birth = if total {
            None
        } else {
            match self.birth(bug_id)? {
                Some(birth) => Some(birth),
                None => return Ok(Vec::new()),
            }
        };
        if birth.is_some() {
            sql.push_str(" AND time < ?2");
        }
        sql.push_str(" ORDER BY time, id");

        let mut stmt = self.conn.prepare(&sql)?;
        let map = |row: &rusqlite::Row<'_>| {
            Ok(MutationRecord {
                time: row.get(0)?,
                position: row.get(1)?,
                original: row.get(2)?,
                mutated: row.get(3)?,
            })
        };
        let records = match birth {
            Some(birth) => stmt
                .query_map(rusqlite::params![bug_id, birth], map)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            None => stmt
                .query_map([bug_id], map)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
        };
        Ok(records)
    }

    /// Lazy walk over the ancestors of `bug_id`, nearest first.
    pub fn ancestors(&self, bug_id: i64) -> Ancestors<'_> {
        Ancestors::new(self, bug_id)
    }

    /// Run a single-column query and collect the values.
    fn column<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| row.get(0))?;
        let values = rows.collect::<rusqlite::Result<Vec<i64>>>()?;
        Ok(values)
    }

    /// Run a SUM query, treating an empty aggregate (NULL) as zero.
    fn sum(&self, sql: &str) -> Result<i64> {
        let value: Option<i64> = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(value.unwrap_or(0))
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Self {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(testutil::SCHEMA).unwrap();
        Self { conn }
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn populated_store() -> Store {
        let store = Store::open_in_memory();
        store
            .conn()
            .execute_batch(
                "INSERT INTO Environment (id, time) VALUES (1, 50), (2, 100);
                 INSERT INTO Bug (id, father_id) VALUES
                     (1, NULL), (2, 1), (3, 2), (4, 1);
                 INSERT INTO AliveBug (bug_id, birth, energy) VALUES
                     (2, 20, 30), (3, 60, 45);
                 INSERT INTO DeadBug (bug_id, birth, death) VALUES
                     (1, 0, 70), (4, NULL, 25);
                 INSERT INTO Code (bug_id, size) VALUES
                     (1, 16), (2, 24), (3, 32), (4, 8);
                 INSERT INTO Food (id, size) VALUES (1, 12), (2, 7);",
            )
            .unwrap();
        store
    }

    #[test]
    fn father_follows_parent_pointers() {
        let store = populated_store();
        assert_eq!(store.father(3).unwrap(), Some(2));
        assert_eq!(store.father(2).unwrap(), Some(1));
        assert_eq!(store.father(1).unwrap(), None);
    }

    #[test]
    fn father_of_unknown_bug_is_none() {
        let store = populated_store();
        assert_eq!(store.father(999).unwrap(), None);
    }

    #[test]
    fn birth_prefers_alive_then_dead() {
        let store = populated_store();
        assert_eq!(store.birth(2).unwrap(), Some(20));
        assert_eq!(store.birth(1).unwrap(), Some(0));
        // Died as an egg: record exists, birth is NULL.
        assert_eq!(store.birth(4).unwrap(), None);
    }

    #[test]
    fn birth_of_unrecorded_bug_is_fatal() {
        let store = populated_store();
        store
            .conn()
            .execute("INSERT INTO Bug (id, father_id) VALUES (5, 1)", [])
            .unwrap();
        assert!(matches!(store.birth(5), Err(Error::NoBirthRecord(5))));
    }

    #[test]
    fn alive_bugs_lists_current_population() {
        let store = populated_store();
        assert_eq!(store.alive_bugs().unwrap(), vec![2, 3]);
    }

    #[test]
    fn sons_lists_direct_children_only() {
        let store = populated_store();
        assert_eq!(store.sons(1).unwrap(), vec![2, 4]);
        assert_eq!(store.sons(3).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn food_sizes_lists_every_piece() {
        let store = populated_store();
        assert_eq!(store.food_sizes().unwrap(), vec![12, 7]);
    }

    #[test]
    fn total_age_sums_against_latest_environment_time() {
        let store = populated_store();
        // Latest time is 100; alive bugs born at 20 and 60.
        assert_eq!(store.total_age().unwrap(), (100 - 20) + (100 - 60));
    }

    #[test]
    fn total_energy_sums_bugs_code_and_food() {
        let store = populated_store();
        // Alive energy 30+45, alive code 24+32, food 12+7.
        assert_eq!(store.total_energy().unwrap(), 75 + 56 + 19);
    }

    #[test]
    fn aggregates_are_zero_on_empty_database() {
        let store = Store::open_in_memory();
        assert_eq!(store.total_age().unwrap(), 0);
        assert_eq!(store.total_energy().unwrap(), 0);
        assert!(store.alive_bugs().unwrap().is_empty());
        assert!(store.food_sizes().unwrap().is_empty());
    }

    #[test]
    fn mutations_filtered_by_birth_unless_total() {
        let store = populated_store();
        // Bug 2 was born at 20; one formative mutation, one later.
        store
            .conn()
            .execute_batch(
                "INSERT INTO Mutation (id, bug_id, time, position, original, mutated)
                 VALUES (1, 2, 10, 3, 17, 42),
                        (2, 2, 30, 5, NULL, 99);",
            )
            .unwrap();

        let formative = store.mutations(2, false).unwrap();
        assert_eq!(formative.len(), 1);
        assert_eq!(formative[0].time, 10);

        let total = store.mutations(2, true).unwrap();
        assert_eq!(total.len(), 2);
        assert_eq!(total[0].time, 10);
        assert_eq!(total[1].time, 30);
    }

    #[test]
    fn egg_death_has_no_formative_mutations() {
        let store = populated_store();
        store
            .conn()
            .execute(
                "INSERT INTO Mutation (id, bug_id, time, position, original, mutated)
                 VALUES (1, 4, 5, 0, 1, 2)",
                [],
            )
            .unwrap();
        // Bug 4 died as an egg: no birth, nothing is formative.
        assert!(store.mutations(4, false).unwrap().is_empty());
        assert_eq!(store.mutations(4, true).unwrap().len(), 1);
    }
}
