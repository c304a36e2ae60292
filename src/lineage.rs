//! Ancestry walks and mutation-history reporting.
//!
//! This is the core of the crate: given a bug, walk its `father_id` chain
//! to the root and collect the genome mutations that formed each step of
//! the lineage.

use std::collections::HashSet;
use std::fmt;

use log::warn;

use crate::database::Store;
use crate::error::Result;

/// One genome mutation, as recorded by the simulation.
///
/// `original` is NULL for an insertion, `mutated` is NULL for a deletion;
/// the simulation guarantees they are never both NULL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationRecord {
    /// Simulation time the mutation happened.
    pub time: i64,
    /// Word offset into the genome.
    pub position: i64,
    /// Value before the mutation, if any.
    pub original: Option<i64>,
    /// Value after the mutation, if any.
    pub mutated: Option<i64>,
}

impl fmt::Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {}({}): ", self.position, self.time)?;
        match self.original {
            Some(original) => write!(f, "0x{:08x}", original as u32)?,
            None => f.write_str("NULL")?,
        }
        f.write_str(" -> ")?;
        match self.mutated {
            Some(mutated) => write!(f, "0x{:08x}", mutated as u32),
            None => f.write_str("NULL"),
        }
    }
}

/// Lazy walk over the ancestors of a bug, nearest first.
///
/// The sequence is finite and consumed once; it ends at a root bug (NULL
/// `father_id`) or at an id with no `Bug` row at all. Database errors are
/// yielded in place, after which the walk stops.
pub struct Ancestors<'a> {
    store: &'a Store,
    current: i64,
    seen: HashSet<i64>,
    done: bool,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(store: &'a Store, bug_id: i64) -> Self {
        let mut seen = HashSet::new();
        seen.insert(bug_id);
        Self {
            store,
            current: bug_id,
            seen,
            done: false,
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.store.father(self.current) {
            Ok(Some(father)) => {
                // The upstream invariant says the chain is acyclic; a
                // repeated id means a corrupt database, so stop there
                // instead of walking forever.
                if !self.seen.insert(father) {
                    warn!("cycle in father chain at bug {}", father);
                    self.done = true;
                    return None;
                }
                self.current = father;
                Some(Ok(father))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Full mutation history of a bug's lineage.
///
/// The bug's own mutations come first, all of them regardless of its birth
/// time. Then, walking rootward, each ancestor contributes only its
/// formative mutations: the ones applied before that ancestor was born,
/// which are the ones the starting bug could have inherited.
pub fn mutation_history(store: &Store, bug_id: i64) -> Result<Vec<MutationRecord>> {
    let mut records = store.mutations(bug_id, true)?;
    for ancestor in store.ancestors(bug_id) {
        records.extend(store.mutations(ancestor?, false)?);
    }
    Ok(records)
}
