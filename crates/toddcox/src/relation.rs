//! Relation tables, which deduce new coset table entries from relators.
//!
//! Each relator gets a table with one row per coset. Tracing the relator from
//! that coset must lead back to the same coset, so the row starts and ends with
//! the coset and the entries in between are the cosets passed along the way.
//!
//! Only the two cosets bordering the gap of unknown entries are stored, along
//! with their columns. Knowledge from the coset table shrinks the gap from both
//! ends. Once only one transition is missing,
//! its target is known and gets written back into the coset table.

use std::fmt;

use crate::alphabet::Word;
use crate::error::EnumerationResult;
use crate::table::CosetTable;
use crate::ti::{CosetId, IndexOverflow, PerCoset, TypedIndex};

/// Row in a relation table, which traces a relator starting and ending at one
/// coset.
///
/// The row stores only the two sides of its gap. Column `left` holds
/// `left_coset` and column `right` holds `right_target`; the columns strictly
/// between them are unknown.
///
/// When displayed, the gap is shown as `--`. Columns that were already passed
/// on the way to the gap are known but not stored, and are shown as `..`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// Column of the coset on the left side of the gap.
    left: usize,
    /// Column of the coset on the right side of the gap.
    right: usize,
    /// Coset reached by following the relator forward from the start of the
    /// row up to column `left`.
    left_coset: CosetId,
    /// Coset that must be reached at column `right` so that following the rest
    /// of the relator returns to the start of the row.
    right_target: CosetId,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut row = vec!["..".to_string(); self.right + 1];
        for cell in &mut row[self.left + 1..self.right] {
            *cell = "--".to_string();
        }
        row[self.left] = self.left_coset.to_string();
        row[self.right] = self.right_target.to_string();
        write!(f, "{}", row.join(", "))
    }
}

impl Row {
    /// Constructs a row that traces a relator of length `relator_len` from
    /// `coset`.
    pub(crate) fn new(coset: CosetId, relator_len: usize) -> Self {
        Row {
            left: 0,
            right: relator_len,
            left_coset: coset,
            right_target: coset,
        }
    }

    /// Returns the columns on either side of the gap.
    pub fn cursors(&self) -> (usize, usize) {
        (self.left, self.right)
    }
    /// Returns the cosets on either side of the gap.
    pub fn gap_cosets(&self) -> (CosetId, CosetId) {
        (self.left_coset, self.right_target)
    }

    /// Returns whether the gap has shrunk to a single transition, whose target
    /// is then known.
    pub fn is_complete(&self) -> bool {
        self.left + 1 == self.right
    }

    /// Shrinks the gap as much as possible using known transitions, and writes
    /// the last missing transition into the table once only one remains.
    ///
    /// Returns whether the row or the table changed.
    ///
    /// `relator` must be the nonempty word this row was constructed for.
    pub(crate) fn learn(
        &mut self,
        relator: &Word,
        table: &mut CosetTable,
    ) -> EnumerationResult<bool> {
        let mut updated = false;

        while !self.is_complete() {
            let Some(next) = table.get(self.left_coset, relator.get(self.left)) else {
                break;
            };
            self.left += 1;
            self.left_coset = next;
            updated = true;
        }

        while !self.is_complete() {
            let Some(prev) = table.rget(relator.get(self.right - 1), self.right_target) else {
                break;
            };
            self.right -= 1;
            self.right_target = prev;
            updated = true;
        }

        if self.is_complete() {
            let generator = relator.get(self.left);
            if table.set(self.left_coset, generator, self.right_target)? {
                log::trace!(
                    "deduced {} * {generator} = {}",
                    self.left_coset,
                    self.right_target,
                );
                updated = true;
            }
        }

        Ok(updated)
    }
}

/// Relation table for a single relator, with one row per coset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    relator: Word,
    rows: PerCoset<Row>,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Relation {:?} {{", self.relator.0)?;
        for (coset, row) in self.rows.iter() {
            writeln!(f, "    {coset}: {row}")?;
        }
        write!(f, "}}")
    }
}

impl Relation {
    /// Constructs a relation table with a single row for the base coset.
    ///
    /// Returns `None` if the relator is empty.
    pub fn new(relator: Word) -> Option<Self> {
        if relator.is_empty() {
            return None;
        }
        let rows = std::iter::once(Row::new(CosetId::BASE, relator.len())).collect();
        Some(Relation { relator, rows })
    }

    /// Returns the relator.
    pub fn relator(&self) -> &Word {
        &self.relator
    }
    /// Returns the rows, indexed by the coset that each one starts from.
    pub fn rows(&self) -> &PerCoset<Row> {
        &self.rows
    }
    /// Returns the number of rows, which is the number of cosets known to this
    /// relation.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// Returns whether there are no rows. This is never true.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Adds a row for the next coset.
    pub fn add_row(&mut self) -> Result<CosetId, IndexOverflow> {
        let coset = CosetId::try_from_index(self.rows.len())?;
        self.rows.push(Row::new(coset, self.relator.len()))
    }

    /// Fills in every row as much as possible. Facts learned by one row are
    /// visible to the rows after it.
    ///
    /// Returns whether any row or the table changed.
    pub fn apply(&mut self, table: &mut CosetTable) -> EnumerationResult<bool> {
        let mut updated = false;
        for row in self.rows.iter_values_mut() {
            updated |= row.learn(&self.relator, table)?;
        }
        Ok(updated)
    }

    /// Returns whether every row is complete.
    pub fn is_complete(&self) -> bool {
        self.rows.iter_values().all(Row::is_complete)
    }
}
