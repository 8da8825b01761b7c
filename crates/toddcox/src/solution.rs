//! Result of coset enumeration.

use std::collections::VecDeque;
use std::fmt;

use itertools::Itertools;

use crate::alphabet::{Alphabet, Word};
use crate::table::CosetTable;
use crate::ti::{CosetId, GeneratorId, PerCoset, TypedIndex, TypedIndexIter};

/// How coset enumeration ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Closure {
    /// Every relator holds at every coset and every transition is known. The
    /// coset count is the index of the subgroup.
    Closed,
    /// No new coset could be defined, but some relator does not yet hold at
    /// some coset. The coset count is not trustworthy.
    Stalled,
}

/// Coset table of a subgroup, along with the generator names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    alphabet: Alphabet,
    table: CosetTable,
    status: Closure,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = [" ".to_string(), " ".to_string()]
            .into_iter()
            .chain(self.alphabet.names().map(str::to_owned))
            .collect_vec();
        let rows = self.table.cosets().map(|coset| {
            [coset.0.to_string(), "|".to_string()]
                .into_iter()
                .chain(self.table.generators().map(|g| match self.table.get(coset, g) {
                    Some(target) => target.0.to_string(),
                    None => "?".to_string(),
                }))
                .collect_vec()
        });
        let grid = std::iter::once(header).chain(rows).collect_vec();

        let mut widths = vec![0; grid[0].len()];
        for row in &grid {
            for (width, cell) in std::iter::zip(&mut widths, row) {
                *width = std::cmp::max(*width, cell.chars().count());
            }
        }

        for row in &grid {
            let line = std::iter::zip(row, &widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Solution {
    pub(crate) fn new(alphabet: Alphabet, table: CosetTable, status: Closure) -> Self {
        Self {
            alphabet,
            table,
            status,
        }
    }

    /// Returns the generator alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
    /// Returns the underlying coset table.
    pub fn table(&self) -> &CosetTable {
        &self.table
    }
    /// Returns how enumeration ended.
    pub fn status(&self) -> Closure {
        self.status
    }
    /// Returns whether the table closed. Only then is the coset count the index
    /// of the subgroup.
    pub fn is_closed(&self) -> bool {
        self.status == Closure::Closed
    }

    /// Returns the number of cosets.
    pub fn coset_count(&self) -> usize {
        self.table.coset_count()
    }
    /// Returns an iterator over all cosets.
    pub fn cosets(&self) -> TypedIndexIter<CosetId> {
        self.table.cosets()
    }

    /// Returns the coset that `coset` is sent to by `generator`.
    pub fn get(&self, coset: CosetId, generator: GeneratorId) -> Option<CosetId> {
        if coset.to_index() >= self.coset_count() || generator.to_index() >= self.alphabet.len() {
            return None;
        }
        self.table.get(coset, generator)
    }
    /// Returns the coset that `coset` is sent to by the generator named `name`.
    pub fn get_by_name(&self, coset: CosetId, name: &str) -> Option<CosetId> {
        self.get(coset, self.alphabet.id(name)?)
    }
    /// Returns the coset reached by applying each generator of `word` in turn,
    /// starting from `coset`.
    pub fn apply_word(&self, coset: CosetId, word: &Word) -> Option<CosetId> {
        word.iter().try_fold(coset, |c, &g| self.get(c, g))
    }

    /// Returns a shortest word leading from the base coset to each coset.
    ///
    /// Cosets are visited breadth-first, taking generators in index order, so
    /// ties are broken in favor of earlier cosets and then lower generators.
    pub fn representatives(&self) -> PerCoset<Word> {
        let mut words: Vec<Option<Word>> = vec![None; self.coset_count()];
        words[0] = Some(Word::EMPTY);

        let mut queue = VecDeque::from([CosetId::BASE]);
        while let Some(coset) = queue.pop_front() {
            let Some(word) = words[coset.to_index()].clone() else {
                continue;
            };
            for generator in self.table.generators() {
                let Some(target) = self.table.get(coset, generator) else {
                    continue;
                };
                let slot = &mut words[target.to_index()];
                if slot.is_none() {
                    let mut new_word = word.clone();
                    new_word.push(generator);
                    *slot = Some(new_word);
                    queue.push_back(target);
                }
            }
        }

        // Every coset is defined as the target of an earlier one, so all of
        // them are reachable.
        words.into_iter().map(Option::unwrap_or_default).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{coxeter, schlafli, solve};

    #[test]
    fn test_display_single_generator() {
        let s = schlafli(["x"], [""; 0], &[]).unwrap().solve().unwrap();
        assert_eq!(s.to_string(), "    x\n0 | 1\n1 | 0\n");
    }

    #[test]
    fn test_display_aligns_columns() {
        let s = solve(
            ["a", "long"],
            ["long"],
            [
                vec!["a", "a"],
                vec!["long", "long"],
                vec!["a", "long", "a", "long"],
            ],
        )
        .unwrap();
        assert_eq!(s.to_string(), "    a long\n0 | 1    0\n1 | 0    1\n");
    }

    #[test]
    fn test_representatives() {
        // Dihedral group of order 8.
        let s = coxeter(["r", "g"], [""; 0], [(("r", "g"), 4)])
            .unwrap()
            .solve()
            .unwrap();
        assert_eq!(s.coset_count(), 8);

        let reps = s.representatives();
        assert_eq!(reps.len(), 8);
        assert!(reps[CosetId::BASE].is_empty());
        for (coset, word) in reps.iter() {
            assert_eq!(s.apply_word(CosetId::BASE, word), Some(coset));
            assert!(word.len() <= 4);
        }
        let longest = reps.iter_values().filter(|w| w.len() == 4).count();
        assert_eq!(longest, 1);
    }

    #[test]
    fn test_get_by_name() {
        let s = solve(["x"], [""; 0], [["x", "x"]]).unwrap();
        assert_eq!(s.get_by_name(CosetId(0), "x"), Some(CosetId(1)));
        assert_eq!(s.get_by_name(CosetId(0), "y"), None);
        assert_eq!(s.get(CosetId(5), GeneratorId(0)), None);
    }
}
