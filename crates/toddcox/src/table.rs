//! Coset table.

use crate::error::{EnumerationError, EnumerationResult};
use crate::ti::{CosetId, GeneratorId, IndexOverflow, TypedIndex, TypedIndexIter};

/// Table of how each generator acts on the cosets of a subgroup.
///
/// The table stores both directions of every known transition: `forward`
/// answers "where does `coset` go under `generator`?" and `reverse` answers
/// "which coset goes to `target` under `generator`?". The two are always exact
/// inverses of each other, so every generator acts as a partial permutation.
///
/// Cosets are never removed or renumbered. Coset 0 is the subgroup itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CosetTable {
    /// Number of generators, which is fixed at construction.
    generator_count: usize,
    /// Number of cosets defined so far.
    coset_count: usize,
    /// Flattened 2D array, indexed by coset then generator.
    forward: Vec<Option<CosetId>>,
    /// Flattened 2D array, indexed by target coset then generator.
    reverse: Vec<Option<CosetId>>,
}

impl CosetTable {
    /// Constructs a table containing only the base coset, with no known
    /// transitions.
    pub fn new(generator_count: usize) -> Self {
        CosetTable {
            generator_count,
            coset_count: 1,
            forward: vec![None; generator_count],
            reverse: vec![None; generator_count],
        }
    }

    /// Returns the number of generators.
    pub fn generator_count(&self) -> usize {
        self.generator_count
    }
    /// Returns the number of cosets defined so far.
    pub fn coset_count(&self) -> usize {
        self.coset_count
    }
    /// Returns an iterator over all cosets, in creation order.
    pub fn cosets(&self) -> TypedIndexIter<CosetId> {
        CosetId::iter(self.coset_count)
    }
    /// Returns an iterator over all generators.
    pub fn generators(&self) -> TypedIndexIter<GeneratorId> {
        GeneratorId::iter(self.generator_count)
    }

    /// Returns the coset that `coset` is sent to by `generator`, if known.
    #[inline]
    #[track_caller]
    pub fn get(&self, coset: CosetId, generator: GeneratorId) -> Option<CosetId> {
        self.forward[self.index(coset, generator)]
    }
    /// Returns the coset that is sent to `target` by `generator`, if known.
    #[inline]
    #[track_caller]
    pub fn rget(&self, generator: GeneratorId, target: CosetId) -> Option<CosetId> {
        self.reverse[self.index(target, generator)]
    }

    /// Records that `generator` sends `coset` to `target`.
    ///
    /// Writing a transition that is already known is a no-op. Writing one that
    /// contradicts a known transition in either direction returns an error and
    /// leaves the table unchanged. Returns whether the table changed.
    #[track_caller]
    pub fn set(
        &mut self,
        coset: CosetId,
        generator: GeneratorId,
        target: CosetId,
    ) -> EnumerationResult<bool> {
        let forward_index = self.index(coset, generator);
        let reverse_index = self.index(target, generator);

        match self.forward[forward_index] {
            Some(existing) if existing == target => return Ok(false),
            Some(existing) => {
                return Err(EnumerationError::Conflict {
                    coset,
                    generator,
                    existing,
                    attempted: target,
                });
            }
            None => (),
        }
        if let Some(existing) = self.reverse[reverse_index] {
            // `existing != coset`, or else the forward entry would be set.
            return Err(EnumerationError::ReverseConflict {
                target,
                generator,
                existing,
                attempted: coset,
            });
        }

        self.forward[forward_index] = Some(target);
        self.reverse[reverse_index] = Some(coset);
        Ok(true)
    }

    /// Returns the first coset and generator, in coset-then-generator order,
    /// whose transition is unknown.
    pub fn first_undefined(&self) -> Option<(CosetId, GeneratorId)> {
        let i = self.forward.iter().position(Option::is_none)?;
        let coset = CosetId::try_from_index(i / self.generator_count).ok()?;
        let generator = GeneratorId::try_from_index(i % self.generator_count).ok()?;
        Some((coset, generator))
    }
    /// Returns whether every coset has a known transition for every generator.
    pub fn is_saturated(&self) -> bool {
        self.forward.iter().all(Option::is_some)
    }

    /// Defines a new coset as the target of the first unknown transition, in
    /// coset-then-generator order.
    ///
    /// Returns the new coset, or `None` if the table is saturated, in which case
    /// the table is unchanged.
    pub fn add_coset(&mut self) -> Result<Option<CosetId>, IndexOverflow> {
        let Some((coset, generator)) = self.first_undefined() else {
            return Ok(None);
        };

        let new_coset = CosetId::try_from_index(self.coset_count)?;
        self.coset_count += 1;
        self.forward
            .extend(std::iter::repeat_n(None, self.generator_count));
        self.reverse
            .extend(std::iter::repeat_n(None, self.generator_count));

        // Both slots were just checked or created, so they are empty.
        let forward_index = self.index(coset, generator);
        let reverse_index = self.index(new_coset, generator);
        self.forward[forward_index] = Some(new_coset);
        self.reverse[reverse_index] = Some(coset);

        Ok(Some(new_coset))
    }

    /// Returns an index into `forward` or `reverse`.
    #[inline]
    #[track_caller]
    fn index(&self, coset: CosetId, generator: GeneratorId) -> usize {
        assert!(
            generator.to_index() < self.generator_count,
            "generator {generator} out of range (max {max})",
            max = self.generator_count,
        );
        assert!(
            coset.to_index() < self.coset_count,
            "coset {coset} out of range (count {count})",
            count = self.coset_count,
        );
        coset.to_index() * self.generator_count + generator.to_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_both_directions() {
        let mut t = CosetTable::new(2);
        let c1 = t.add_coset().unwrap().unwrap();
        assert_eq!(c1, CosetId(1));
        assert_eq!(t.get(CosetId(0), GeneratorId(0)), Some(c1));
        assert_eq!(t.rget(GeneratorId(0), c1), Some(CosetId(0)));

        assert_eq!(t.set(c1, GeneratorId(0), CosetId(0)), Ok(true));
        assert_eq!(t.rget(GeneratorId(0), CosetId(0)), Some(c1));
        // Same value again is fine.
        assert_eq!(t.set(c1, GeneratorId(0), CosetId(0)), Ok(false));
    }

    #[test]
    fn test_set_rejects_conflicts() {
        let mut t = CosetTable::new(1);
        t.add_coset().unwrap();
        t.add_coset().unwrap();
        // 0 -> 1 -> 2
        assert_eq!(
            t.set(CosetId(0), GeneratorId(0), CosetId(2)),
            Err(EnumerationError::Conflict {
                coset: CosetId(0),
                generator: GeneratorId(0),
                existing: CosetId(1),
                attempted: CosetId(2),
            }),
        );
        assert_eq!(
            t.set(CosetId(2), GeneratorId(0), CosetId(1)),
            Err(EnumerationError::ReverseConflict {
                target: CosetId(1),
                generator: GeneratorId(0),
                existing: CosetId(0),
                attempted: CosetId(2),
            }),
        );
        assert_eq!(t.get(CosetId(2), GeneratorId(0)), None);
    }

    #[test]
    fn test_add_coset_scan_order() {
        let mut t = CosetTable::new(2);
        t.set(CosetId(0), GeneratorId(0), CosetId(0)).unwrap();
        // First gap is (0, 1).
        assert_eq!(t.add_coset(), Ok(Some(CosetId(1))));
        assert_eq!(t.get(CosetId(0), GeneratorId(1)), Some(CosetId(1)));
        // Next gap is (1, 0).
        assert_eq!(t.first_undefined(), Some((CosetId(1), GeneratorId(0))));
        assert_eq!(t.add_coset(), Ok(Some(CosetId(2))));
        assert_eq!(t.rget(GeneratorId(0), CosetId(2)), Some(CosetId(1)));
    }

    #[test]
    fn test_add_coset_on_saturated_table() {
        let mut t = CosetTable::new(2);
        t.set(CosetId(0), GeneratorId(0), CosetId(0)).unwrap();
        t.set(CosetId(0), GeneratorId(1), CosetId(0)).unwrap();
        assert!(t.is_saturated());
        let before = t.clone();
        assert_eq!(t.add_coset(), Ok(None));
        assert_eq!(t.add_coset(), Ok(None));
        assert_eq!(t, before);
    }

    #[test]
    fn test_no_generators() {
        let mut t = CosetTable::new(0);
        assert!(t.is_saturated());
        assert_eq!(t.first_undefined(), None);
        assert_eq!(t.add_coset(), Ok(None));
        assert_eq!(t.coset_count(), 1);
    }
}
