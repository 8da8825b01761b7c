//! Todd-Coxeter coset enumeration.
//!
//! The enumerator alternates between two steps:
//!
//! 1. **Deduction.** Every relation table fills in as much as it can from the
//!    coset table, writing back each transition it pins down. This repeats
//!    until a full sweep over all relations learns nothing.
//! 2. **Definition.** The first unknown transition (scanning cosets in creation
//!    order, then generators in index order) is assigned a brand-new coset, and
//!    every relation table gets a row for it.
//!
//! For a finite index the table eventually closes. For an infinite index it
//! never does, so callers that cannot rule that out should set
//! [`EnumerationOptions::max_cosets`].

use crate::error::{EnumerationError, EnumerationResult, PresentationError};
use crate::presentation::Presentation;
use crate::relation::Relation;
use crate::solution::{Closure, Solution};
use crate::table::CosetTable;
use crate::ti::CosetId;

/// Options for coset enumeration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EnumerationOptions {
    /// Maximum number of cosets to define before giving up, or `None` for no
    /// limit.
    pub max_cosets: Option<usize>,
}

impl EnumerationOptions {
    /// Returns options with a limit on the number of cosets.
    pub fn with_max_cosets(max_cosets: usize) -> Self {
        Self {
            max_cosets: Some(max_cosets),
        }
    }
}

/// In-progress coset enumeration for a presentation.
#[derive(Debug, Clone)]
pub struct Enumerator<'a> {
    presentation: &'a Presentation,
    options: EnumerationOptions,

    table: CosetTable,
    /// One relation table per relator, each with one row per coset.
    relations: Vec<Relation>,
}

impl<'a> Enumerator<'a> {
    /// Constructs an enumerator with only the base coset, which is fixed by
    /// every subgroup generator.
    pub fn new(
        presentation: &'a Presentation,
        options: EnumerationOptions,
    ) -> EnumerationResult<Self> {
        let mut table = CosetTable::new(presentation.generator_count());
        for &generator in presentation.subgroup_generators() {
            table.set(CosetId::BASE, generator, CosetId::BASE)?;
        }
        let relations = (presentation.relators().iter().enumerate())
            .map(|(i, relator)| {
                Relation::new(relator.clone()).ok_or(PresentationError::EmptyRelator(i))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            presentation,
            options,

            table,
            relations,
        })
    }

    /// Returns the coset table built so far.
    pub fn table(&self) -> &CosetTable {
        &self.table
    }
    /// Returns the relation tables, in the same order as the relators.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns whether every row of every relation table is complete.
    pub fn is_complete(&self) -> bool {
        self.relations.iter().all(Relation::is_complete)
    }
    /// Returns whether the table is closed: every relator holds at every coset
    /// and every transition is known.
    pub fn is_closed(&self) -> bool {
        self.is_complete() && self.table.is_saturated()
    }

    /// Applies every relation table repeatedly until none of them learns
    /// anything new. This never defines new cosets.
    pub fn propagate(&mut self) -> EnumerationResult<()> {
        loop {
            let mut updated = false;
            for relation in &mut self.relations {
                updated |= relation.apply(&mut self.table)?;
            }
            if !updated {
                return Ok(());
            }
        }
    }

    /// Defines one new coset and adds a row for it to every relation table.
    ///
    /// Returns `None` if every transition is already known.
    pub fn grow(&mut self) -> EnumerationResult<Option<CosetId>> {
        if let Some(max) = self.options.max_cosets {
            if self.table.coset_count() >= max && !self.table.is_saturated() {
                log::warn!(
                    "coset enumeration hit the limit of {max} cosets for {}",
                    self.presentation,
                );
                return Err(EnumerationError::TooManyCosets(max));
            }
        }

        let Some(new_coset) = self.table.add_coset()? else {
            return Ok(None);
        };
        for relation in &mut self.relations {
            relation.add_row()?;
        }
        log::debug!("defined coset {new_coset}");
        Ok(Some(new_coset))
    }

    /// Runs the enumeration until the table closes or can grow no further.
    pub fn run(mut self) -> EnumerationResult<Solution> {
        let status = loop {
            self.propagate()?;
            if self.is_closed() {
                break Closure::Closed;
            }
            if self.grow()?.is_none() {
                log::warn!(
                    "coset enumeration stalled with {} cosets for {}",
                    self.table.coset_count(),
                    self.presentation,
                );
                break Closure::Stalled;
            }
        };

        log::debug!(
            "coset enumeration finished with {} cosets ({status:?}) for {}",
            self.table.coset_count(),
            self.presentation,
        );

        Ok(Solution::new(
            self.presentation.alphabet().clone(),
            self.table,
            status,
        ))
    }
}

impl Presentation {
    /// Enumerates the cosets of the subgroup, with no limit on their number.
    pub fn solve(&self) -> EnumerationResult<Solution> {
        self.solve_with(EnumerationOptions::default())
    }
    /// Enumerates the cosets of the subgroup.
    pub fn solve_with(&self, options: EnumerationOptions) -> EnumerationResult<Solution> {
        Enumerator::new(self, options)?.run()
    }
}

/// Given the presentation of a group and a subgroup, computes the table of
/// cosets of the subgroup.
///
/// - `gens` are the names of the generators of the group, each of which is
///   self-inverse.
/// - `subgens` are the names of the generators of the subgroup.
/// - `relators` are words, given as sequences of generator names, that equal
///   the identity.
///
/// Fails if a name is not in `gens`, without enumerating anything.
pub fn solve<S, T, U, R>(
    gens: impl IntoIterator<Item = S>,
    subgens: impl IntoIterator<Item = T>,
    relators: impl IntoIterator<Item = R>,
) -> EnumerationResult<Solution>
where
    S: AsRef<str>,
    T: AsRef<str>,
    U: AsRef<str>,
    R: IntoIterator<Item = U>,
{
    Presentation::new(gens, subgens, relators)?.solve()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ti::GeneratorId;

    thread_local! {
        static LOG_RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(vec![]) };
    }

    /// Logger that keeps records per thread, so that each test sees only its
    /// own.
    struct RecordingLogger;

    impl log::Log for RecordingLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }
        fn log(&self, record: &log::Record<'_>) {
            LOG_RECORDS.with_borrow_mut(|records| {
                records.push((record.level(), record.args().to_string()));
            });
        }
        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger;

    /// Runs `f` and returns what it logged at `level`.
    fn logged_at<T>(level: log::Level, f: impl FnOnce() -> T) -> (T, Vec<String>) {
        // Fails if already installed by another test, which is fine.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        LOG_RECORDS.with_borrow_mut(Vec::clear);
        let ret = f();
        let messages = LOG_RECORDS
            .with_borrow_mut(std::mem::take)
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect();
        (ret, messages)
    }

    #[test]
    fn test_propagate_reaches_fixpoint() {
        // <x | xx> with x in the subgroup: everything is known up front.
        let p = Presentation::new(["x"], ["x"], [["x", "x"]]).unwrap();
        let mut e = Enumerator::new(&p, EnumerationOptions::default()).unwrap();
        assert!(!e.is_complete());
        e.propagate().unwrap();
        assert!(e.is_closed());
        assert_eq!(e.table().coset_count(), 1);
        assert_eq!(e.grow(), Ok(None));
    }

    #[test]
    fn test_grow_keeps_rows_in_lockstep() {
        let p = Presentation::new(["x", "y"], [""; 0], [["x", "x"], ["y", "y"]]).unwrap();
        let mut e = Enumerator::new(&p, EnumerationOptions::default()).unwrap();
        assert_eq!(e.grow(), Ok(Some(CosetId(1))));
        assert_eq!(e.grow(), Ok(Some(CosetId(2))));
        for relation in e.relations() {
            assert_eq!(relation.len(), e.table().coset_count());
        }
    }

    #[test]
    fn test_solve_cyclic_group() {
        let s = solve(["x"], [""; 0], [["x", "x", "x"]]).unwrap();
        assert!(s.is_closed());
        assert_eq!(s.coset_count(), 3);
        let x = GeneratorId(0);
        assert_eq!(s.get(CosetId(0), x), Some(CosetId(1)));
        assert_eq!(s.get(CosetId(1), x), Some(CosetId(2)));
        assert_eq!(s.get(CosetId(2), x), Some(CosetId(0)));
    }

    #[test]
    fn test_solve_rejects_bad_names() {
        assert_eq!(
            solve(["x"], ["y"], [["x", "x"]]).map(|s| s.coset_count()),
            Err(PresentationError::UnknownSubgroupGenerator("y".to_owned()).into()),
        );
        assert_eq!(
            solve(["x"], [""; 0], [["x", "z"]]).map(|s| s.coset_count()),
            Err(PresentationError::UnknownGenerator("z".to_owned()).into()),
        );
    }

    #[test]
    fn test_inconsistent_presentation_fails_fast() {
        // `xx = xxx = 1` forces `x = 1`, which requires merging cosets.
        let err = solve(["x"], [""; 0], [vec!["x", "x"], vec!["x", "x", "x"]]).unwrap_err();
        assert!(matches!(
            err,
            EnumerationError::Conflict { .. } | EnumerationError::ReverseConflict { .. },
        ));
    }

    #[test]
    fn test_coset_limit() {
        // `y` is unconstrained, so the index is infinite.
        let p = Presentation::new(["x", "y"], [""; 0], [["x", "x"]]).unwrap();
        assert_eq!(
            p.solve_with(EnumerationOptions::with_max_cosets(50))
                .map(|s| s.coset_count()),
            Err(EnumerationError::TooManyCosets(50)),
        );

        // A limit that is exactly the index is fine.
        let p = Presentation::new(["x"], [""; 0], [["x", "x", "x", "x"]]).unwrap();
        let s = p
            .solve_with(EnumerationOptions::with_max_cosets(4))
            .unwrap();
        assert_eq!(s.coset_count(), 4);
    }

    #[test]
    fn test_coset_limit_is_logged() {
        let p = Presentation::new(["x", "y"], [""; 0], [["x", "x"]]).unwrap();
        let (result, warnings) = logged_at(log::Level::Warn, || {
            p.solve_with(EnumerationOptions::with_max_cosets(5))
                .map(|s| s.coset_count())
        });
        assert_eq!(result, Err(EnumerationError::TooManyCosets(5)));
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].contains("limit of 5 cosets"), "{warnings:?}");
    }

    #[test]
    fn test_growth_is_logged() {
        let p = Presentation::new(["x"], [""; 0], [["x", "x", "x"]]).unwrap();
        let (_, debug) = logged_at(log::Level::Debug, || p.solve().unwrap());
        assert!(debug.contains(&"defined coset #1".to_owned()), "{debug:?}");
        assert!(debug.contains(&"defined coset #2".to_owned()), "{debug:?}");
        assert!(!debug.iter().any(|msg| msg.starts_with("deduced")));
    }
}
