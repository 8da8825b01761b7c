//! Presentations of Coxeter groups, built from a Coxeter diagram or a linear
//! Schläfli symbol.

use std::collections::HashSet;

use itertools::Itertools;

use crate::alphabet::{Alphabet, Word};
use crate::error::{PresentationError, PresentationResult};
use crate::presentation::Presentation;

/// Constructs the presentation of a Coxeter group from the bonds of its
/// [Coxeter diagram](https://w.wiki/7PLe).
///
/// Each bond `((a, b), m)` contributes the relator `(ab)^m`. Every pair of
/// generators without a bond commutes, contributing `(ab)^2`, and every
/// generator is an involution, contributing `aa`.
///
/// For example, these are equivalent:
///
/// ```
/// # use toddcox::{coxeter, Presentation};
/// let p1 = coxeter(["x", "y", "z"], ["x"], [(("x", "y"), 4), (("y", "z"), 3)]).unwrap();
/// let p2 = Presentation::new(
///     ["x", "y", "z"],
///     ["x"],
///     [
///         "xyxyxyxy", "yzyzyz", // bonds
///         "xzxz",               // unbonded pair
///         "xx", "yy", "zz",     // involutions
///     ]
///     .map(|r| r.chars().map(String::from).collect::<Vec<_>>()),
/// )
/// .unwrap();
/// assert_eq!(p1, p2);
/// ```
pub fn coxeter<S, T, B>(
    gens: impl IntoIterator<Item = S>,
    subgens: impl IntoIterator<Item = T>,
    bonds: impl IntoIterator<Item = ((B, B), usize)>,
) -> PresentationResult<Presentation>
where
    S: AsRef<str>,
    T: AsRef<str>,
    B: AsRef<str>,
{
    let alphabet = Alphabet::new(gens)?;
    let subgroup_generators = subgens
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            alphabet
                .id(name)
                .ok_or_else(|| PresentationError::UnknownSubgroupGenerator(name.to_owned()))
        })
        .collect::<PresentationResult<Vec<_>>>()?;

    let mut relators = vec![];

    // Explicit bonds, in the order given.
    let mut bonded = HashSet::new();
    for ((a, b), order) in bonds {
        let (a, b) = (a.as_ref(), b.as_ref());
        let (i, j) = (alphabet.try_id(a)?, alphabet.try_id(b)?);
        if i == j || order < 2 {
            return Err(PresentationError::InvalidBond {
                a: a.to_owned(),
                b: b.to_owned(),
                order,
            });
        }
        if !bonded.insert((i.min(j), i.max(j))) {
            return Err(PresentationError::DuplicateBond(a.to_owned(), b.to_owned()));
        }
        relators.push(Word::new([i, j]).repeat(order));
    }

    // Unbonded pairs commute.
    for (i, j) in alphabet.ids().tuple_combinations() {
        if !bonded.contains(&(i, j)) {
            relators.push(Word::new([i, j]).repeat(2));
        }
    }

    // Generators are involutions.
    for g in alphabet.ids() {
        relators.push(Word::new([g, g]));
    }

    Presentation::from_words(alphabet, subgroup_generators, relators)
}

/// Constructs the presentation of a Coxeter group from a linear Schläfli
/// symbol, which bonds each generator to the next one.
///
/// There must be exactly one fewer coefficient than generators. For example,
/// `schlafli(["x", "y", "z"], [], &[4, 3])` is the same as
/// `coxeter(["x", "y", "z"], [], [(("x", "y"), 4), (("y", "z"), 3)])`.
pub fn schlafli<S, T>(
    gens: impl IntoIterator<Item = S>,
    subgens: impl IntoIterator<Item = T>,
    coefficients: &[usize],
) -> PresentationResult<Presentation>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let gens = gens
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .collect_vec();
    if gens.len() != coefficients.len() + 1 {
        return Err(PresentationError::SchlafliLength {
            gens: gens.len(),
            expected: gens.len().saturating_sub(1),
            got: coefficients.len(),
        });
    }

    let bonds = gens
        .iter()
        .tuple_windows()
        .zip(coefficients)
        .map(|((a, b), &order)| ((a.as_str(), b.as_str()), order))
        .collect_vec();

    coxeter(&gens, subgens, bonds)
}
