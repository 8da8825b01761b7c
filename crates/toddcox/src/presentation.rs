//! Group presentations.

use std::fmt;

use itertools::Itertools;

use crate::alphabet::{Alphabet, Word};
use crate::error::{PresentationError, PresentationResult};
use crate::ti::GeneratorId;

/// Presentation of a group along with generators for a subgroup.
///
/// Every generator is assumed to be self-inverse, as in a Coxeter group.
/// Relators are words over the generators alone; there are no inverse letters.
/// A presentation that needs distinct inverses cannot be expressed here.
///
/// A presentation is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    alphabet: Alphabet,
    subgroup_generators: Vec<GeneratorId>,
    relators: Vec<Word>,
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens = self.alphabet.names().join(", ");
        let subgens = (self.subgroup_generators.iter())
            .map(|&g| self.alphabet.name(g))
            .join(", ");
        let relators = (self.relators.iter())
            .map(|r| self.alphabet.display_word(r).to_string())
            .join(", ");
        write!(f, "<{gens} | {relators}> / <{subgens}>")
    }
}

impl Presentation {
    /// Constructs a presentation from generator names, the names of the
    /// subgroup generators, and relators given as sequences of names.
    pub fn new<S, T, U, R>(
        gens: impl IntoIterator<Item = S>,
        subgens: impl IntoIterator<Item = T>,
        relators: impl IntoIterator<Item = R>,
    ) -> PresentationResult<Self>
    where
        S: AsRef<str>,
        T: AsRef<str>,
        U: AsRef<str>,
        R: IntoIterator<Item = U>,
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
        let relators = relators
            .into_iter()
            .map(|r| alphabet.parse_word(r))
            .collect::<PresentationResult<Vec<_>>>()?;
        Self::from_words(alphabet, subgroup_generators, relators)
    }

    /// Constructs a presentation from an alphabet and words that have already
    /// been resolved against it.
    pub fn from_words(
        alphabet: Alphabet,
        subgroup_generators: impl IntoIterator<Item = GeneratorId>,
        relators: Vec<Word>,
    ) -> PresentationResult<Self> {
        if let Some(i) = relators.iter().position(|r| r.is_empty()) {
            return Err(PresentationError::EmptyRelator(i));
        }
        let subgroup_generators = subgroup_generators.into_iter().unique().collect();
        Ok(Self {
            alphabet,
            subgroup_generators,
            relators,
        })
    }

    /// Returns the generator alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
    /// Returns the number of generators.
    pub fn generator_count(&self) -> usize {
        self.alphabet.len()
    }
    /// Returns the generators of the subgroup, without duplicates.
    pub fn subgroup_generators(&self) -> &[GeneratorId] {
        &self.subgroup_generators
    }
    /// Returns the relators, each of which is a word equal to the identity.
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }
}
