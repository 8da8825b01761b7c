//! Generator names and words over them.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::{PresentationError, PresentationResult};
use crate::ti::{GeneratorId, PerGenerator, TypedIndex, TypedIndexIter};

/// Ordered list of unique generator names, which assigns each name a dense
/// [`GeneratorId`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Alphabet {
    names: PerGenerator<String>,
    ids: HashMap<String, GeneratorId>,
}

impl Alphabet {
    /// Constructs an alphabet from a list of generator names.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> PresentationResult<Self> {
        let mut ret = Self::default();
        for name in names {
            let name = name.as_ref().to_owned();
            if ret.ids.contains_key(&name) {
                return Err(PresentationError::DuplicateGenerator(name));
            }
            let id = ret.names.push(name.clone())?;
            ret.ids.insert(name, id);
        }
        Ok(ret)
    }

    /// Returns the number of generators.
    pub fn len(&self) -> usize {
        self.names.len()
    }
    /// Returns whether there are no generators.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// Returns an iterator over all generator IDs.
    pub fn ids(&self) -> TypedIndexIter<GeneratorId> {
        GeneratorId::iter(self.len())
    }
    /// Returns an iterator over all generator names, in order.
    pub fn names(&self) -> impl '_ + Iterator<Item = &str> {
        self.names.iter_values().map(String::as_str)
    }

    /// Returns the ID of a generator, or `None` if there is no generator with
    /// that name.
    pub fn id(&self, name: &str) -> Option<GeneratorId> {
        self.ids.get(name).copied()
    }
    /// Returns the ID of a generator, or an error if there is no generator with
    /// that name.
    pub fn try_id(&self, name: &str) -> PresentationResult<GeneratorId> {
        self.id(name)
            .ok_or_else(|| PresentationError::UnknownGenerator(name.to_owned()))
    }
    /// Returns the name of a generator.
    #[track_caller]
    pub fn name(&self, id: GeneratorId) -> &str {
        &self.names[id]
    }

    /// Converts a list of generator names into a word.
    pub fn parse_word<S: AsRef<str>>(
        &self,
        names: impl IntoIterator<Item = S>,
    ) -> PresentationResult<Word> {
        names
            .into_iter()
            .map(|name| self.try_id(name.as_ref()))
            .collect()
    }

    /// Returns a displayable form of `word` using the names in this alphabet.
    ///
    /// Names are juxtaposed if they are all a single character; otherwise they
    /// are separated by spaces.
    pub fn display_word<'a>(&'a self, word: &'a Word) -> impl 'a + fmt::Display {
        let sep = match self.names().all(|name| name.chars().count() == 1) {
            true => "",
            false => " ",
        };
        word.iter().map(|&g| self.name(g)).join(sep)
    }
}

/// Sequence of generators, applied left to right.
///
/// Every generator is self-inverse, so there are no inverse letters.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Word(pub SmallVec<[GeneratorId; 8]>);

impl Word {
    /// The empty word, which is the identity.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Constructs a word from a sequence of generators.
    pub fn new(generators: impl IntoIterator<Item = GeneratorId>) -> Self {
        Self::from_iter(generators)
    }
    /// Returns the word repeated `n` times.
    #[must_use]
    pub fn repeat(&self, n: usize) -> Self {
        Self(self.0.repeat(n).into())
    }

    /// Returns the number of generators in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether the word is the identity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns an iterator over the generators in the word.
    pub fn iter(&self) -> std::slice::Iter<'_, GeneratorId> {
        self.0.iter()
    }
    /// Returns the generator at `index`.
    #[track_caller]
    pub fn get(&self, index: usize) -> GeneratorId {
        self.0[index]
    }
    /// Appends a generator to the end of the word.
    pub fn push(&mut self, generator: GeneratorId) {
        self.0.push(generator);
    }
}

impl FromIterator<GeneratorId> for Word {
    fn from_iter<T: IntoIterator<Item = GeneratorId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a GeneratorId;

    type IntoIter = std::slice::Iter<'a, GeneratorId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_lookup() {
        let a = Alphabet::new(["r", "g", "b"]).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.id("g"), Some(GeneratorId(1)));
        assert_eq!(a.id("y"), None);
        assert_eq!(a.name(GeneratorId(2)), "b");
        assert_eq!(a.names().collect::<Vec<_>>(), ["r", "g", "b"]);
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        assert_eq!(
            Alphabet::new(["x", "y", "x"]),
            Err(PresentationError::DuplicateGenerator("x".to_owned())),
        );
    }

    #[test]
    fn test_parse_and_display_word() {
        let a = Alphabet::new(["x", "y"]).unwrap();
        let w = a.parse_word(["x", "y"]).unwrap().repeat(3);
        assert_eq!(w.len(), 6);
        assert_eq!(a.display_word(&w).to_string(), "xyxyxy");
        assert_eq!(
            a.parse_word(["x", "q"]),
            Err(PresentationError::UnknownGenerator("q".to_owned())),
        );

        let long = Alphabet::new(["red", "blue"]).unwrap();
        let w = long.parse_word(["blue", "red"]).unwrap();
        assert_eq!(long.display_word(&w).to_string(), "blue red");
    }
}
