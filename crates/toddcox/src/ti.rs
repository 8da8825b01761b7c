//! Typed indexes.
//!
//! Generators and cosets are both small integers, so each gets a newtype to
//! keep one from being used to index a collection of the other.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};

use itertools::Itertools;

/// Defines one or more structs that are simple wrappers around primitive
/// unsigned integer types and implements [`TypedIndex`] on them.
#[macro_export]
macro_rules! typed_index_struct {
    (
        $(
            $(#[$attr:meta])*
            $struct_vis:vis struct $struct_name:ident($inner_vis:vis $inner_type:ty);
        )+
    ) => {
        $(
            $(#[$attr])*
            #[derive(Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[repr(transparent)]
            $struct_vis struct $struct_name($inner_vis $inner_type);

            impl ::std::fmt::Debug for $struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "#{:?}", self.0)
                }
            }
            impl ::std::fmt::Display for $struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "#{}", self.0)
                }
            }

            impl $crate::ti::TypedIndex for $struct_name {
                const MAX_INDEX: usize = <$inner_type>::MAX as usize;
                const TYPE_NAME: &'static str = stringify!($struct_name);

                fn to_index(self) -> usize {
                    self.0 as usize
                }

                fn try_from_index(index: usize) -> Result<Self, $crate::ti::IndexOverflow> {
                    match index.try_into() {
                        Ok(i) => Ok(Self(i)),
                        Err(_) => Err($crate::ti::IndexOverflow::new::<Self>()),
                    }
                }
            }
        )+
    };
}

/// Typed index, typically a wrapper around a primitive unsigned integer.
///
/// Instead of implementing this trait manually, use [`typed_index_struct!`].
pub trait TypedIndex:
    'static
    + fmt::Debug
    + fmt::Display
    + Default
    + Copy
    + PartialEq
    + Eq
    + std::hash::Hash
    + PartialOrd
    + Ord
{
    /// Maximum index representable by the type.
    const MAX_INDEX: usize;
    /// User-friendly type name.
    const TYPE_NAME: &'static str;

    /// Returns the index as a `usize`.
    fn to_index(self) -> usize;

    /// Returns an index from a `usize`, or an error if it does not fit.
    fn try_from_index(index: usize) -> Result<Self, IndexOverflow>;

    /// Returns an iterator over all indexes up to `count` (exclusive), clipped
    /// to the maximum representable index.
    fn iter(count: usize) -> TypedIndexIter<Self> {
        let count = std::cmp::min(count, Self::MAX_INDEX.saturating_add(1));
        TypedIndexIter {
            range: 0..count,
            _phantom: PhantomData,
        }
    }
}

/// Iterator over all indexes up to a certain value. See [`TypedIndex::iter()`].
#[derive(Debug, Clone)]
pub struct TypedIndexIter<I> {
    range: Range<usize>,
    _phantom: PhantomData<fn() -> I>,
}

impl<I: TypedIndex> Iterator for TypedIndexIter<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        // `iter()` clips the range, so every index fits.
        self.range.next().and_then(|i| I::try_from_index(i).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I: TypedIndex> DoubleEndedIterator for TypedIndexIter<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().and_then(|i| I::try_from_index(i).ok())
    }
}

impl<I: TypedIndex> ExactSizeIterator for TypedIndexIter<I> {}

/// Error when a [`TypedIndex`] exceeds its maximum value.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("exceeded maximum {type_name} count of {max_value}")]
pub struct IndexOverflow {
    /// Name of the indexing type.
    pub type_name: &'static str,
    /// Maximum allowed index for the indexing type.
    pub max_value: usize,
}

impl IndexOverflow {
    /// Constructs a new overflow error for the type `I`.
    pub fn new<I: TypedIndex>() -> Self {
        Self {
            type_name: I::TYPE_NAME,
            max_value: I::MAX_INDEX,
        }
    }
}

/// Wrapper around a `Vec<E>` that is indexed using a typed index.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TiVec<I, E> {
    values: Vec<E>,
    _phantom: PhantomData<I>,
}

impl<I, E: fmt::Debug> fmt::Debug for TiVec<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contents = self.values.iter().map(|v| format!("{v:?}")).join(", ");
        write!(f, "[{contents}]")
    }
}

impl<I, E> Default for TiVec<I, E> {
    fn default() -> Self {
        Self {
            values: vec![],
            _phantom: PhantomData,
        }
    }
}

impl<I: TypedIndex, E> Index<I> for TiVec<I, E> {
    type Output = E;

    fn index(&self, index: I) -> &Self::Output {
        &self.values[index.to_index()]
    }
}

impl<I: TypedIndex, E> IndexMut<I> for TiVec<I, E> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.values[index.to_index()]
    }
}

impl<I: TypedIndex, E> TiVec<I, E> {
    /// Constructs a new empty vector.
    pub const fn new() -> Self {
        TiVec {
            values: vec![],
            _phantom: PhantomData,
        }
    }

    /// Adds an element to the end of the vector and returns its index.
    pub fn push(&mut self, value: E) -> Result<I, IndexOverflow> {
        let idx = I::try_from_index(self.len())?;
        self.values.push(value);
        Ok(idx)
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Returns the number of elements in the collection.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Returns a reference to the element at `index`, or `None` if it is out of
    /// range.
    pub fn get(&self, index: I) -> Option<&E> {
        self.values.get(index.to_index())
    }

    /// Returns an iterator over the indexes in the collection.
    pub fn iter_keys(&self) -> TypedIndexIter<I> {
        I::iter(self.len())
    }
    /// Returns an iterator over the values in the collection.
    pub fn iter_values(&self) -> std::slice::Iter<'_, E> {
        self.values.iter()
    }
    /// Returns a mutating iterator over the values in the collection.
    pub fn iter_values_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.values.iter_mut()
    }
    /// Returns an iterator over the index-value pairs in the collection.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (I, &E)> {
        self.iter_keys().zip(&self.values)
    }
}

impl<I: TypedIndex, E> FromIterator<E> for TiVec<I, E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        TiVec {
            values: iter
                .into_iter()
                .take(I::MAX_INDEX.saturating_add(1))
                .collect(),
            _phantom: PhantomData,
        }
    }
}

crate::typed_index_struct! {
    /// ID of a group generator.
    pub struct GeneratorId(pub u8);
    /// ID of a coset of the subgroup.
    pub struct CosetId(pub u32);
}

impl CosetId {
    /// Base coset, which is the subgroup itself.
    pub const BASE: CosetId = CosetId(0);
}

/// List containing a value per generator.
pub type PerGenerator<T> = TiVec<GeneratorId, T>;
/// List containing a value per coset.
pub type PerCoset<T> = TiVec<CosetId, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_overflow() {
        assert!(GeneratorId::try_from_index(255).is_ok());
        let err = GeneratorId::try_from_index(256).unwrap_err();
        assert_eq!(err.type_name, "GeneratorId");
        assert_eq!(err.to_string(), "exceeded maximum GeneratorId count of 255");
    }

    #[test]
    fn test_tivec_push_and_iter() {
        let mut v = PerCoset::new();
        assert_eq!(v.push('a'), Ok(CosetId(0)));
        assert_eq!(v.push('b'), Ok(CosetId(1)));
        assert_eq!(v[CosetId(1)], 'b');
        assert_eq!(v.get(CosetId(2)), None);
        let pairs: Vec<_> = v.iter().map(|(i, &c)| (i, c)).collect();
        assert_eq!(pairs, vec![(CosetId(0), 'a'), (CosetId(1), 'b')]);
    }
}
