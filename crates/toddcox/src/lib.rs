//! Coset enumeration for finitely presented groups, using the
//! [Todd-Coxeter algorithm](https://en.wikipedia.org/wiki/Todd%E2%80%93Coxeter_algorithm).
//!
//! Given generators, relators, and generators of a subgroup, [`solve()`]
//! computes how each generator permutes the cosets of the subgroup. With no
//! subgroup generators, the cosets are the elements of the group itself, so the
//! coset count is the order of the group.
//!
//! Every generator is assumed to be self-inverse, which is always the case for
//! the reflection groups built by [`coxeter()`] and [`schlafli()`].
//!
//! ```
//! // Symmetries of the icosahedron, modulo those that fix a vertex.
//! let presentation = toddcox::schlafli(["x", "y", "z"], ["x", "y"], &[5, 3]).unwrap();
//! let solution = presentation.solve().unwrap();
//! assert!(solution.is_closed());
//! assert_eq!(solution.coset_count(), 12);
//! ```

mod alphabet;
mod builder;
mod enumerate;
mod error;
mod presentation;
mod relation;
mod solution;
mod table;
pub mod ti;

pub use alphabet::{Alphabet, Word};
pub use builder::{coxeter, schlafli};
pub use enumerate::{EnumerationOptions, Enumerator, solve};
pub use error::*;
pub use presentation::Presentation;
pub use relation::{Relation, Row};
pub use solution::{Closure, Solution};
pub use table::CosetTable;
pub use ti::{CosetId, GeneratorId, PerCoset, PerGenerator};

/// Structs, traits, and functions.
pub mod prelude {
    pub use crate::ti::TypedIndex;
    pub use crate::{
        Alphabet, Closure, CosetId, EnumerationOptions, GeneratorId, Presentation, Solution, Word,
        coxeter, schlafli, solve,
    };
}
