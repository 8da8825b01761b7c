//! Error types.

use crate::ti::{CosetId, GeneratorId, IndexOverflow};

/// Error that can occur while building a presentation.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("overflow ({0})")]
    Overflow(#[from] IndexOverflow),

    #[error("duplicate generator {0:?}")]
    DuplicateGenerator(String),
    #[error("unknown generator {0:?}")]
    UnknownGenerator(String),
    #[error("subgroup generator {0:?} is not a generator of the group")]
    UnknownSubgroupGenerator(String),
    #[error("relator {0} is empty")]
    EmptyRelator(usize),

    #[error("invalid bond between {a:?} and {b:?} with order {order}")]
    InvalidBond { a: String, b: String, order: usize },
    #[error("bond between {0:?} and {1:?} is given more than once")]
    DuplicateBond(String, String),
    #[error("schlafli symbol for {gens} generators needs {expected} coefficients but got {got}")]
    SchlafliLength {
        gens: usize,
        expected: usize,
        got: usize,
    },
}

/// Result type returned by presentation construction.
pub type PresentationResult<T> = Result<T, PresentationError>;

/// Error that can occur during coset enumeration.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("invalid presentation: {0}")]
    Presentation(#[from] PresentationError),
    #[error("overflow ({0})")]
    Overflow(#[from] IndexOverflow),

    /// Two deductions disagree about the same table entry, which means the
    /// presentation requires two cosets to coincide.
    #[error(
        "inconsistent presentation: coset {coset} under generator {generator} \
         is already {existing} but was deduced to be {attempted}"
    )]
    Conflict {
        coset: CosetId,
        generator: GeneratorId,
        existing: CosetId,
        attempted: CosetId,
    },
    /// Two cosets were deduced to map to the same coset under one generator,
    /// which would stop the generator from acting as a permutation.
    #[error(
        "inconsistent presentation: coset {target} is already reached from \
         {existing} under generator {generator} but was deduced to be reached \
         from {attempted}"
    )]
    ReverseConflict {
        target: CosetId,
        generator: GeneratorId,
        existing: CosetId,
        attempted: CosetId,
    },

    #[error("coset table exceeded the limit of {0} cosets")]
    TooManyCosets(usize),
}

/// Result type returned by coset enumeration.
pub type EnumerationResult<T> = Result<T, EnumerationError>;
