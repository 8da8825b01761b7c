/// Error computing mirror geometry.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MirrorError {
    #[error("bond between {a} and {b} must join two distinct planes with order at least 2; got {order}")]
    InvalidOrder { a: String, b: String, order: usize },
    #[error("expected {expected} Schläfli coefficients for {planes} planes; got {got}")]
    SchlafliLength {
        planes: usize,
        expected: usize,
        got: usize,
    },
    #[error("mirror {0} is parallel to a combination of earlier mirrors")]
    Degenerate(String),
    #[error("angles at mirror {0} do not fit in spherical space")]
    Hyperbolic(String),
    #[error("no mirror normal for generator {0}")]
    MissingNormal(String),
    #[error("mirror normal for generator {0} is zero")]
    ZeroNormal(String),
}

/// Result type for [`MirrorError`].
pub type MirrorResult<T> = Result<T, MirrorError>;
