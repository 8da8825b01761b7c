//! Mirror geometry for reflection groups enumerated with [`toddcox`].
//!
//! [`PlaneAngles`] turns the dihedral angles between named mirror planes into
//! unit normal vectors, and [`Orbit`] reflects a seed point through a coset
//! table to get one point per coset.
//!
//! ```
//! use toddcox_mirrors::{Orbit, PlaneAngles, vector};
//!
//! let presentation = toddcox::schlafli(["x", "y", "z"], ["x", "y"], &[5, 3]).unwrap();
//! let solution = presentation.solve().unwrap();
//!
//! let normals = PlaneAngles::from_schlafli(["x", "y", "z"], &[5, 3])
//!     .unwrap()
//!     .normals()
//!     .unwrap();
//! let orbit = Orbit::from_solution(&solution, &normals, vector![0.0, 0.0, 1.0]).unwrap();
//! assert_eq!(orbit.len(), 12); // vertices of the icosahedron
//! ```

pub use smallvec;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons.
pub const EPSILON: Float = 0.000001;

#[macro_use]
mod vector;
mod error;
mod orbit;
mod plane_angles;

pub use error::{MirrorError, MirrorResult};
pub use orbit::Orbit;
pub use plane_angles::PlaneAngles;
pub use vector::Vector;
