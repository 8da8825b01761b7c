//! Dihedral angles between mirror planes.

use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::PI;

use itertools::Itertools;

use crate::error::{MirrorError, MirrorResult};
use crate::{EPSILON, Float, Vector};

/// Angles between named mirror planes.
///
/// Any pair of distinct planes without an explicit angle meets at a right
/// angle. Planes are kept sorted by name, which determines the order of
/// [`PlaneAngles::normals()`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaneAngles {
    planes: BTreeSet<String>,
    /// Angles keyed by plane pairs with the lesser name first.
    angles: BTreeMap<(String, String), Float>,
}

impl PlaneAngles {
    /// Angle between two planes with no explicit angle.
    pub const DEFAULT_ANGLE: Float = PI / 2.0;

    /// Constructs a set of planes that are all perpendicular to each other.
    pub fn new(planes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            planes: planes.into_iter().map(Into::into).collect(),
            angles: BTreeMap::new(),
        }
    }

    /// Constructs plane angles from a linear Coxeter-Dynkin diagram, where
    /// consecutive planes meet at `π / coefficient` and all others are
    /// perpendicular.
    pub fn from_schlafli(
        planes: impl IntoIterator<Item = impl Into<String>>,
        coefficients: &[usize],
    ) -> MirrorResult<Self> {
        let planes = planes.into_iter().map(Into::into).collect_vec();
        let expected = planes.len().saturating_sub(1);
        if coefficients.len() != expected {
            return Err(MirrorError::SchlafliLength {
                planes: planes.len(),
                expected,
                got: coefficients.len(),
            });
        }

        let mut ret = Self::new(planes.iter().cloned());
        for ((p, q), &order) in planes.iter().tuple_windows().zip(coefficients) {
            ret.set_order(p, q, order)?;
        }
        Ok(ret)
    }

    /// Returns the planes, in sorted order.
    pub fn planes(&self) -> impl '_ + Iterator<Item = &str> {
        self.planes.iter().map(String::as_str)
    }
    /// Returns the number of planes.
    pub fn len(&self) -> usize {
        self.planes.len()
    }
    /// Returns whether there are no planes.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Sets the angle between `p` and `q` to `π / order`, adding either plane
    /// if it is new.
    pub fn set_order(&mut self, p: &str, q: &str, order: usize) -> MirrorResult<()> {
        if p == q || order < 2 {
            return Err(MirrorError::InvalidOrder {
                a: p.to_owned(),
                b: q.to_owned(),
                order,
            });
        }
        self.planes.insert(p.to_owned());
        self.planes.insert(q.to_owned());
        self.angles.insert(Self::key(p, q), PI / order as Float);
        Ok(())
    }

    /// Returns the angle between two planes.
    pub fn angle(&self, p: &str, q: &str) -> Float {
        if p == q {
            return 0.0;
        }
        self.angles
            .get(&Self::key(p, q))
            .copied()
            .unwrap_or(Self::DEFAULT_ANGLE)
    }

    fn key(p: &str, q: &str) -> (String, String) {
        let (a, b) = if p <= q { (p, q) } else { (q, p) };
        (a.to_owned(), b.to_owned())
    }

    /// Returns a unit normal vector for each plane, in sorted order, such that
    /// the dot product of two normals is the cosine of the angle between their
    /// planes.
    ///
    /// The normals form a lower-triangular matrix: the `k`th normal has zeros
    /// after its `k`th component, and its `k`th component is positive. Each
    /// normal is padded to the number of planes.
    pub fn normals(&self) -> MirrorResult<Vec<(String, Vector)>> {
        let ndim = self.len();
        let mut normals: Vec<Vector> = vec![];

        for (k, p) in self.planes.iter().enumerate() {
            let mut normal = Vector::zero(ndim);

            // Forward substitution against the normals computed so far.
            for (m, (q, other)) in std::iter::zip(&self.planes, &normals).enumerate() {
                let pivot = other.get(m);
                if pivot.abs() < EPSILON {
                    return Err(MirrorError::Degenerate(q.clone()));
                }
                let partial: Float = (0..m).map(|i| normal.get(i) * other.get(i)).sum();
                normal[m] = (self.angle(p, q).cos() - partial) / pivot;
            }

            let radicand = 1.0 - normal.mag2();
            if radicand < -EPSILON {
                return Err(MirrorError::Hyperbolic(p.clone()));
            }
            normal[k] = radicand.max(0.0).sqrt();

            log::trace!("normal for mirror {p} is {normal}");
            normals.push(normal);
        }

        Ok(self.planes.iter().cloned().zip(normals).collect())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[track_caller]
    fn assert_normals_match_angles(angles: &PlaneAngles) {
        let normals = angles.normals().unwrap();
        assert_eq!(normals.len(), angles.len());
        for (p, n) in &normals {
            assert_eq!(n.ndim(), angles.len());
            assert_abs_diff_eq!(n.mag(), 1.0, epsilon = EPSILON);
            for (q, m) in &normals {
                assert_abs_diff_eq!(n.dot(m), angles.angle(p, q).cos(), epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_angles() {
        let mut a = PlaneAngles::new(["z"]);
        a.set_order("y", "x", 4).unwrap();
        assert_eq!(a.planes().collect_vec(), ["x", "y", "z"]);
        assert_eq!(a.angle("x", "y"), PI / 4.0);
        assert_eq!(a.angle("y", "x"), PI / 4.0);
        assert_eq!(a.angle("x", "z"), PI / 2.0);
        assert_eq!(a.angle("z", "z"), 0.0);

        assert!(matches!(
            a.set_order("x", "x", 3),
            Err(MirrorError::InvalidOrder { .. }),
        ));
        assert!(matches!(
            a.set_order("x", "w", 1),
            Err(MirrorError::InvalidOrder { .. }),
        ));
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_cube_normals() {
        let a = PlaneAngles::from_schlafli(["x", "y", "z"], &[4, 3]).unwrap();
        let normals = a.normals().unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let expected = [[1.0, 0.0, 0.0], [h, h, 0.0], [0.0, h, h]];
        for ((_, n), e) in std::iter::zip(&normals, expected) {
            for (i, x) in e.into_iter().enumerate() {
                assert_abs_diff_eq!(n.get(i), x, epsilon = EPSILON);
            }
        }
        assert_normals_match_angles(&a);
    }

    #[test]
    fn test_spherical_normals() {
        let names = ["a", "b", "c", "d", "e"];
        let cases: [&[usize]; 6] = [&[], &[5], &[5, 3], &[3, 3, 3], &[5, 3, 3], &[3, 4, 3]];
        for coefficients in cases {
            let planes = names[..=coefficients.len()].iter().copied();
            let a = PlaneAngles::from_schlafli(planes, coefficients).unwrap();
            assert_normals_match_angles(&a);
        }
    }

    #[test]
    fn test_euclidean_normals() {
        // The hexagonal tiling has three mirrors meeting in a line.
        let a = PlaneAngles::from_schlafli(["x", "y", "z"], &[6, 3]).unwrap();
        let normals = a.normals().unwrap();
        assert_abs_diff_eq!(normals[2].1.get(2), 0.0, epsilon = EPSILON);

        // A fourth mirror has nowhere to go.
        let a = PlaneAngles::from_schlafli(["a", "b", "c", "d"], &[4, 4, 3]).unwrap();
        assert_eq!(a.normals(), Err(MirrorError::Degenerate("c".to_owned())));
    }

    #[test]
    fn test_hyperbolic_normals() {
        let a = PlaneAngles::from_schlafli(["x", "y", "z"], &[7, 3]).unwrap();
        assert_eq!(a.normals(), Err(MirrorError::Hyperbolic("z".to_owned())));
    }

    #[test]
    fn test_schlafli_length() {
        assert_eq!(
            PlaneAngles::from_schlafli(["x", "y"], &[3, 3]),
            Err(MirrorError::SchlafliLength {
                planes: 2,
                expected: 1,
                got: 2,
            }),
        );
    }
}
