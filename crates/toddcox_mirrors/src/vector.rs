//! N-dimensional vector math.

use std::fmt;
use std::ops::*;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::Float;

/// Constructs an N-dimensional vector, using the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional vector. Reading a component out of bounds returns zero.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector(pub SmallVec<[Float; 4]>);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl Vector {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Returns a zero vector.
    pub fn zero(ndim: usize) -> Self {
        let mut ret = Self::EMPTY;
        ret.resize(ndim);
        ret
    }

    /// Returns the number of stored components.
    pub fn ndim(&self) -> usize {
        self.0.len()
    }
    /// Returns a component of the vector, or zero if the index is out of
    /// bounds.
    pub fn get(&self, idx: usize) -> Float {
        self.0.get(idx).copied().unwrap_or(0.0)
    }
    /// Returns an iterator over the stored components.
    pub fn iter(&self) -> impl '_ + Iterator<Item = Float> {
        self.0.iter().copied()
    }

    /// Resizes the vector in-place, padding with zeros.
    pub fn resize(&mut self, ndim: usize) {
        self.0.resize(ndim, 0.0);
    }
    /// Returns a copy of the vector padded with zeros up to `ndim`.
    #[must_use]
    pub fn pad(&self, ndim: usize) -> Vector {
        let mut ret = self.clone();
        if ret.ndim() < ndim {
            ret.resize(ndim);
        }
        ret
    }

    /// Returns an iterator over two vectors, both padded to the same length.
    pub fn zip<'a>(a: &'a Vector, b: &'a Vector) -> impl 'a + Iterator<Item = (Float, Float)> {
        let ndim = std::cmp::max(a.ndim(), b.ndim());
        (0..ndim).map(move |i| (a.get(i), b.get(i)))
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, rhs: &Vector) -> Float {
        // Trailing components of the longer vector only multiply zeros.
        std::iter::zip(self.iter(), rhs.iter())
            .map(|(l, r)| l * r)
            .sum()
    }
    /// Returns the squared magnitude of the vector.
    pub fn mag2(&self) -> Float {
        self.dot(self)
    }
    /// Returns the magnitude of the vector.
    pub fn mag(&self) -> Float {
        self.mag2().sqrt()
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    pub fn scale(&self, scalar: Float) -> Vector {
        self.iter().map(|x| x * scalar).collect()
    }

    /// Returns the component of the vector that is parallel to `axis`.
    ///
    /// Returns `None` if `axis` is zero.
    pub fn projected_to(&self, axis: &Vector) -> Option<Vector> {
        let scale_factor = self.dot(axis) / axis.mag2();
        scale_factor.is_finite().then(|| axis.scale(scale_factor))
    }
    /// Returns the reflection of the vector across the hyperplane through the
    /// origin perpendicular to `axis`.
    ///
    /// Returns `None` if `axis` is zero.
    pub fn reflected_across(&self, axis: &Vector) -> Option<Vector> {
        Some(self - self.projected_to(axis)? * 2.0)
    }
}

macro_rules! impl_zero_padded_op {
    (impl $trait_name:ident for $lhs:ty, $rhs:ty { fn $fn_name:ident() }) => {
        impl $trait_name<$rhs> for $lhs {
            type Output = Vector;

            fn $fn_name(self, rhs: $rhs) -> Self::Output {
                Vector::zip(&self, &rhs)
                    .map(|(l, r)| l.$fn_name(r))
                    .collect()
            }
        }
    };
}
macro_rules! impl_vector_ops {
    (impl for $type_name:ty) => {
        impl_zero_padded_op!(impl Add for $type_name, Vector { fn add() });
        impl_zero_padded_op!(impl Add for $type_name, &'_ Vector { fn add() });
        impl_zero_padded_op!(impl Sub for $type_name, Vector { fn sub() });
        impl_zero_padded_op!(impl Sub for $type_name, &'_ Vector { fn sub() });

        impl Neg for $type_name {
            type Output = Vector;

            fn neg(self) -> Self::Output {
                self.iter().map(|x| -x).collect()
            }
        }

        impl Mul<Float> for $type_name {
            type Output = Vector;

            fn mul(self, rhs: Float) -> Self::Output {
                self.scale(rhs)
            }
        }
    };
}
impl_vector_ops!(impl for Vector);
impl_vector_ops!(impl for &'_ Vector);

impl Index<usize> for Vector {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let ndim = self.ndim();
        self.0.get_mut(index).unwrap_or_else(|| {
            panic!(
                "vector index out of bounds: the dimensionality is {ndim} but the index is {index}",
            )
        })
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
