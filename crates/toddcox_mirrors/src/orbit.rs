//! Points obtained by reflecting a seed point through a coset table.

use toddcox::{CosetId, GeneratorId, PerCoset, PerGenerator, Solution};

use crate::error::{MirrorError, MirrorResult};
use crate::{EPSILON, Vector};

/// Orbit of a seed point under a reflection group, with one point per coset
/// of a subgroup.
///
/// The seed should lie on the mirror of every generator that fixes the base
/// coset. Otherwise, different words for the same coset lead to different
/// points, and the orbit is not well-defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    points: PerCoset<Vector>,
    edges: Vec<(CosetId, CosetId, GeneratorId)>,
}

impl Orbit {
    /// Reflects `seed` along the representative word of each coset in
    /// `solution`. The mirror for each generator is looked up by name in
    /// `normals`.
    pub fn from_solution(
        solution: &Solution,
        normals: &[(String, Vector)],
        seed: Vector,
    ) -> MirrorResult<Self> {
        let alphabet = solution.alphabet();
        let mirrors: PerGenerator<&Vector> = alphabet
            .names()
            .map(|name| {
                normals
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, normal)| normal)
                    .ok_or_else(|| MirrorError::MissingNormal(name.to_owned()))
            })
            .collect::<MirrorResult<_>>()?;

        for g in alphabet.ids() {
            if solution.get(CosetId::BASE, g) == Some(CosetId::BASE)
                && seed.dot(mirrors[g]).abs() > EPSILON
            {
                log::warn!(
                    "seed {seed} is not on the mirror of subgroup generator {}",
                    alphabet.name(g),
                );
            }
        }

        let points = solution
            .representatives()
            .iter_values()
            .map(|word| {
                word.iter().try_fold(seed.clone(), |point, &g| {
                    point
                        .reflected_across(mirrors[g])
                        .ok_or_else(|| MirrorError::ZeroNormal(alphabet.name(g).to_owned()))
                })
            })
            .collect::<MirrorResult<PerCoset<Vector>>>()?;

        let mut edges = vec![];
        for c in solution.cosets() {
            for g in alphabet.ids() {
                if let Some(t) = solution.get(c, g)
                    && c < t
                {
                    edges.push((c, t, g));
                }
            }
        }

        log::debug!(
            "orbit of {seed} has {} points and {} edges",
            points.len(),
            edges.len(),
        );

        Ok(Self { points, edges })
    }

    /// Returns the number of points, which is the number of cosets.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns whether there are no points. This is never true.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point for each coset.
    pub fn points(&self) -> &PerCoset<Vector> {
        &self.points
    }
    /// Returns each pair of distinct cosets joined by a generator, once per
    /// generator, with the lesser coset first.
    pub fn edges(&self) -> &[(CosetId, CosetId, GeneratorId)] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::PlaneAngles;

    fn icosahedron() -> (Solution, Vec<(String, Vector)>) {
        let solution = toddcox::schlafli(["x", "y", "z"], ["x", "y"], &[5, 3])
            .unwrap()
            .solve()
            .unwrap();
        let normals = PlaneAngles::from_schlafli(["x", "y", "z"], &[5, 3])
            .unwrap()
            .normals()
            .unwrap();
        (solution, normals)
    }

    #[test]
    fn test_icosahedron_vertices() {
        let (solution, normals) = icosahedron();
        let orbit = Orbit::from_solution(&solution, &normals, vector![0.0, 0.0, 1.0]).unwrap();
        assert_eq!(orbit.len(), 12);

        for p in orbit.points().iter_values() {
            assert_abs_diff_eq!(p.mag(), 1.0, epsilon = EPSILON);
        }
        for (a, b) in orbit.points().iter_values().tuple_combinations() {
            assert!((a - b).mag() > 0.1, "{a} and {b} coincide");
        }

        // Each mirror passes through 4 of the vertices and swaps the rest in
        // pairs.
        for g in solution.alphabet().ids() {
            let count = orbit.edges().iter().filter(|&&(_, _, h)| h == g).count();
            assert_eq!(count, 4);
        }
    }

    #[test]
    fn test_edges_are_reflections() {
        let (solution, normals) = icosahedron();
        let orbit = Orbit::from_solution(&solution, &normals, vector![0.0, 0.0, 1.0]).unwrap();
        for &(c, t, g) in orbit.edges() {
            assert!(c < t);
            let mirror = &normals[g.0 as usize].1;
            let reflected = orbit.points()[c].reflected_across(mirror).unwrap();
            for (l, r) in Vector::zip(&reflected, &orbit.points()[t]) {
                assert_abs_diff_eq!(l, r, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_missing_normal() {
        let (solution, mut normals) = icosahedron();
        normals.retain(|(name, _)| name != "y");
        assert_eq!(
            Orbit::from_solution(&solution, &normals, vector![0.0, 0.0, 1.0]),
            Err(MirrorError::MissingNormal("y".to_owned())),
        );
    }
}
