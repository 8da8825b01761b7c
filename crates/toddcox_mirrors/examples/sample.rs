//! Prints the coset tables for the vertices of the icosahedron and for the
//! pentagon group, followed by the mirror normals of the icosahedral group.
//!
//! Run with `RUST_LOG=debug` to see enumeration summaries.

use eyre::Result;
use toddcox::schlafli;
use toddcox_mirrors::{Orbit, PlaneAngles, vector};

fn main() -> Result<()> {
    env_logger::init();

    let cosets = schlafli(["x", "y", "z"], ["x", "y"], &[5, 3])?.solve()?;
    let face_cosets = schlafli(["x", "y"], [""; 0], &[5])?.solve()?;

    let angles = PlaneAngles::from_schlafli(["x", "y", "z"], &[5, 3])?;
    let normals = angles.normals()?;

    println!("{cosets}");
    println!("{face_cosets}");
    for (name, normal) in &normals {
        println!("{name}: {normal}");
    }

    let orbit = Orbit::from_solution(&cosets, &normals, vector![0.0, 0.0, 1.0])?;
    println!();
    for (coset, point) in orbit.points().iter() {
        println!("{coset}: {point}");
    }

    Ok(())
}
