//! # Packing Module
//!
//! Non-overlapping sphere centers on simple-cubic, hexagonal-close-packed and
//! face-centered-cubic lattices, used to seed the starting geometry of a simulation.
//!
//! Every generator returns the centers of spheres of a given particle radius whose centers lie
//! inside the requested region: the cuboid `[0, x] x [0, y] x [0, z]` or the origin-centered
//! sphere of a given radius. Neighboring centers are exactly one particle diameter apart. The
//! `_at` variants translate the result by a start vector. Non-positive or non-finite inputs
//! yield `None`.

mod cubic;
mod face_centered;
mod hexagonal;
mod layers;

pub use cubic::{
    simple_cubic_in_cuboid, simple_cubic_in_cuboid_at, simple_cubic_in_sphere,
    simple_cubic_in_sphere_at,
};
pub use face_centered::{
    face_centered_cubic_in_cuboid, face_centered_cubic_in_cuboid_at,
    face_centered_cubic_in_sphere, face_centered_cubic_in_sphere_at,
};
pub use hexagonal::{
    hexagonal_close_in_cuboid, hexagonal_close_in_cuboid_at, hexagonal_close_in_sphere,
    hexagonal_close_in_sphere_at,
};

use crate::core::utils::geometry::translated;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;
pub(crate) const SQRT_6: f64 = 2.449_489_742_783_178;

/// Vertical distance between two touching close-packed layers.
#[inline]
pub(crate) fn close_packed_layer_spacing(particle_radius: f64) -> f64 {
    2.0 / 3.0 * SQRT_6 * particle_radius
}

#[inline]
pub(crate) fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lattice {
    #[serde(alias = "sc")]
    SimpleCubic,
    #[serde(alias = "hcp")]
    HexagonalClose,
    #[serde(alias = "fcc")]
    FaceCenteredCubic,
}

#[derive(Debug, Error)]
#[error("Invalid lattice name '{0}' (expected sc, hcp or fcc)")]
pub struct ParseLatticeError(String);

impl FromStr for Lattice {
    type Err = ParseLatticeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sc" | "simple-cubic" => Ok(Lattice::SimpleCubic),
            "hcp" | "hexagonal-close" => Ok(Lattice::HexagonalClose),
            "fcc" | "face-centered-cubic" => Ok(Lattice::FaceCenteredCubic),
            _ => Err(ParseLatticeError(s.to_string())),
        }
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Lattice::SimpleCubic => "simple-cubic",
                Lattice::HexagonalClose => "hexagonal-close",
                Lattice::FaceCenteredCubic => "face-centered-cubic",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Region {
    /// The box `[0, x] x [0, y] x [0, z]`.
    Cuboid { x: f64, y: f64, z: f64 },
    /// The origin-centered ball of the given radius.
    Sphere { radius: f64 },
}

impl Region {
    /// Whether `point` lies inside the region, widened by `tolerance` on every side.
    pub fn contains(&self, point: &Point3<f64>, tolerance: f64) -> bool {
        match *self {
            Region::Cuboid { x, y, z } => {
                let inside = |value: f64, upper: f64| {
                    value >= -tolerance && value <= upper + tolerance
                };
                inside(point.x, x) && inside(point.y, y) && inside(point.z, z)
            }
            Region::Sphere { radius } => point.coords.norm() <= radius + tolerance,
        }
    }
}

/// Generates the packing of `lattice` inside `region`, optionally translated by `start`.
pub fn generate(
    lattice: Lattice,
    region: Region,
    particle_radius: f64,
    start: Option<&Vector3<f64>>,
) -> Option<Vec<Point3<f64>>> {
    let points = match (lattice, region) {
        (Lattice::SimpleCubic, Region::Cuboid { x, y, z }) => {
            simple_cubic_in_cuboid(particle_radius, x, y, z)
        }
        (Lattice::SimpleCubic, Region::Sphere { radius }) => {
            simple_cubic_in_sphere(particle_radius, radius)
        }
        (Lattice::HexagonalClose, Region::Cuboid { x, y, z }) => {
            hexagonal_close_in_cuboid(particle_radius, x, y, z)
        }
        (Lattice::HexagonalClose, Region::Sphere { radius }) => {
            hexagonal_close_in_sphere(particle_radius, radius)
        }
        (Lattice::FaceCenteredCubic, Region::Cuboid { x, y, z }) => {
            face_centered_cubic_in_cuboid(particle_radius, x, y, z)
        }
        (Lattice::FaceCenteredCubic, Region::Sphere { radius }) => {
            face_centered_cubic_in_sphere(particle_radius, radius)
        }
    }?;

    debug!(
        "Generated {} {} sites in {:?}",
        points.len(),
        lattice,
        region
    );

    Some(match start {
        Some(start) => translated(points, start),
        None => points,
    })
}

/// Number of sites of an untranslated packing.
///
/// The points are generated in full and then dropped.
pub fn count(lattice: Lattice, region: Region, particle_radius: f64) -> Option<usize> {
    generate(lattice, region, particle_radius, None).map(|points| points.len())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Region;
    use crate::core::utils::geometry::min_pairwise_distance;
    use nalgebra::Point3;

    pub const TOLERANCE: f64 = 1e-9;

    pub fn assert_valid_packing(points: &[Point3<f64>], particle_radius: f64, region: Region) {
        assert!(!points.is_empty(), "packing in {region:?} is empty");
        for point in points {
            assert!(
                region.contains(point, TOLERANCE),
                "{point:?} lies outside {region:?}"
            );
        }
        if let Some(min) = min_pairwise_distance(points) {
            assert!(
                min >= 2.0 * particle_radius - TOLERANCE,
                "spheres overlap: minimum center distance {min} < {}",
                2.0 * particle_radius
            );
        }
    }

    /// Every point has its mirror image across the plane normal to `axis`.
    pub fn is_mirror_symmetric(points: &[Point3<f64>], axis: usize) -> bool {
        points.iter().all(|p| {
            let mut mirrored = *p;
            mirrored[axis] = -mirrored[axis];
            points.iter().any(|q| (q - mirrored).norm() < TOLERANCE)
        })
    }
}
