use super::layers::{FACE_CENTERED_STACKING, LayerPattern, fill_cuboid, fill_sphere_stacked};
use super::{all_positive, close_packed_layer_spacing};
use crate::core::utils::geometry::translated;
use nalgebra::{Point3, Vector3};

fn stacking(particle_radius: f64) -> [LayerPattern; 3] {
    FACE_CENTERED_STACKING.map(|position| LayerPattern::close_packed(particle_radius, position))
}

/// Face-centered cubic packing (ABCABC stacking of close-packed planes) filling
/// `[0, x] x [0, y] x [0, z]` from the origin.
pub fn face_centered_cubic_in_cuboid(
    particle_radius: f64,
    x: f64,
    y: f64,
    z: f64,
) -> Option<Vec<Point3<f64>>> {
    if !all_positive(&[particle_radius, x, y, z]) {
        return None;
    }
    Some(fill_cuboid(
        &stacking(particle_radius),
        close_packed_layer_spacing(particle_radius),
        x,
        y,
        z,
    ))
}

pub fn face_centered_cubic_in_cuboid_at(
    particle_radius: f64,
    x: f64,
    y: f64,
    z: f64,
    start: &Vector3<f64>,
) -> Option<Vec<Point3<f64>>> {
    face_centered_cubic_in_cuboid(particle_radius, x, y, z).map(|points| translated(points, start))
}

/// Face-centered cubic packing inside the origin-centered sphere of `radius`.
///
/// The layer below an A plane is a C plane, not a B plane, so the lower half is generated by
/// continuing the stacking cycle downwards.
pub fn face_centered_cubic_in_sphere(
    particle_radius: f64,
    radius: f64,
) -> Option<Vec<Point3<f64>>> {
    if !all_positive(&[particle_radius, radius]) {
        return None;
    }
    Some(fill_sphere_stacked(
        &stacking(particle_radius),
        close_packed_layer_spacing(particle_radius),
        radius,
    ))
}

pub fn face_centered_cubic_in_sphere_at(
    particle_radius: f64,
    radius: f64,
    start: &Vector3<f64>,
) -> Option<Vec<Point3<f64>>> {
    face_centered_cubic_in_sphere(particle_radius, radius).map(|points| translated(points, start))
}
