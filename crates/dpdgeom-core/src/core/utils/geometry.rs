use itertools::Itertools;
use nalgebra::{Point3, Vector3};

/// Folds a single coordinate difference into `[-half_length, half_length]`.
///
/// Positions are expected to lie inside the box, so one shift by `length` is always enough.
#[inline]
pub fn minimum_image_component(delta: f64, length: f64, half_length: f64) -> f64 {
    if delta > half_length {
        delta - length
    } else if delta < -half_length {
        delta + length
    } else {
        delta
    }
}

/// Adds `start` to every point in place.
pub fn translate(points: &mut [Point3<f64>], start: &Vector3<f64>) {
    for point in points.iter_mut() {
        *point += start;
    }
}

pub fn translated(mut points: Vec<Point3<f64>>, start: &Vector3<f64>) -> Vec<Point3<f64>> {
    translate(&mut points, start);
    points
}

/// Smallest plain Euclidean distance between any two points, `None` for fewer than two points.
pub fn min_pairwise_distance(points: &[Point3<f64>]) -> Option<f64> {
    points
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (a - b).norm())
        .reduce(f64::min)
}
