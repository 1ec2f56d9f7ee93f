use super::all_positive;
use super::layers::{LayerPattern, fill_cuboid, fill_sphere_mirrored};
use crate::core::utils::geometry::translated;
use nalgebra::{Point3, Vector3};

/// Simple-cubic grid with spacing `2r` filling `[0, x] x [0, y] x [0, z]` from the origin.
pub fn simple_cubic_in_cuboid(
    particle_radius: f64,
    x: f64,
    y: f64,
    z: f64,
) -> Option<Vec<Point3<f64>>> {
    if !all_positive(&[particle_radius, x, y, z]) {
        return None;
    }
    let pattern = LayerPattern::square(particle_radius);
    Some(fill_cuboid(&[pattern], 2.0 * particle_radius, x, y, z))
}

pub fn simple_cubic_in_cuboid_at(
    particle_radius: f64,
    x: f64,
    y: f64,
    z: f64,
    start: &Vector3<f64>,
) -> Option<Vec<Point3<f64>>> {
    simple_cubic_in_cuboid(particle_radius, x, y, z).map(|points| translated(points, start))
}

/// Simple-cubic grid points with spacing `2r` inside the origin-centered sphere of `radius`.
///
/// The grid is symmetric under reflection in all three coordinate planes.
pub fn simple_cubic_in_sphere(particle_radius: f64, radius: f64) -> Option<Vec<Point3<f64>>> {
    if !all_positive(&[particle_radius, radius]) {
        return None;
    }
    let pattern = LayerPattern::square(particle_radius);
    Some(fill_sphere_mirrored(&[pattern], 2.0 * particle_radius, radius))
}

pub fn simple_cubic_in_sphere_at(
    particle_radius: f64,
    radius: f64,
    start: &Vector3<f64>,
) -> Option<Vec<Point3<f64>>> {
    simple_cubic_in_sphere(particle_radius, radius).map(|points| translated(points, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::Region;
    use crate::packing::test_support::{assert_valid_packing, is_mirror_symmetric};

    #[test]
    fn unit_radius_in_cube_of_edge_two_gives_eight_corners() {
        let points = simple_cubic_in_cuboid(1.0, 2.0, 2.0, 2.0).unwrap();
        assert_eq!(points.len(), 8);
        for corner in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(2.0, 0.0, 2.0),
        ] {
            assert!(points.contains(&corner));
        }
    }

    #[test]
    fn cuboid_count_is_product_of_axis_counts() {
        let points = simple_cubic_in_cuboid(0.5, 3.5, 1.0, 0.9).unwrap();
        // x: 0..3 -> 4, y: 0,1 -> 2, z: 0 -> 1
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn cuboid_packing_is_contained_and_non_overlapping() {
        let region = Region::Cuboid {
            x: 7.3,
            y: 4.1,
            z: 5.9,
        };
        let points = simple_cubic_in_cuboid(0.7, 7.3, 4.1, 5.9).unwrap();
        assert_valid_packing(&points, 0.7, region);
    }

    #[test]
    fn cuboid_rejects_non_positive_or_non_finite_inputs() {
        assert!(simple_cubic_in_cuboid(0.0, 1.0, 1.0, 1.0).is_none());
        assert!(simple_cubic_in_cuboid(1.0, -1.0, 1.0, 1.0).is_none());
        assert!(simple_cubic_in_cuboid(1.0, 1.0, 0.0, 1.0).is_none());
        assert!(simple_cubic_in_cuboid(1.0, 1.0, 1.0, f64::INFINITY).is_none());
        assert!(simple_cubic_in_cuboid(f64::NAN, 1.0, 1.0, 1.0).is_none());
    }

    #[test]
    fn cuboid_at_translates_every_point() {
        let start = Vector3::new(1.0, 2.0, 3.0);
        let plain = simple_cubic_in_cuboid(1.0, 4.0, 4.0, 4.0).unwrap();
        let moved = simple_cubic_in_cuboid_at(1.0, 4.0, 4.0, 4.0, &start).unwrap();
        assert_eq!(
            moved,
            plain.iter().map(|p| p + start).collect::<Vec<_>>()
        );
    }

    #[test]
    fn sphere_of_radius_two_holds_origin_and_six_neighbors() {
        let points = simple_cubic_in_sphere(1.0, 2.1).unwrap();
        assert_eq!(points.len(), 7);
    }

    #[test]
    fn sphere_includes_grid_points_on_the_boundary() {
        // Axis neighbors at exactly 2r.
        assert_eq!(simple_cubic_in_sphere(1.0, 2.0).unwrap().len(), 7);
        // The corners (±2, ±2, ±2) of the 3x3x3 block lie at exactly 2√3.
        assert_eq!(
            simple_cubic_in_sphere(1.0, 2.0 * 3f64.sqrt()).unwrap().len(),
            27
        );
        // (±4, ±2, ±2) and permutations lie at exactly 2√6.
        assert_eq!(
            simple_cubic_in_sphere(1.0, 2.0 * 6f64.sqrt()).unwrap().len(),
            81
        );
    }

    #[test]
    fn sphere_between_shells_excludes_the_next_shell() {
        // (±2, ±2, 0) and permutations lie at 2√2 < 2.9 < 2√3.
        let points = simple_cubic_in_sphere(1.0, 2.9).unwrap();
        assert_eq!(points.len(), 19);
    }

    #[test]
    fn sphere_packing_is_contained_symmetric_and_non_overlapping() {
        let region = Region::Sphere { radius: 6.3 };
        let points = simple_cubic_in_sphere(0.8, 6.3).unwrap();
        assert_valid_packing(&points, 0.8, region);
        for axis in 0..3 {
            assert!(is_mirror_symmetric(&points, axis));
        }
    }

    #[test]
    fn sphere_smaller_than_particle_still_holds_center() {
        assert_eq!(simple_cubic_in_sphere(1.0, 0.5).unwrap().len(), 1);
    }

    #[test]
    fn sphere_rejects_invalid_inputs() {
        assert!(simple_cubic_in_sphere(-1.0, 3.0).is_none());
        assert!(simple_cubic_in_sphere(1.0, 0.0).is_none());
        assert!(simple_cubic_in_sphere_at(1.0, f64::NAN, &Vector3::zeros()).is_none());
    }

    #[test]
    fn sphere_at_translates_every_point() {
        let start = Vector3::new(-5.0, 0.0, 5.0);
        let moved = simple_cubic_in_sphere_at(1.0, 3.0, &start).unwrap();
        let region = Region::Sphere { radius: 3.0 };
        assert!(
            moved
                .iter()
                .all(|p| region.contains(&(p - start), 1e-9))
        );
    }
}
