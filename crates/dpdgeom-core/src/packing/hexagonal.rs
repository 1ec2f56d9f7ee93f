use super::layers::{HEXAGONAL_STACKING, LayerPattern, fill_cuboid, fill_sphere_mirrored};
use super::{all_positive, close_packed_layer_spacing};
use crate::core::utils::geometry::translated;
use nalgebra::{Point3, Vector3};

fn stacking(particle_radius: f64) -> [LayerPattern; 2] {
    HEXAGONAL_STACKING.map(|position| LayerPattern::close_packed(particle_radius, position))
}

/// Hexagonal close packing (ABAB stacking) filling `[0, x] x [0, y] x [0, z]` from the origin.
pub fn hexagonal_close_in_cuboid(
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

pub fn hexagonal_close_in_cuboid_at(
    particle_radius: f64,
    x: f64,
    y: f64,
    z: f64,
    start: &Vector3<f64>,
) -> Option<Vec<Point3<f64>>> {
    hexagonal_close_in_cuboid(particle_radius, x, y, z).map(|points| translated(points, start))
}

/// Hexagonal close packing inside the origin-centered sphere of `radius`.
///
/// An A layer sits at `z = 0`. ABAB stacking looks the same from above and below, so the
/// layers above the equator are reflected to the lower half.
pub fn hexagonal_close_in_sphere(particle_radius: f64, radius: f64) -> Option<Vec<Point3<f64>>> {
    if !all_positive(&[particle_radius, radius]) {
        return None;
    }
    Some(fill_sphere_mirrored(
        &stacking(particle_radius),
        close_packed_layer_spacing(particle_radius),
        radius,
    ))
}

pub fn hexagonal_close_in_sphere_at(
    particle_radius: f64,
    radius: f64,
    start: &Vector3<f64>,
) -> Option<Vec<Point3<f64>>> {
    hexagonal_close_in_sphere(particle_radius, radius).map(|points| translated(points, start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{Region, SQRT_3, simple_cubic_in_cuboid};
    use crate::packing::test_support::{TOLERANCE, assert_valid_packing, is_mirror_symmetric};

    #[test]
    fn single_layer_in_cuboid_has_staggered_rows() {
        let points = hexagonal_close_in_cuboid(1.0, 4.0, 4.0, 0.5).unwrap();
        // Rows at y = 0, √3, 2√3 hold 3, 2 and 3 spheres.
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn second_layer_sits_in_hollows_of_first() {
        let h = close_packed_layer_spacing(1.0);
        let points = hexagonal_close_in_cuboid(1.0, 6.0, 6.0, h + 0.1).unwrap();
        let upper: Vec<_> = points.iter().filter(|p| p.z > 0.0).collect();
        assert!(!upper.is_empty());
        assert!(upper.iter().all(|p| (p.z - h).abs() < TOLERANCE));
        let lower: Vec<_> = points.iter().filter(|p| p.z == 0.0).collect();
        for p in &upper {
            let nearest_horizontal = lower
                .iter()
                .map(|q| ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt())
                .fold(f64::INFINITY, f64::min);
            assert!((nearest_horizontal - 2.0 / SQRT_3).abs() < TOLERANCE);
        }
    }

    #[test]
    fn third_layer_repeats_first() {
        let h = close_packed_layer_spacing(1.0);
        let points = hexagonal_close_in_cuboid(1.0, 6.0, 6.0, 2.0 * h + 0.1).unwrap();
        let mut bottom: Vec<_> = points
            .iter()
            .filter(|p| p.z.abs() < TOLERANCE)
            .map(|p| (p.x, p.y))
            .collect();
        let mut top: Vec<_> = points
            .iter()
            .filter(|p| (p.z - 2.0 * h).abs() < TOLERANCE)
            .map(|p| (p.x, p.y))
            .collect();
        bottom.sort_by(|a, b| a.partial_cmp(b).unwrap());
        top.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(bottom, top);
    }

    #[test]
    fn cuboid_packing_is_contained_and_non_overlapping() {
        let region = Region::Cuboid {
            x: 8.0,
            y: 7.0,
            z: 6.5,
        };
        let points = hexagonal_close_in_cuboid(1.0, 8.0, 7.0, 6.5).unwrap();
        assert_valid_packing(&points, 1.0, region);
    }

    #[test]
    fn close_packing_is_denser_than_simple_cubic() {
        let hcp = hexagonal_close_in_cuboid(1.0, 12.0, 12.0, 12.0).unwrap();
        let sc = simple_cubic_in_cuboid(1.0, 12.0, 12.0, 12.0).unwrap();
        assert!(hcp.len() > sc.len());
    }

    #[test]
    fn sphere_holds_center_and_twelve_nearest_neighbors() {
        let points = hexagonal_close_in_sphere(1.0, 2.1).unwrap();
        assert_eq!(points.len(), 13);
    }

    #[test]
    fn sphere_packing_is_contained_and_non_overlapping() {
        let region = Region::Sphere { radius: 5.5 };
        let points = hexagonal_close_in_sphere(0.9, 5.5).unwrap();
        assert_valid_packing(&points, 0.9, region);
    }

    #[test]
    fn sphere_packing_is_symmetric_in_x_and_z() {
        let points = hexagonal_close_in_sphere(1.0, 4.5).unwrap();
        assert!(is_mirror_symmetric(&points, 0));
        assert!(is_mirror_symmetric(&points, 2));
    }

    #[test]
    fn invalid_inputs_yield_none() {
        assert!(hexagonal_close_in_cuboid(1.0, 0.0, 1.0, 1.0).is_none());
        assert!(hexagonal_close_in_cuboid_at(-1.0, 1.0, 1.0, 1.0, &Vector3::zeros()).is_none());
        assert!(hexagonal_close_in_sphere(1.0, -2.0).is_none());
        assert!(hexagonal_close_in_sphere_at(f64::NAN, 2.0, &Vector3::zeros()).is_none());
    }

    #[test]
    fn translated_variants_shift_by_start() {
        let start = Vector3::new(0.5, 0.5, 0.5);
        let plain = hexagonal_close_in_sphere(1.0, 3.0).unwrap();
        let moved = hexagonal_close_in_sphere_at(1.0, 3.0, &start).unwrap();
        assert_eq!(moved, plain.iter().map(|p| p + start).collect::<Vec<_>>());

        let plain = hexagonal_close_in_cuboid(1.0, 5.0, 5.0, 5.0).unwrap();
        let moved = hexagonal_close_in_cuboid_at(1.0, 5.0, 5.0, 5.0, &start).unwrap();
        assert_eq!(moved, plain.iter().map(|p| p + start).collect::<Vec<_>>());
    }
}
