use crate::core::models::geometry::BoxGeometry;
use itertools::Itertools;
use nalgebra::Point3;

/// Ensemble-averaged pairwise distances inside a box.
///
/// Periodic axes of the box are folded with the minimum-image convention; the other axes use
/// the raw coordinate difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCalculator {
    geometry: BoxGeometry,
}

impl DistanceCalculator {
    pub fn new(geometry: BoxGeometry) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    #[inline]
    pub fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        self.geometry.distance(a, b)
    }

    /// Mean distance over every unordered pair `{i < j}` of one particle set.
    ///
    /// Returns `None` when the set has no pair at all (empty or single particle).
    pub fn average_distance(&self, positions: &[Point3<f64>]) -> Option<f64> {
        if positions.is_empty() {
            return None;
        }

        let mut sum = 0.0;
        let mut pair_count: u64 = 0;
        for (a, b) in positions.iter().tuple_combinations() {
            sum += self.distance(a, b);
            pair_count += 1;
        }

        if pair_count == 0 {
            return None;
        }
        Some(sum / pair_count as f64)
    }

    /// Mean distance over the full cross product of two particle sets.
    ///
    /// Returns `None` when either set is empty.
    pub fn average_cross_distance(
        &self,
        positions_a: &[Point3<f64>],
        positions_b: &[Point3<f64>],
    ) -> Option<f64> {
        if positions_a.is_empty() || positions_b.is_empty() {
            return None;
        }

        let sum: f64 = positions_a
            .iter()
            .cartesian_product(positions_b)
            .map(|(a, b)| self.distance(a, b))
            .sum();

        let pair_count = positions_a.len() as u64 * positions_b.len() as u64;
        Some(sum / pair_count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn periodic_calculator(length: f64) -> DistanceCalculator {
        DistanceCalculator::new(BoxGeometry::cubic(length, true).unwrap())
    }

    fn open_calculator() -> DistanceCalculator {
        DistanceCalculator::new(BoxGeometry::cubic(100.0, false).unwrap())
    }

    fn scattered_points() -> Vec<Point3<f64>> {
        (0..17)
            .map(|i| {
                let t = i as f64;
                Point3::new(
                    (t * 3.7) % 10.0,
                    (t * t * 1.3) % 10.0,
                    (t * 7.1 + 0.5) % 10.0,
                )
            })
            .collect()
    }

    #[test]
    fn average_distance_of_empty_set_is_unavailable() {
        assert!(open_calculator().average_distance(&[]).is_none());
    }

    #[test]
    fn average_distance_of_single_particle_is_unavailable() {
        assert!(
            open_calculator()
                .average_distance(&[Point3::origin()])
                .is_none()
        );
    }

    #[test]
    fn average_distance_of_coincident_pair_is_zero_not_unavailable() {
        let avg = open_calculator().average_distance(&[Point3::origin(), Point3::origin()]);
        assert_eq!(avg, Some(0.0));
    }

    #[test]
    fn average_distance_of_equilateral_triangle_is_side_length() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 3.0f64.sqrt(), 0.0),
        ];
        let avg = open_calculator().average_distance(&points).unwrap();
        assert!(f64_approx_equal(avg, 2.0));
    }

    #[test]
    fn average_distance_matches_naive_double_loop() {
        let calculator = periodic_calculator(10.0);
        let points = scattered_points();

        let mut sum = 0.0;
        let mut pairs = 0;
        for i in 0..points.len() {
            for j in 0..points.len() {
                if i < j {
                    let delta = calculator.geometry().minimum_image(&(points[j] - points[i]));
                    sum += delta.norm();
                    pairs += 1;
                }
            }
        }

        let avg = calculator.average_distance(&points).unwrap();
        assert_eq!(pairs, points.len() * (points.len() - 1) / 2);
        assert!(f64_approx_equal(avg, sum / pairs as f64));
    }

    #[test]
    fn average_distance_uses_minimum_image_on_periodic_axes() {
        let calculator = periodic_calculator(10.0);
        let points = vec![Point3::new(1.0, 5.0, 5.0), Point3::new(9.5, 5.0, 5.0)];
        let avg = calculator.average_distance(&points).unwrap();
        assert!(f64_approx_equal(avg, 1.5));
    }

    #[test]
    fn average_distance_ignores_folding_on_open_axes() {
        let geometry =
            BoxGeometry::new(Vector3::new(10.0, 10.0, 10.0), [false, true, true]).unwrap();
        let calculator = DistanceCalculator::new(geometry);
        let points = vec![Point3::new(1.0, 5.0, 5.0), Point3::new(9.5, 5.0, 5.0)];
        let avg = calculator.average_distance(&points).unwrap();
        assert!(f64_approx_equal(avg, 8.5));
    }

    #[test]
    fn average_cross_distance_requires_both_sets() {
        let calculator = open_calculator();
        let points = vec![Point3::origin()];
        assert!(calculator.average_cross_distance(&points, &[]).is_none());
        assert!(calculator.average_cross_distance(&[], &points).is_none());
    }

    #[test]
    fn average_cross_distance_averages_full_cross_product() {
        let calculator = open_calculator();
        let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 2.0, 0.0)];
        let b = vec![Point3::new(3.0, 0.0, 0.0)];
        let expected = (3.0 + 13.0f64.sqrt()) / 2.0;
        let avg = calculator.average_cross_distance(&a, &b).unwrap();
        assert!(f64_approx_equal(avg, expected));
    }

    #[test]
    fn average_cross_distance_is_symmetric() {
        let calculator = periodic_calculator(10.0);
        let points = scattered_points();
        let (a, b) = points.split_at(7);
        let ab = calculator.average_cross_distance(a, b).unwrap();
        let ba = calculator.average_cross_distance(b, a).unwrap();
        assert!(f64_approx_equal(ab, ba));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let calculator = periodic_calculator(10.0);
        let points = scattered_points();
        let first = calculator.average_distance(&points).unwrap();
        let second = calculator.average_distance(&points).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
