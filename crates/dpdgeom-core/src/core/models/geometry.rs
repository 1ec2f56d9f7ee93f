use crate::core::utils::geometry::minimum_image_component;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Box length along {axis} must be positive and finite (got {value})")]
    NonPositiveBoxLength { axis: Axis, value: f64 },

    #[error("Segment length must be positive and finite (got {0})")]
    NonPositiveSegmentLength(f64),
}

#[inline]
fn is_positive_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// An orthorhombic simulation box with an independent periodic flag per axis.
///
/// Half-lengths are cached at construction since every minimum-image fold needs them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    lengths: Vector3<f64>,
    half_lengths: Vector3<f64>,
    periodic: [bool; 3],
}

impl BoxGeometry {
    /// Creates a box, rejecting any non-positive (or non-finite) length.
    pub fn new(lengths: Vector3<f64>, periodic: [bool; 3]) -> Result<Self, GeometryError> {
        for axis in Axis::ALL {
            let value = lengths[axis.index()];
            if !is_positive_length(value) {
                return Err(GeometryError::NonPositiveBoxLength { axis, value });
            }
        }
        Ok(Self {
            lengths,
            half_lengths: lengths * 0.5,
            periodic,
        })
    }

    /// A box periodic along all three axes.
    pub fn periodic(lengths: Vector3<f64>) -> Result<Self, GeometryError> {
        Self::new(lengths, [true; 3])
    }

    /// A box without any periodic boundary; distances are plain Euclidean distances.
    pub fn open(lengths: Vector3<f64>) -> Result<Self, GeometryError> {
        Self::new(lengths, [false; 3])
    }

    pub fn cubic(length: f64, periodic: bool) -> Result<Self, GeometryError> {
        Self::new(Vector3::new(length, length, length), [periodic; 3])
    }

    #[inline]
    pub fn lengths(&self) -> &Vector3<f64> {
        &self.lengths
    }

    #[inline]
    pub fn half_lengths(&self) -> &Vector3<f64> {
        &self.half_lengths
    }

    #[inline]
    pub fn periodic_flags(&self) -> [bool; 3] {
        self.periodic
    }

    #[inline]
    pub fn is_periodic(&self, axis: Axis) -> bool {
        self.periodic[axis.index()]
    }

    pub fn is_fully_periodic(&self) -> bool {
        self.periodic.iter().all(|&p| p)
    }

    pub fn volume(&self) -> f64 {
        self.lengths.x * self.lengths.y * self.lengths.z
    }

    pub fn min_half_length(&self) -> f64 {
        self.half_lengths
            .x
            .min(self.half_lengths.y)
            .min(self.half_lengths.z)
    }

    /// Applies the minimum-image convention on the periodic axes only.
    #[inline]
    pub fn minimum_image(&self, delta: &Vector3<f64>) -> Vector3<f64> {
        let mut folded = *delta;
        for i in 0..3 {
            if self.periodic[i] {
                folded[i] =
                    minimum_image_component(delta[i], self.lengths[i], self.half_lengths[i]);
            }
        }
        folded
    }

    #[inline]
    pub fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        self.minimum_image(&(b - a)).norm()
    }
}

/// A fully periodic box plus the bin width used for distance histograms.
///
/// The smallest half box length is the largest distance that is binned: beyond it a pair
/// could also be seen through a wrapped image and would be counted ambiguously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentedBoxGeometry {
    geometry: BoxGeometry,
    segment_length: f64,
    max_binned_distance: f64,
}

impl SegmentedBoxGeometry {
    pub fn new(lengths: Vector3<f64>, segment_length: f64) -> Result<Self, GeometryError> {
        let geometry = BoxGeometry::periodic(lengths)?;
        if !is_positive_length(segment_length) {
            return Err(GeometryError::NonPositiveSegmentLength(segment_length));
        }
        Ok(Self {
            geometry,
            segment_length,
            max_binned_distance: geometry.min_half_length(),
        })
    }

    pub fn cubic(length: f64, segment_length: f64) -> Result<Self, GeometryError> {
        Self::new(Vector3::new(length, length, length), segment_length)
    }

    #[inline]
    pub fn box_geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    #[inline]
    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    #[inline]
    pub fn max_binned_distance(&self) -> f64 {
        self.max_binned_distance
    }

    /// Number of bins needed to hold every distance up to the binning cutoff.
    pub fn max_bin_count(&self) -> usize {
        (self.max_binned_distance / self.segment_length) as usize + 1
    }

    #[inline]
    pub fn distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        self.geometry.distance(a, b)
    }

    /// Bin of a distance by truncating division, `None` beyond the binning cutoff.
    ///
    /// A distance of exactly `k * segment_length` falls into bin `k`.
    #[inline]
    pub fn bin_index(&self, distance: f64) -> Option<usize> {
        if distance <= self.max_binned_distance {
            Some((distance / self.segment_length) as usize)
        } else {
            None
        }
    }
}
