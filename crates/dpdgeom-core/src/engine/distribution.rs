use crate::core::models::geometry::SegmentedBoxGeometry;
use crate::core::models::histogram::{BinCounts, DistanceHistogram};
use nalgebra::Point3;
use tracing::debug;

/// Lower-triangular table of histograms indexed `[i][j]` with `j <= i`.
pub type SpeciesHistograms = Vec<Vec<Option<DistanceHistogram>>>;

/// Distance histograms (radial distribution support) in a fully periodic box.
///
/// Only pairs within the smallest half box length are binned; farther pairs are dropped
/// rather than collected in an overflow bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionCalculator {
    geometry: SegmentedBoxGeometry,
}

impl DistributionCalculator {
    pub fn new(geometry: SegmentedBoxGeometry) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &SegmentedBoxGeometry {
        &self.geometry
    }

    /// Counts sized once for every bin up to the cutoff, so accumulation never reallocates.
    fn empty_counts(&self) -> BinCounts {
        BinCounts::with_capacity(self.geometry.max_bin_count())
    }

    /// Raw bin counts of one particle set against itself.
    ///
    /// Each pair is visited once (`j > i`) and credited twice, once for each direction.
    pub fn bin_counts(&self, positions: &[Point3<f64>]) -> Option<BinCounts> {
        if positions.is_empty() {
            return None;
        }

        let mut total = self.empty_counts();
        let mut source = self.empty_counts();
        for (i, a) in positions.iter().enumerate() {
            source.clear();
            for b in &positions[i + 1..] {
                if let Some(bin) = self.geometry.bin_index(self.geometry.distance(a, b)) {
                    source.increment(bin, 2);
                }
            }
            total.accumulate_source(&source);
        }
        Some(total)
    }

    /// Raw bin counts of every particle of `positions_a` against every particle of
    /// `positions_b`, credited once per pair.
    pub fn cross_bin_counts(
        &self,
        positions_a: &[Point3<f64>],
        positions_b: &[Point3<f64>],
    ) -> Option<BinCounts> {
        if positions_a.is_empty() || positions_b.is_empty() {
            return None;
        }

        let mut total = self.empty_counts();
        let mut source = self.empty_counts();
        for a in positions_a {
            source.clear();
            for b in positions_b {
                if let Some(bin) = self.geometry.bin_index(self.geometry.distance(a, b)) {
                    source.increment(bin, 1);
                }
            }
            total.accumulate_source(&source);
        }
        Some(total)
    }

    /// Average neighbor count per particle and distance bin for one particle set.
    pub fn bin_frequencies(&self, positions: &[Point3<f64>]) -> Option<DistanceHistogram> {
        self.bin_counts(positions)?
            .average(self.geometry.segment_length())
    }

    /// Average number of `positions_b` neighbors per `positions_a` particle and distance bin.
    pub fn cross_bin_frequencies(
        &self,
        positions_a: &[Point3<f64>],
        positions_b: &[Point3<f64>],
    ) -> Option<DistanceHistogram> {
        self.cross_bin_counts(positions_a, positions_b)?
            .average(self.geometry.segment_length())
    }

    /// Histograms for every species pair.
    ///
    /// Entry `[i][i]` is the equal-species histogram of species `i`; entry `[i][j]` with
    /// `j < i` uses species `i` as source and species `j` as partner. Entries are computed
    /// independently, an empty species only leaves its own entries unavailable.
    pub fn particle_type_bin_frequencies<S>(&self, positions_by_type: &[S]) -> SpeciesHistograms
    where
        S: AsRef<[Point3<f64>]>,
    {
        debug!(
            species = positions_by_type.len(),
            "Computing distance histograms for all species pairs."
        );
        positions_by_type
            .iter()
            .enumerate()
            .map(|(i, positions_i)| {
                (0..=i)
                    .map(|j| {
                        if i == j {
                            self.bin_frequencies(positions_i.as_ref())
                        } else {
                            self.cross_bin_frequencies(
                                positions_i.as_ref(),
                                positions_by_type[j].as_ref(),
                            )
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
