use serde::Serialize;
use std::f64::consts::PI;

/// Raw integer bin counts accumulated over a number of source particles.
///
/// The backing storage grows on demand: incrementing a bin past the current end zero-fills
/// every slot in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinCounts {
    counts: Vec<u64>,
    sources: u64,
}

impl BinCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `bins` bins up front; the histogram still starts empty.
    pub fn with_capacity(bins: usize) -> Self {
        Self {
            counts: Vec::with_capacity(bins),
            sources: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.counts.capacity()
    }

    #[inline]
    pub fn increment(&mut self, bin: usize, amount: u64) {
        if bin >= self.counts.len() {
            self.counts.resize(bin + 1, 0);
        }
        self.counts[bin] += amount;
    }

    /// Adds the bins of `other` and counts it as one more source particle.
    pub fn accumulate_source(&mut self, other: &BinCounts) {
        if other.counts.len() > self.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (total, &count) in self.counts.iter_mut().zip(&other.counts) {
            *total += count;
        }
        self.sources += 1;
    }

    /// Empties the bins but keeps the allocation for the next source particle.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.sources = 0;
    }

    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[inline]
    pub fn count(&self, bin: usize) -> u64 {
        self.counts.get(bin).copied().unwrap_or(0)
    }

    #[inline]
    pub fn sources(&self) -> u64 {
        self.sources
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Divides every bin by the number of accumulated source particles.
    ///
    /// Returns `None` if no source particle was accumulated.
    pub fn average(&self, segment_length: f64) -> Option<DistanceHistogram> {
        if self.sources == 0 {
            return None;
        }
        let sources = self.sources as f64;
        Some(DistanceHistogram {
            segment_length,
            frequencies: self.counts.iter().map(|&c| c as f64 / sources).collect(),
        })
    }
}

/// Average number of neighbors per source particle in each distance bin.
///
/// Bin `i` covers `[i * segment_length, (i + 1) * segment_length)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceHistogram {
    segment_length: f64,
    frequencies: Vec<f64>,
}

impl DistanceHistogram {
    pub fn new(segment_length: f64, frequencies: Vec<f64>) -> Self {
        Self {
            segment_length,
            frequencies,
        }
    }

    #[inline]
    pub fn segment_length(&self) -> f64 {
        self.segment_length
    }

    #[inline]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Frequency of a bin; bins past the end of the histogram are empty.
    #[inline]
    pub fn frequency(&self, bin: usize) -> f64 {
        self.frequencies.get(bin).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.frequencies.iter().sum()
    }

    pub fn bin_range(&self, bin: usize) -> (f64, f64) {
        let lower = bin as f64 * self.segment_length;
        (lower, lower + self.segment_length)
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        (bin as f64 + 0.5) * self.segment_length
    }

    /// Normalizes the profile to g(r) against an ideal gas of `partner_count` particles
    /// spread uniformly over `volume`.
    ///
    /// Each bin is divided by the expected number of partners in its spherical shell,
    /// `density * 4/3 * pi * (r_upper^3 - r_lower^3)`.
    pub fn radial_distribution(&self, partner_count: usize, volume: f64) -> Option<Vec<f64>> {
        if partner_count == 0 || !(volume > 0.0) {
            return None;
        }
        let density = partner_count as f64 / volume;
        Some(
            self.frequencies
                .iter()
                .enumerate()
                .map(|(bin, &frequency)| {
                    let (lower, upper) = self.bin_range(bin);
                    let shell_volume = 4.0 / 3.0 * PI * (upper.powi(3) - lower.powi(3));
                    frequency / (density * shell_volume)
                })
                .collect(),
        )
    }
}
