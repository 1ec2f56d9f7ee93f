use crate::core::models::geometry::{BoxGeometry, SegmentedBoxGeometry};
use crate::core::models::snapshot::Snapshot;
use crate::engine::config::AnalysisConfig;
use crate::engine::distance::DistanceCalculator;
use crate::engine::distribution::{DistributionCalculator, SpeciesHistograms};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use tracing::{info, instrument, warn};

/// Lower-triangular table of g(r) profiles, laid out like [`SpeciesHistograms`].
pub type SpeciesRadialDistributions = Vec<Vec<Option<Vec<f64>>>>;

/// Pair statistics of one snapshot.
///
/// All tables are lower-triangular and indexed `[i][j]` with `j <= i` in snapshot species
/// order; the diagonal holds same-species values.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub species_names: Vec<String>,
    pub particle_counts: Vec<usize>,
    pub segment_length: f64,
    pub average_distances: Vec<Vec<Option<f64>>>,
    pub histograms: SpeciesHistograms,
    pub radial_distributions: Option<SpeciesRadialDistributions>,
}

impl AnalysisReport {
    /// All `(i, j)` index pairs of the lower-triangular tables, row by row.
    pub fn species_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.species_names.len()).flat_map(|i| (0..=i).map(move |j| (i, j)))
    }
}

#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    snapshot: &Snapshot,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let box_geometry = BoxGeometry::new(config.box_config.lengths, config.box_config.periodic)?;
    let segmented_geometry =
        SegmentedBoxGeometry::new(config.box_config.lengths, config.histogram.segment_length)?;
    if snapshot.is_empty() {
        return Err(EngineError::EmptySnapshot);
    }
    if !box_geometry.is_fully_periodic() {
        warn!("Histograms always fold all three axes, regardless of the periodic flags.");
    }
    info!(
        species = snapshot.species_count(),
        particles = snapshot.particle_count(),
        "Starting snapshot analysis."
    );
    let positions = snapshot.positions_by_species();
    reporter.report(Progress::PhaseFinish);

    let average_distances =
        compute_average_distances(&DistanceCalculator::new(box_geometry), &positions, reporter);

    reporter.report(Progress::PhaseStart {
        name: "Distance Histograms",
    });
    let histograms =
        DistributionCalculator::new(segmented_geometry).particle_type_bin_frequencies(&positions);
    reporter.report(Progress::PhaseFinish);

    let radial_distributions = config.histogram.normalize.then(|| {
        normalize_histograms(&histograms, &positions, box_geometry.volume())
    });

    info!("Analysis complete.");
    Ok(AnalysisReport {
        species_names: snapshot
            .species_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        particle_counts: positions.iter().map(|p| p.len()).collect(),
        segment_length: config.histogram.segment_length,
        average_distances,
        histograms,
        radial_distributions,
    })
}

fn compute_average_distances(
    calculator: &DistanceCalculator,
    positions: &[&[Point3<f64>]],
    reporter: &ProgressReporter,
) -> Vec<Vec<Option<f64>>> {
    reporter.report(Progress::PhaseStart {
        name: "Average Distances",
    });
    let n = positions.len() as u64;
    reporter.report(Progress::TaskStart {
        total_steps: n * (n + 1) / 2,
    });

    let table = positions
        .iter()
        .enumerate()
        .map(|(i, positions_i)| {
            (0..=i)
                .map(|j| {
                    let average = if i == j {
                        calculator.average_distance(positions_i)
                    } else {
                        calculator.average_cross_distance(positions_i, positions[j])
                    };
                    reporter.report(Progress::TaskIncrement);
                    average
                })
                .collect()
        })
        .collect();

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    table
}

/// Same-species partners exclude the source particle itself.
fn normalize_histograms(
    histograms: &SpeciesHistograms,
    positions: &[&[Point3<f64>]],
    volume: f64,
) -> SpeciesRadialDistributions {
    histograms
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, histogram)| {
                    let partners = if i == j {
                        positions[i].len().saturating_sub(1)
                    } else {
                        positions[j].len()
                    };
                    histogram
                        .as_ref()
                        .and_then(|h| h.radial_distribution(partners, volume))
                })
                .collect()
        })
        .collect()
}
