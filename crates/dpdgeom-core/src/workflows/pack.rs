use crate::engine::config::PackingConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::packing;
use nalgebra::Point3;
use tracing::{info, instrument};

#[instrument(skip_all, name = "packing_workflow")]
pub fn run(
    config: &PackingConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Point3<f64>>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Lattice Generation",
    });
    info!(
        lattice = %config.lattice,
        region = ?config.region,
        particle_radius = config.particle_radius,
        "Generating packing."
    );

    let points = packing::generate(
        config.lattice,
        config.region,
        config.particle_radius,
        config.start.as_ref(),
    )
    .ok_or(EngineError::InvalidPacking {
        lattice: config.lattice,
        region: config.region,
        particle_radius: config.particle_radius,
    })?;

    reporter.report(Progress::Message(format!(
        "Placed {} particle(s).",
        points.len()
    )));
    reporter.report(Progress::PhaseFinish);

    info!("Packing complete with {} site(s).", points.len());
    Ok(points)
}
