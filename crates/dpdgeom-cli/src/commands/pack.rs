use crate::cli::PackArgs;
use crate::config::defaults::DefaultsConfig;
use crate::config::packing_config_from_args;
use crate::error::{CliError, Result};
use crate::ui::{CliProgressHandler, UiEvent};
use dpdgeom::{
    core::io::{snapshot::SnapshotFile, traits::PositionFile},
    core::models::snapshot::{Snapshot, Species},
    engine::progress::ProgressReporter,
    workflows,
};
use tokio::sync::mpsc;
use tracing::info;

pub async fn run(args: PackArgs, ui_sender: mpsc::Sender<UiEvent>) -> Result<()> {
    let config = packing_config_from_args(&args)?;

    let progress_handler = CliProgressHandler::new(ui_sender);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Generating {} packing...", config.lattice);
    info!("Invoking the core packing workflow...");

    let points = tokio::task::block_in_place(|| workflows::pack::run(&config, &reporter))?;

    let species_name = args
        .species
        .unwrap_or_else(|| DefaultsConfig::default().species_name);
    let snapshot = Snapshot::from_species(vec![Species::new(species_name, points)]);

    info!("Writing packing to {:?}", &args.output);
    SnapshotFile::write_to_path(&snapshot, &args.output).map_err(|e| CliError::FileWriting {
        path: args.output.clone(),
        source: e.into(),
    })?;

    println!(
        "✓ {} particle(s) written to: {}",
        snapshot.particle_count(),
        args.output.display()
    );
    Ok(())
}
