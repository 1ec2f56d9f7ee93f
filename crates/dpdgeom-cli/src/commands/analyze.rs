use crate::cli::AnalyzeArgs;
use crate::config::PartialAnalysisConfig;
use crate::error::{CliError, Result};
use crate::ui::{CliProgressHandler, UiEvent};
use dpdgeom::{
    core::io::{snapshot::SnapshotFile, traits::PositionFile},
    core::models::snapshot::Snapshot,
    engine::config::AnalysisConfig,
    engine::error::EngineError,
    engine::progress::{Progress, ProgressReporter},
    workflows::{self, analyze::AnalysisReport},
};
use rayon::prelude::*;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::info;

#[derive(Serialize)]
struct DistanceRecord<'a> {
    species_a: &'a str,
    species_b: &'a str,
    average_distance: Option<f64>,
}

#[derive(Serialize)]
struct HistogramRecord<'a> {
    species_a: &'a str,
    species_b: &'a str,
    bin: usize,
    r_lower: f64,
    r_upper: f64,
    frequency: f64,
    g_r: Option<f64>,
}

pub async fn run(args: AnalyzeArgs, ui_sender: mpsc::Sender<UiEvent>) -> Result<()> {
    let partial_config = PartialAnalysisConfig::from_file(&args.config)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let snapshots = args
        .inputs
        .iter()
        .map(|path| {
            info!("Loading snapshot from {:?}", path);
            SnapshotFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let progress_handler = CliProgressHandler::new(ui_sender);

    println!("Analyzing {} snapshot(s)...", snapshots.len());
    let reports = tokio::task::block_in_place(|| {
        analyze_snapshots(&snapshots, &config, &progress_handler)
    })?;

    for (i, report) in reports.iter().enumerate() {
        let prefix = numbered_prefix(&args.output, i + 1, reports.len());
        let distances_path = with_suffix(&prefix, ".distances.csv");
        let histograms_path = with_suffix(&prefix, ".histograms.csv");

        info!("Writing results for {:?} to {:?}", &args.inputs[i], &prefix);
        write_distances(report, &distances_path)?;
        write_histograms(report, &histograms_path)?;

        println!(
            "✓ {} -> {}, {}",
            args.inputs[i].display(),
            distances_path.display(),
            histograms_path.display()
        );
    }

    Ok(())
}

/// A single snapshot reports its phases in detail; several snapshots run in parallel and only
/// report overall completion.
fn analyze_snapshots(
    snapshots: &[Snapshot],
    config: &AnalysisConfig,
    progress_handler: &CliProgressHandler,
) -> Result<Vec<AnalysisReport>> {
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    if let [snapshot] = snapshots {
        return Ok(vec![workflows::analyze::run(snapshot, config, &reporter)?]);
    }

    reporter.report(Progress::PhaseStart {
        name: "Analyzing Snapshots",
    });
    reporter.report(Progress::TaskStart {
        total_steps: snapshots.len() as u64,
    });

    let reports = snapshots
        .par_iter()
        .map(|snapshot| {
            let report = workflows::analyze::run(snapshot, config, &ProgressReporter::new());
            reporter.report(Progress::TaskIncrement);
            report
        })
        .collect::<std::result::Result<Vec<_>, EngineError>>();

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(reports?)
}

fn numbered_prefix(base: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        base.to_path_buf()
    } else {
        with_suffix(base, &format!("_{}", index))
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn write_distances(report: &AnalysisReport, path: &Path) -> Result<()> {
    let to_error = |e: csv::Error| CliError::FileWriting {
        path: path.to_path_buf(),
        source: e.into(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    for (i, j) in report.species_pairs() {
        writer
            .serialize(DistanceRecord {
                species_a: &report.species_names[i],
                species_b: &report.species_names[j],
                average_distance: report.average_distances[i][j],
            })
            .map_err(to_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_histograms(report: &AnalysisReport, path: &Path) -> Result<()> {
    let to_error = |e: csv::Error| CliError::FileWriting {
        path: path.to_path_buf(),
        source: e.into(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    for (i, j) in report.species_pairs() {
        let Some(histogram) = report.histograms[i][j].as_ref() else {
            continue;
        };
        let radial = report
            .radial_distributions
            .as_ref()
            .and_then(|table| table[i][j].as_ref());

        for (bin, &frequency) in histogram.frequencies().iter().enumerate() {
            let (r_lower, r_upper) = histogram.bin_range(bin);
            writer
                .serialize(HistogramRecord {
                    species_a: &report.species_names[i],
                    species_b: &report.species_names[j],
                    bin,
                    r_lower,
                    r_upper,
                    frequency,
                    g_r: radial.and_then(|g| g.get(bin).copied()),
                })
                .map_err(to_error)?;
        }
    }
    writer.flush()?;
    Ok(())
}
