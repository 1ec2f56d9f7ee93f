use clap::{Args, Parser, Subcommand, ValueEnum};
use dpdgeom::packing::Lattice;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "DPDGEOM CLI - Dense sphere packings for starting geometries and pair statistics (average distances, radial distribution histograms) for particle snapshots.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to analyze several snapshots at once.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate non-overlapping particle positions on a dense lattice.
    Pack(PackArgs),
    /// Compute average distances and distance histograms for particle snapshots.
    Analyze(AnalyzeArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionShape {
    /// The box [0, X] x [0, Y] x [0, Z]; requires --box.
    Cuboid,
    /// The origin-centered sphere; requires --radius.
    Sphere,
}

/// Arguments for the `pack` subcommand.
#[derive(Args, Debug)]
pub struct PackArgs {
    /// Lattice type: sc, hcp or fcc.
    #[arg(short, long, required = true, value_name = "LATTICE")]
    pub lattice: Lattice,

    /// Shape of the region to fill.
    #[arg(short, long, value_enum, required = true)]
    pub region: RegionShape,

    /// Edge lengths of the cuboid region.
    #[arg(long = "box", num_args = 3, value_names = ["X", "Y", "Z"])]
    pub box_lengths: Option<Vec<f64>>,

    /// Radius of the spherical region.
    #[arg(long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Radius of a single particle; neighboring particles are one diameter apart.
    #[arg(short = 'p', long, required = true, value_name = "FLOAT")]
    pub particle_radius: f64,

    /// Translate every generated position by this vector.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub start: Option<Vec<f64>>,

    /// Species name written for every particle.
    #[arg(short, long, value_name = "NAME")]
    pub species: Option<String>,

    /// Path for the output snapshot file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Snapshot file(s) to analyze. Several snapshots are processed in parallel.
    #[arg(short, long = "input", required = true, num_args = 1.., value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Output path prefix. Writes `<PREFIX>.distances.csv` and `<PREFIX>.histograms.csv`;
    /// with several inputs the prefix is numbered per snapshot.
    #[arg(short, long, required = true, value_name = "PREFIX")]
    pub output: PathBuf,

    /// Path to the analysis configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Override `histogram.segment-length` from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub segment_length: Option<f64>,

    /// Also write radial distribution functions g(r), overriding `histogram.normalize`.
    #[arg(long)]
    pub normalize: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S box.lengths=10,10,12
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
