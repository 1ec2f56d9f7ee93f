pub mod defaults;

use crate::cli::{AnalyzeArgs, PackArgs, RegionShape};
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use dpdgeom::engine::config as core_config;
use dpdgeom::packing::Region;
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBoxConfig {
    lengths: Option<[f64; 3]>,
    periodic: Option<[bool; 3]>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialHistogramConfig {
    #[serde(rename = "segment-length")]
    segment_length: Option<f64>,
    normalize: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    #[serde(rename = "box")]
    box_config: Option<PartialBoxConfig>,
    histogram: Option<PartialHistogramConfig>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &AnalyzeArgs) -> Result<core_config::AnalysisConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let box_config = self.box_config.take().unwrap_or_default();
        let histogram_config = self.histogram.take().unwrap_or_default();

        let lengths = box_config.lengths.ok_or_else(|| {
            CliError::Config("`box.lengths` is required in the config file or via --set.".into())
        })?;
        let segment_length = args
            .segment_length
            .or(histogram_config.segment_length)
            .ok_or_else(|| {
                CliError::Config(
                    "`histogram.segment-length` is required in the config file or via CLI argument."
                        .into(),
                )
            })?;
        let normalize = args.normalize
            || histogram_config
                .normalize
                .unwrap_or(defaults.normalize);

        core_config::AnalysisConfigBuilder::new()
            .box_lengths(Vector3::from(lengths))
            .periodic(box_config.periodic.unwrap_or(defaults.periodic))
            .segment_length(segment_length)
            .normalize(normalize)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "box.lengths" => {
                    self.box_config
                        .get_or_insert_with(Default::default)
                        .lengths = Some(parse_triple(key, value_str)?);
                }
                "box.periodic" => {
                    self.box_config
                        .get_or_insert_with(Default::default)
                        .periodic = Some(parse_triple(key, value_str)?);
                }
                "histogram.segment-length" => {
                    self.histogram
                        .get_or_insert_with(Default::default)
                        .segment_length = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                "histogram.normalize" => {
                    self.histogram
                        .get_or_insert_with(Default::default)
                        .normalize = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Parses `a,b,c` into three values of the same type.
fn parse_triple<T: std::str::FromStr>(key: &str, value_str: &str) -> Result<[T; 3]> {
    let invalid = || {
        CliError::Config(format!(
            "Invalid value for {}: '{}'. Expected three comma-separated values.",
            key, value_str
        ))
    };
    let values = value_str
        .split(',')
        .map(|part| part.trim().parse::<T>().map_err(|_| invalid()))
        .collect::<Result<Vec<T>>>()?;
    <[T; 3]>::try_from(values).map_err(|_| invalid())
}

fn vector_from_args(values: &[f64], flag: &str) -> Result<Vector3<f64>> {
    match values {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(CliError::Argument(format!(
            "{} expects exactly three values",
            flag
        ))),
    }
}

pub fn packing_config_from_args(args: &PackArgs) -> Result<core_config::PackingConfig> {
    let region = match args.region {
        RegionShape::Cuboid => {
            let lengths = args.box_lengths.as_deref().ok_or_else(|| {
                CliError::Argument("--box X Y Z is required for a cuboid region".into())
            })?;
            let lengths = vector_from_args(lengths, "--box")?;
            Region::Cuboid {
                x: lengths.x,
                y: lengths.y,
                z: lengths.z,
            }
        }
        RegionShape::Sphere => Region::Sphere {
            radius: args.radius.ok_or_else(|| {
                CliError::Argument("--radius is required for a sphere region".into())
            })?,
        },
    };

    let mut builder = core_config::PackingConfigBuilder::new()
        .lattice(args.lattice)
        .region(region)
        .particle_radius(args.particle_radius);
    if let Some(start) = args.start.as_deref() {
        builder = builder.start(vector_from_args(start, "--start")?);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}
