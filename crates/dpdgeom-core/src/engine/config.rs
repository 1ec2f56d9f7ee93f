use crate::packing::{Lattice, Region};
use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxConfig {
    pub lengths: Vector3<f64>,
    pub periodic: [bool; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramConfig {
    pub segment_length: f64,
    /// Convert averaged histograms into g(r) using the box volume as reference.
    pub normalize: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub box_config: BoxConfig,
    pub histogram: HistogramConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    box_lengths: Option<Vector3<f64>>,
    periodic: Option<[bool; 3]>,
    segment_length: Option<f64>,
    normalize: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn box_lengths(mut self, lengths: Vector3<f64>) -> Self {
        self.box_lengths = Some(lengths);
        self
    }
    pub fn periodic(mut self, flags: [bool; 3]) -> Self {
        self.periodic = Some(flags);
        self
    }
    pub fn segment_length(mut self, length: f64) -> Self {
        self.segment_length = Some(length);
        self
    }
    pub fn normalize(mut self, enabled: bool) -> Self {
        self.normalize = Some(enabled);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let box_config = BoxConfig {
            lengths: self
                .box_lengths
                .ok_or(ConfigError::MissingParameter("box_lengths"))?,
            periodic: self.periodic.unwrap_or([true; 3]),
        };
        let histogram = HistogramConfig {
            segment_length: self
                .segment_length
                .ok_or(ConfigError::MissingParameter("segment_length"))?,
            normalize: self.normalize.unwrap_or(false),
        };
        Ok(AnalysisConfig {
            box_config,
            histogram,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackingConfig {
    pub lattice: Lattice,
    pub region: Region,
    pub particle_radius: f64,
    pub start: Option<Vector3<f64>>,
}

#[derive(Default)]
pub struct PackingConfigBuilder {
    lattice: Option<Lattice>,
    region: Option<Region>,
    particle_radius: Option<f64>,
    start: Option<Vector3<f64>>,
}

impl PackingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lattice(mut self, lattice: Lattice) -> Self {
        self.lattice = Some(lattice);
        self
    }
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
    pub fn particle_radius(mut self, radius: f64) -> Self {
        self.particle_radius = Some(radius);
        self
    }
    pub fn start(mut self, start: Vector3<f64>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn build(self) -> Result<PackingConfig, ConfigError> {
        Ok(PackingConfig {
            lattice: self
                .lattice
                .ok_or(ConfigError::MissingParameter("lattice"))?,
            region: self.region.ok_or(ConfigError::MissingParameter("region"))?,
            particle_radius: self
                .particle_radius
                .ok_or(ConfigError::MissingParameter("particle_radius"))?,
            start: self.start,
        })
    }
}
