use super::config::ConfigError;
use crate::core::models::geometry::GeometryError;
use crate::packing::{Lattice, Region};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid geometry: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Snapshot contains no particles")]
    EmptySnapshot,

    #[error(
        "Cannot pack {lattice} lattice into {region:?} with particle radius {particle_radius}: \
         all lengths must be positive and finite"
    )]
    InvalidPacking {
        lattice: Lattice,
        region: Region,
        particle_radius: f64,
    },
}
