//! # Core Models Module
//!
//! This module contains the value types the engines operate on.
//!
//! ## Key Components
//!
//! - [`geometry`] - Orthorhombic boxes with per-axis periodicity and the segmented box used
//!   for distance histograms
//! - [`histogram`] - Growable integer bin counts and the averaged distance histogram
//! - [`snapshot`] - Particle positions grouped by species
//!
//! ## Usage
//!
//! ```ignore
//! use dpdgeom::core::models::geometry::BoxGeometry;
//! use nalgebra::{Point3, Vector3};
//!
//! let geometry = BoxGeometry::new(Vector3::new(10.0, 10.0, 10.0), [true, true, false])?;
//! let d = geometry.distance(&Point3::new(1.0, 0.0, 0.0), &Point3::new(9.5, 0.0, 0.0));
//! assert!((d - 1.5).abs() < 1e-12);
//! ```

pub mod geometry;
pub mod histogram;
pub mod snapshot;
