//! # DPDGEOM Core Library
//!
//! The spatial geometry and statistics engine used around dissipative particle dynamics (DPD)
//! simulations: it seeds starting geometries with dense sphere packings and post-processes
//! particle snapshots into average distances and radial distribution histograms.
//!
//! ## Architectural Philosophy
//!
//! The library follows a layered layout so that the numerical kernels stay pure and the
//! orchestration around them stays thin.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BoxGeometry`, `SegmentedBoxGeometry`,
//!   histograms, particle snapshots), geometric utilities and snapshot I/O.
//!
//! - **[`engine`]: The Numerical Core.** The distance and distribution engines. Every engine is
//!   configured once at construction and is immutable afterwards, so a single instance can be
//!   shared freely between threads.
//!
//! - **[`packing`]: The Lattice Generators.** Simple-cubic, hexagonal-close-packed and
//!   face-centered-cubic sphere centers inside cuboid and spherical regions.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures (snapshot analysis, packing
//!   generation) with configuration validation and progress reporting.

pub mod core;
pub mod engine;
pub mod packing;
pub mod workflows;
