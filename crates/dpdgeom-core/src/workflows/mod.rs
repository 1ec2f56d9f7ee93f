//! # Workflows Module
//!
//! End-to-end entry points used by front ends.
//!
//! Each workflow validates its configuration, drives the engines and reports progress through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter).
//!
//! - **Analysis** ([`analyze`]) - average distances and distance histograms for every species
//!   pair of a snapshot, optionally normalized to radial distribution functions.
//! - **Packing** ([`pack`]) - starting coordinates on a dense lattice.

pub mod analyze;
pub mod pack;
