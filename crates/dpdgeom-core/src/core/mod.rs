//! # Core Module
//!
//! This module provides the fundamental building blocks shared by every engine in DPDGEOM.
//!
//! ## Overview
//!
//! The core module holds the value types describing a simulation box and the statistics
//! computed on top of it, together with the small geometric helpers and the snapshot format
//! used to move particle positions in and out of the library.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Box geometries, distance histograms and particle snapshots
//! - **Utilities** ([`utils`]) - Minimum-image folding, translation and pairwise checks
//! - **File I/O** ([`io`]) - Reading and writing plain-text particle snapshots
//!
//! ## Invariants
//!
//! Every model validates its parameters once, at construction. A value that exists is a valid
//! value, so the engines never re-check box lengths or segment lengths on the hot path.

pub mod io;
pub mod models;
pub mod utils;
