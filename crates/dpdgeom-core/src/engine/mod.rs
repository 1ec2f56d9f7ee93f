//! # Engine Module
//!
//! Pairwise distance statistics over particle position snapshots.
//!
//! ## Overview
//!
//! The engines are immutable value types built once from a validated box geometry and then
//! queried with borrowed position sets. Every query is pure, so a single engine can be shared
//! across threads by the caller.
//!
//! - **Distances** ([`distance`]) - ensemble-averaged pair distances with per-axis
//!   minimum-image folding
//! - **Distributions** ([`distribution`]) - binned pair-distance histograms for one, two or
//!   many particle species
//! - **Configuration** ([`config`]) - builders for analysis and packing parameters
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - workflow-level error type

pub mod config;
pub mod distance;
pub mod distribution;
pub mod error;
pub mod progress;
