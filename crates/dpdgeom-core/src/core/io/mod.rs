//! Provides input/output for particle snapshots.
//!
//! Snapshots are the hand-off point between the external simulation engine and the
//! analysis workflows: the engine's output is converted to this plain-text layout and packing
//! results are written in it before being turned into simulation input.

pub mod snapshot;
pub mod traits;
