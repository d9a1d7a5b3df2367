//! # Contracts
//!
//! Shared data structures for the wind measurement workspace.
//! Every other crate depends on this one; it depends on none of them.
//!
//! ## Units
//! Vectors, altitudes and times are carried in the caller's native units.
//! Nothing in the workspace converts between unit systems.

mod config;
mod error;
mod estimate;
mod sample;
mod stats;
mod trace;

pub use config::*;
pub use error::*;
pub use estimate::WindEstimate;
pub use sample::{WindSample, WindVector};
pub use stats::StoreStats;
pub use trace::TraceRecord;
