//! Trace replay module.

mod runner;
mod stats;
mod trace;

pub use runner::{QueryOutcome, ReplayRunner};
pub use stats::ReplayStats;
pub use trace::TraceReader;
