//! Store status snapshot (for diagnostics)

use serde::{Deserialize, Serialize};

/// Measurement store status
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Samples currently held
    pub len: usize,

    /// Maximum samples held
    pub capacity: usize,

    /// Samples accepted since construction or last reset
    pub inserted: u64,

    /// Samples evicted since construction or last reset
    pub evicted: u64,

    /// Oldest sample time
    pub oldest_time: Option<f64>,

    /// Newest sample time
    pub newest_time: Option<f64>,
}
