//! Wind list configuration contracts shared across crates.
//!
//! Every section and field has a default, so an empty document is a valid
//! configuration reproducing the classic wind list constants.

use serde::{Deserialize, Serialize};

/// Default number of samples retained by the store
pub const MAX_CAPACITY: usize = 200;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete wind list configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Store sizing
    #[serde(default)]
    pub store: StoreConfig,

    /// Eviction scoring
    #[serde(default)]
    pub eviction: EvictionConfig,

    /// Weighting kernel
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

/// Store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of retained samples
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CAPACITY,
        }
    }
}

/// Eviction score parameters
///
/// `score = quality_penalty * (quality_ceiling - quality) + age`.
/// With the defaults one quality point weighs as much as 600 time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvictionConfig {
    pub quality_penalty: i64,
    pub quality_ceiling: i32,
}

impl Default for EvictionConfig {
    fn default() -> Self {
        Self {
            quality_penalty: 600,
            quality_ceiling: 6,
        }
    }
}

/// Weighted estimation kernel parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Altitude difference at which a sample leaves the window
    pub altitude_range: f64,
    /// Time difference at which a sample leaves the window
    pub time_range: f64,
    /// Relative weight of sample quality
    pub quality_factor: f64,
    /// Relative weight of altitude proximity
    pub altitude_factor: f64,
    /// Relative weight of recency
    pub time_factor: f64,
    /// Sharpness of the recency kernel; smaller peaks harder at zero age
    pub time_kernel_k: f64,
    /// Quality value that earns the full `quality_factor`
    pub max_quality: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            altitude_range: 1000.0,
            // 36 * 100: one hour in the caller's scaled time unit
            time_range: 3600.0,
            quality_factor: 100.0,
            altitude_factor: 100.0,
            time_factor: 200.0,
            time_kernel_k: 0.0025,
            max_quality: 5.0,
        }
    }
}
