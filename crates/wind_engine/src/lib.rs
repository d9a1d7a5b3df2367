//! # Wind Engine
//!
//! Bounded wind measurement history and weighted wind estimation.
//!
//! Responsibilities:
//! - Fixed-capacity sample storage with score-based eviction
//! - Quality / altitude / recency weighted wind estimate
//!
//! ## Usage
//!
//! ```
//! use wind_engine::{WindMeasurementList, WindVector};
//!
//! let mut list = WindMeasurementList::new();
//! list.add_measurement(100.0, WindVector::new(3.0, -1.0), 800.0, 4);
//!
//! let estimate = list.get_wind(100.0, 800.0);
//! if let Some(wind) = estimate.into_option() {
//!     println!("wind {:.1} @ {:.0}", wind.speed(), wind.bearing_deg());
//! }
//! ```

mod estimator;
mod eviction;
mod list;
mod store;

pub use estimator::{iround, SampleWeight, WindEstimator};
pub use eviction::{least_important, EvictionPolicy, QualityAgePolicy};
pub use list::WindMeasurementList;
pub use store::MeasurementStore;

// Re-export contracts types
pub use contracts::{
    EstimatorConfig, EvictionConfig, StoreConfig, StoreStats, WindConfig, WindEstimate,
    WindSample, WindVector, MAX_CAPACITY,
};
