//! Wind measurement list: one store plus one estimator.

use contracts::{StoreStats, WindConfig, WindEstimate, WindVector};
use tracing::instrument;

use crate::estimator::WindEstimator;
use crate::eviction::{EvictionPolicy, QualityAgePolicy};
use crate::store::MeasurementStore;

/// Bounded wind history with weighted estimation
///
/// Mutation goes through `&mut self` and queries through `&self`; sharing an
/// instance across threads requires the caller to serialize access.
#[derive(Debug)]
pub struct WindMeasurementList<P = QualityAgePolicy> {
    store: MeasurementStore<P>,
    estimator: WindEstimator,
}

impl WindMeasurementList<QualityAgePolicy> {
    /// Create a list with the classic constants
    pub fn new() -> Self {
        Self::from_config(&WindConfig::default())
    }

    /// Create a list from configuration
    pub fn from_config(config: &WindConfig) -> Self {
        Self::with_parts(
            MeasurementStore::from_config(&config.store, &config.eviction),
            WindEstimator::new(config.estimator),
        )
    }
}

impl Default for WindMeasurementList<QualityAgePolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EvictionPolicy> WindMeasurementList<P> {
    /// Assemble a list from a (possibly custom-policy) store and an estimator
    pub fn with_parts(store: MeasurementStore<P>, estimator: WindEstimator) -> Self {
        Self { store, estimator }
    }

    /// Add a wind measurement
    ///
    /// Always succeeds; a full list evicts its least important sample first.
    #[instrument(
        level = "trace",
        name = "wind_list_add",
        skip(self, vector),
        fields(x = vector.x, y = vector.y)
    )]
    pub fn add_measurement(&mut self, time: f64, vector: WindVector, altitude: f64, quality: i32) {
        let evicted = self.store.add(time, vector, altitude, quality);

        metrics::counter!("wind_measurements_total").increment(1);
        if evicted.is_some() {
            metrics::counter!("wind_evictions_total").increment(1);
        }
        metrics::gauge!("wind_store_depth").set(self.store.len() as f64);
    }

    /// Weighted mean wind around `time` / `altitude`
    ///
    /// `found == false` means no usable estimate; the vector is then zero.
    #[instrument(level = "debug", name = "wind_list_get", skip(self))]
    pub fn get_wind(&self, time: f64, altitude: f64) -> WindEstimate {
        let estimate = self.estimator.estimate(&self.store, time, altitude);

        let status = if estimate.found { "found" } else { "not_found" };
        metrics::counter!("wind_estimates_total", "status" => status).increment(1);
        if estimate.found {
            metrics::histogram!("wind_estimate_weight").record(estimate.total_weight as f64);
        }

        estimate
    }

    /// Drop all samples (session end)
    pub fn reset(&mut self) {
        self.store.reset();
        metrics::gauge!("wind_store_depth").set(0.0);
        tracing::debug!("wind list reset");
    }

    pub fn store(&self) -> &MeasurementStore<P> {
        &self.store
    }

    pub fn estimator(&self) -> &WindEstimator {
        &self.estimator
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
