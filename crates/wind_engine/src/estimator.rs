//! Weighted wind estimation kernel.
//!
//! Every sample inside the altitude/time window gets three integer weights
//! (quality, altitude proximity, recency). Their product weighs the sample's
//! vector in a normalised mean. Each factor is rounded on its own before the
//! product is formed; samples whose factor rounds to zero drop out of the
//! numerator but still count as zero in the total.

use contracts::{EstimatorConfig, WindEstimate, WindSample, WindVector};
use tracing::trace;

/// Round half up: `floor(x + 0.5)`
#[inline]
pub fn iround(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Integer weight factors of one in-window sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWeight {
    pub quality: i64,
    pub altitude: i64,
    pub time: i64,
}

impl SampleWeight {
    /// `quality * (altitude * time)`
    #[inline]
    pub fn combined(&self) -> i64 {
        self.quality
            .saturating_mul(self.altitude.saturating_mul(self.time))
    }
}

/// Stateless estimator over a set of stored samples
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindEstimator {
    config: EstimatorConfig,
}

impl WindEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Weight factors of `sample` for a query, `None` outside the window
    pub fn weigh(
        &self,
        sample: &WindSample,
        reference_time: f64,
        reference_altitude: f64,
    ) -> Option<SampleWeight> {
        let cfg = &self.config;
        let alt_diff = (reference_altitude - sample.altitude) / cfg.altitude_range;
        let time_diff = (reference_time - sample.time).abs() / cfg.time_range;

        // NaN differences fail both comparisons and stay out
        if !(alt_diff.abs() < 1.0 && time_diff < 1.0) {
            return None;
        }

        let quality = iround(f64::from(sample.quality) * cfg.quality_factor / cfg.max_quality);

        // 1 at zero difference, approaching 0 at the window edge
        let altitude = iround((2.0 / (alt_diff * alt_diff + 1.0) - 1.0) * cfg.altitude_factor);

        // sharp peak at zero age, 0 at the window edge
        let k = cfg.time_kernel_k;
        let time = iround(k * (1.0 - time_diff) / (time_diff * time_diff + k) * cfg.time_factor);

        Some(SampleWeight {
            quality,
            altitude,
            time,
        })
    }

    /// Weighted mean wind over `samples` for the given reference point
    pub fn estimate<'a, I>(
        &self,
        samples: I,
        reference_time: f64,
        reference_altitude: f64,
    ) -> WindEstimate
    where
        I: IntoIterator<Item = &'a WindSample>,
    {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut total_weight: i64 = 0;
        let mut contributors = 0usize;

        for sample in samples {
            let Some(weight) = self.weigh(sample, reference_time, reference_altitude) else {
                continue;
            };
            let w = weight.combined();
            sum_x += sample.vector.x * w as f64;
            sum_y += sample.vector.y * w as f64;
            total_weight = total_weight.saturating_add(w);
            contributors += 1;
        }

        trace!(total_weight, contributors, "wind kernel evaluated");

        if total_weight > 0 {
            let total = total_weight as f64;
            WindEstimate {
                vector: WindVector::new(sum_x / total, sum_y / total),
                found: true,
                total_weight,
                contributors,
            }
        } else {
            WindEstimate::not_found(total_weight, contributors)
        }
    }
}
