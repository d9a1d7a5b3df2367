//! Wind metrics
//!
//! Prometheus-facing recorders plus an in-memory aggregator used to print a
//! summary at the end of a replay.

use contracts::{StoreStats, TraceRecord, WindEstimate};
use metrics::{counter, gauge, histogram};

/// Record the outcome of one wind query
///
/// Found / not-found counts come from the engine's `wind_estimates_total`.
pub fn record_wind_query(estimate: &WindEstimate) {
    gauge!("wind_query_contributors").set(estimate.contributors as f64);

    if estimate.found {
        gauge!("wind_estimate_x").set(estimate.vector.x);
        gauge!("wind_estimate_y").set(estimate.vector.y);
        histogram!("wind_estimate_speed").record(estimate.vector.speed());
    }
}

/// Record a store snapshot
pub fn record_store_stats(stats: &StoreStats) {
    gauge!("wind_store_capacity").set(stats.capacity as f64);
    gauge!("wind_store_fill_ratio").set(if stats.capacity > 0 {
        stats.len as f64 / stats.capacity as f64
    } else {
        0.0
    });
    if let (Some(oldest), Some(newest)) = (stats.oldest_time, stats.newest_time) {
        gauge!("wind_store_time_span").set(newest - oldest);
    }
}

/// Count a replayed trace record by kind
pub fn record_trace_record(record: &TraceRecord) {
    let kind = match record {
        TraceRecord::Measurement { .. } => "measurement",
        TraceRecord::Query { .. } => "query",
    };
    counter!("wind_trace_records_total", "kind" => kind).increment(1);
}

/// Wind metrics aggregator
///
/// Accumulates in memory for run summaries.
#[derive(Debug, Clone, Default)]
pub struct WindMetricsAggregator {
    pub measurements: u64,
    pub evictions: u64,
    pub queries: u64,
    pub found: u64,

    /// Speed of found estimates
    pub speed_stats: RunningStats,

    /// Samples inside the window per query
    pub contributor_stats: RunningStats,

    /// Quality of ingested measurements
    pub quality_stats: RunningStats,
}

impl WindMetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one ingested measurement
    pub fn record_measurement(&mut self, quality: i32, evicted: bool) {
        self.measurements += 1;
        if evicted {
            self.evictions += 1;
        }
        self.quality_stats.push(f64::from(quality));
    }

    /// Account for one answered (or unanswered) query
    pub fn record_query(&mut self, estimate: &WindEstimate) {
        self.queries += 1;
        self.contributor_stats.push(estimate.contributors as f64);
        if estimate.found {
            self.found += 1;
            self.speed_stats.push(estimate.vector.speed());
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            measurements: self.measurements,
            evictions: self.evictions,
            queries: self.queries,
            found: self.found,
            found_rate: if self.queries > 0 {
                self.found as f64 / self.queries as f64 * 100.0
            } else {
                0.0
            },
            speed: StatsSummary::from(&self.speed_stats),
            contributors: StatsSummary::from(&self.contributor_stats),
            quality: StatsSummary::from(&self.quality_stats),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Aggregated run summary
#[derive(Debug, Clone, Default)]
pub struct MetricsSummary {
    pub measurements: u64,
    pub evictions: u64,
    pub queries: u64,
    pub found: u64,
    /// Percentage of queries with a usable estimate
    pub found_rate: f64,
    pub speed: StatsSummary,
    pub contributors: StatsSummary,
    pub quality: StatsSummary,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Wind Metrics Summary ===")?;
        writeln!(f, "Measurements: {}", self.measurements)?;
        writeln!(f, "Evictions: {}", self.evictions)?;
        writeln!(
            f,
            "Queries: {} (found {}, {:.2}%)",
            self.queries, self.found, self.found_rate
        )?;
        writeln!(f, "Estimated speed: {}", self.speed)?;
        writeln!(f, "Contributors per query: {}", self.contributors)?;
        writeln!(f, "Measurement quality: {}", self.quality)?;
        Ok(())
    }
}

/// Statistics summary
#[derive(Debug, Clone, Default)]
pub struct StatsSummary {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&RunningStats> for StatsSummary {
    fn from(stats: &RunningStats) -> Self {
        Self {
            count: stats.count,
            min: stats.min,
            max: stats.max,
            mean: stats.mean(),
            std_dev: stats.std_dev(),
        }
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            write!(f, "N/A")
        } else {
            write!(
                f,
                "min={:.3}, max={:.3}, mean={:.3}, std={:.3} (n={})",
                self.min, self.max, self.mean, self.std_dev, self.count
            )
        }
    }
}

/// Online statistics (Welford's algorithm)
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
            self.m2 = 0.0;
            return;
        }

        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sample variance
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
