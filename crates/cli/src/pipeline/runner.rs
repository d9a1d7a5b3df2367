//! Replay runner - feeds trace records through a wind list.

use std::time::Instant;

use contracts::{ContractError, TraceRecord, WindConfig, WindEstimate};
use observability::{
    record_store_stats, record_trace_record, record_wind_query, WindMetricsAggregator,
};
use serde::Serialize;
use tracing::{debug, info};
use wind_engine::WindMeasurementList;

use super::ReplayStats;

/// Answer to one query record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub time: f64,
    pub altitude: f64,
    pub estimate: WindEstimate,
}

/// Applies trace records in order to a single wind list
#[derive(Debug)]
pub struct ReplayRunner {
    list: WindMeasurementList,
    metrics: WindMetricsAggregator,
    records: u64,
}

impl ReplayRunner {
    pub fn new(config: &WindConfig) -> Self {
        Self {
            list: WindMeasurementList::from_config(config),
            metrics: WindMetricsAggregator::new(),
            records: 0,
        }
    }

    /// Apply one record; queries produce an outcome
    pub fn apply(&mut self, record: &TraceRecord) -> Option<QueryOutcome> {
        self.records += 1;
        record_trace_record(record);

        if let Some(sample) = record.as_sample() {
            let evicted_before = self.list.store().evicted_count();
            self.list
                .add_measurement(sample.time, sample.vector, sample.altitude, sample.quality);
            let evicted = self.list.store().evicted_count() > evicted_before;
            self.metrics.record_measurement(sample.quality, evicted);
            return None;
        }

        let TraceRecord::Query { time, altitude } = *record else {
            return None;
        };

        let estimate = self.list.get_wind(time, altitude);
        record_wind_query(&estimate);
        self.metrics.record_query(&estimate);
        debug!(
            time,
            altitude,
            found = estimate.found,
            contributors = estimate.contributors,
            "query answered"
        );
        Some(QueryOutcome {
            time,
            altitude,
            estimate,
        })
    }

    /// Run a whole record stream, handing every query outcome to `on_query`
    ///
    /// Stops at the first malformed record.
    pub fn run<I, F>(&mut self, records: I, mut on_query: F) -> Result<ReplayStats, ContractError>
    where
        I: IntoIterator<Item = Result<TraceRecord, ContractError>>,
        F: FnMut(&QueryOutcome),
    {
        let start = Instant::now();

        for record in records {
            if let Some(outcome) = self.apply(&record?) {
                on_query(&outcome);
            }
        }

        let stats = self.stats(start.elapsed());
        record_store_stats(&stats.store);
        info!(
            records = stats.records,
            queries = stats.metrics.queries,
            evictions = stats.store.evicted,
            "replay finished"
        );
        Ok(stats)
    }

    pub fn list(&self) -> &WindMeasurementList {
        &self.list
    }

    fn stats(&self, duration: std::time::Duration) -> ReplayStats {
        ReplayStats {
            records: self.records,
            duration,
            store: self.list.stats(),
            metrics: self.metrics.clone(),
        }
    }
}
