//! Replay statistics.

use std::time::Duration;

use contracts::StoreStats;
use observability::WindMetricsAggregator;

/// Statistics from a replay run
#[derive(Debug, Clone, Default)]
pub struct ReplayStats {
    /// Trace records applied
    pub records: u64,

    /// Wall time spent replaying
    pub duration: Duration,

    /// Store state after the last record
    pub store: StoreStats,

    /// Per-measurement and per-query aggregates
    pub metrics: WindMetricsAggregator,
}

impl ReplayStats {
    /// Records processed per second of wall time
    pub fn records_per_sec(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.records as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Print detailed summary
    pub fn print_summary(&self) {
        let summary = self.metrics.summary();

        println!("\n=== Replay Statistics ===\n");

        println!("Overview");
        println!("   ├─ Duration: {:.3}s", self.duration.as_secs_f64());
        println!("   ├─ Records: {}", self.records);
        println!("   └─ Records/s: {:.0}", self.records_per_sec());

        println!("\nStore");
        println!("   ├─ Samples held: {}/{}", self.store.len, self.store.capacity);
        println!("   ├─ Inserted: {}", self.store.inserted);
        println!("   ├─ Evicted: {}", self.store.evicted);
        match (self.store.oldest_time, self.store.newest_time) {
            (Some(oldest), Some(newest)) => {
                println!("   └─ Time span: {oldest} .. {newest}");
            }
            _ => println!("   └─ Time span: (empty)"),
        }

        println!("\nEstimates");
        println!(
            "   ├─ Queries: {} (found {}, {:.2}%)",
            summary.queries, summary.found, summary.found_rate
        );
        println!("   ├─ Speed: {}", summary.speed);
        println!("   ├─ Contributors: {}", summary.contributors);
        println!("   └─ Measurement quality: {}", summary.quality);

        println!();
    }
}
