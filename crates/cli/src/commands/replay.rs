//! `replay` command implementation.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ReplayArgs;
use crate::error::CliError;
use crate::pipeline::{QueryOutcome, ReplayRunner, TraceReader};

/// Execute the `replay` command
pub fn run_replay(args: &ReplayArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    if !args.trace.exists() {
        return Err(CliError::trace_not_found(args.trace.display().to_string()).into());
    }

    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    info!(
        trace = %args.trace.display(),
        capacity = config.store.capacity,
        altitude_range = config.estimator.altitude_range,
        time_range = config.estimator.time_range,
        "Starting replay"
    );

    let reader = TraceReader::open(&args.trace).map_err(CliError::from)?;
    let mut runner = ReplayRunner::new(&config);

    let mut write_error = None;
    let stats = runner
        .run(reader, |outcome| {
            if write_error.is_some() {
                return;
            }
            if args.json {
                match serde_json::to_string(outcome) {
                    Ok(line) => println!("{line}"),
                    Err(e) => write_error = Some(e),
                }
            } else {
                println!("{}", format_outcome(outcome));
            }
        })
        .map_err(CliError::from)
        .with_context(|| format!("Replay of {} failed", args.trace.display()))?;

    if let Some(e) = write_error {
        return Err(e).context("Failed to serialize query outcome");
    }

    if !args.json {
        stats.print_summary();
    }

    Ok(())
}

/// One line per query for human-readable output
fn format_outcome(outcome: &QueryOutcome) -> String {
    let estimate = &outcome.estimate;
    if estimate.found {
        format!(
            "t={} alt={}: wind x={:.3} y={:.3} (speed {:.3}, bearing {:.1}) from {} samples",
            outcome.time,
            outcome.altitude,
            estimate.vector.x,
            estimate.vector.y,
            estimate.vector.speed(),
            estimate.vector.bearing_deg(),
            estimate.contributors
        )
    } else {
        format!(
            "t={} alt={}: no estimate ({} samples in window)",
            outcome.time, outcome.altitude, estimate.contributors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{WindEstimate, WindVector};
    use std::io::Write;

    #[test]
    fn test_format_found() {
        let outcome = QueryOutcome {
            time: 10.0,
            altitude: 500.0,
            estimate: WindEstimate {
                vector: WindVector::new(0.0, 5.0),
                found: true,
                total_weight: 2_000_000,
                contributors: 1,
            },
        };
        let line = format_outcome(&outcome);
        assert!(line.contains("speed 5.000"), "got: {line}");
        assert!(line.contains("bearing 0.0"), "got: {line}");
    }

    #[test]
    fn test_format_not_found() {
        let outcome = QueryOutcome {
            time: 10.0,
            altitude: 500.0,
            estimate: WindEstimate::not_found(0, 0),
        };
        assert!(format_outcome(&outcome).contains("no estimate"));
    }

    #[test]
    fn test_replay_end_to_end() {
        let mut trace = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        writeln!(
            trace,
            r#"{{"type":"measurement","time":0.0,"x":2.0,"y":1.0,"altitude":700.0,"quality":4}}"#
        )
        .unwrap();
        writeln!(trace, r#"{{"type":"query","time":0.0,"altitude":700.0}}"#).unwrap();

        let args = ReplayArgs {
            trace: trace.path().to_path_buf(),
            config: None,
            json: true,
            metrics_port: 0,
        };
        assert!(run_replay(&args).is_ok());
    }

    #[test]
    fn test_replay_missing_trace() {
        let args = ReplayArgs {
            trace: "/nonexistent/flight.jsonl".into(),
            config: None,
            json: false,
            metrics_port: 0,
        };
        let err = run_replay(&args).unwrap_err();
        assert!(err.to_string().contains("Trace file not found"));
    }

    #[test]
    fn test_replay_malformed_trace() {
        let mut trace = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
        writeln!(trace, "not json").unwrap();

        let args = ReplayArgs {
            trace: trace.path().to_path_buf(),
            config: None,
            json: true,
            metrics_port: 0,
        };
        let err = run_replay(&args).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"), "got: {err:#}");
    }
}
