//! `info` command implementation.

use anyhow::{Context, Result};
use contracts::WindConfig;
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Effective configuration plus where it came from
#[derive(Serialize)]
struct ConfigInfo<'a> {
    source: String,
    #[serde(flatten)]
    config: &'a WindConfig,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let source = args
        .config
        .as_ref()
        .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    info!(config = %source, "Loading configuration info");

    let config = super::load_config(args.config.as_deref())
        .with_context(|| format!("Failed to load config from {source}"))?;

    if args.json {
        let info = ConfigInfo {
            source,
            config: &config,
        };
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{json}");
    } else {
        print_config_info(&config, &source);
    }

    Ok(())
}

fn print_config_info(config: &WindConfig, source: &str) {
    println!("Wind Estimator Configuration ({source})");
    println!("  Version: {:?}", config.version);

    println!("\nStore");
    println!("  └─ Capacity: {}", config.store.capacity);

    let ev = &config.eviction;
    println!("\nEviction");
    println!("  ├─ Quality penalty: {}", ev.quality_penalty);
    println!("  └─ Quality ceiling: {}", ev.quality_ceiling);

    let est = &config.estimator;
    println!("\nEstimator");
    println!("  ├─ Altitude range: {}", est.altitude_range);
    println!("  ├─ Time range: {}", est.time_range);
    println!("  ├─ Max quality: {}", est.max_quality);
    println!(
        "  ├─ Factors: quality {} / altitude {} / time {}",
        est.quality_factor, est.altitude_factor, est.time_factor
    );
    println!("  └─ Time kernel k: {}", est.time_kernel_k);

    println!();
}
