//! `validate` command implementation.

use anyhow::{Context, Result};
use contracts::WindConfig;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    capacity: usize,
    altitude_range: f64,
    time_range: f64,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{json}");
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    let invalid = |error: String| ValidationResult {
        valid: false,
        config_path: config_path.clone(),
        error: Some(error),
        warnings: Vec::new(),
        summary: None,
    };

    if !args.config.exists() {
        return invalid(format!("File not found: {}", args.config.display()));
    }

    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(config) => ValidationResult {
            valid: true,
            config_path: config_path.clone(),
            error: None,
            warnings: collect_warnings(&config),
            summary: Some(ConfigSummary {
                version: format!("{:?}", config.version),
                capacity: config.store.capacity,
                altitude_range: config.estimator.altitude_range,
                time_range: config.estimator.time_range,
            }),
        },
        Err(e) => invalid(e.to_string()),
    }
}

/// Settings that load fine but make every estimate come back empty or degenerate
fn collect_warnings(config: &WindConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    let est = &config.estimator;

    for (name, value) in [
        ("quality_factor", est.quality_factor),
        ("altitude_factor", est.altitude_factor),
        ("time_factor", est.time_factor),
    ] {
        if value == 0.0 {
            warnings.push(format!(
                "estimator.{name} is 0 - every weight is zero and no wind will be found"
            ));
        }
    }

    if est.time_kernel_k >= 1.0 {
        warnings.push(format!(
            "estimator.time_kernel_k = {} flattens the recency kernel",
            est.time_kernel_k
        ));
    }

    if config.eviction.quality_penalty == 0 {
        warnings.push("eviction.quality_penalty is 0 - eviction ignores quality".to_string());
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Capacity: {}", summary.capacity);
            println!("  Altitude range: {}", summary.altitude_range);
            println!("  Time range: {}", summary.time_range);
        }

        if !result.warnings.is_empty() {
            println!("\nWarnings:");
            for warning in &result.warnings {
                println!("  - {warning}");
            }
        }
    } else {
        println!("Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {error}");
        }
    }
}
