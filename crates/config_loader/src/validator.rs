//! Configuration validation
//!
//! Rules:
//! - store capacity > 0
//! - altitude/time ranges, max quality and kernel k > 0
//! - weighting factors finite and >= 0
//! - eviction quality penalty >= 0

use contracts::{ContractError, EstimatorConfig, EvictionConfig, StoreConfig, WindConfig};

/// Validate a WindConfig
///
/// Returns the first error encountered.
pub fn validate(config: &WindConfig) -> Result<(), ContractError> {
    validate_store(&config.store)?;
    validate_eviction(&config.eviction)?;
    validate_estimator(&config.estimator)?;
    Ok(())
}

fn validate_store(store: &StoreConfig) -> Result<(), ContractError> {
    if store.capacity == 0 {
        return Err(ContractError::config_validation(
            "store.capacity",
            "capacity must be > 0",
        ));
    }
    Ok(())
}

fn validate_eviction(eviction: &EvictionConfig) -> Result<(), ContractError> {
    if eviction.quality_penalty < 0 {
        return Err(ContractError::config_validation(
            "eviction.quality_penalty",
            format!(
                "quality_penalty must be >= 0, got {}",
                eviction.quality_penalty
            ),
        ));
    }
    Ok(())
}

fn validate_estimator(estimator: &EstimatorConfig) -> Result<(), ContractError> {
    let positive = [
        ("estimator.altitude_range", estimator.altitude_range),
        ("estimator.time_range", estimator.time_range),
        ("estimator.time_kernel_k", estimator.time_kernel_k),
        ("estimator.max_quality", estimator.max_quality),
    ];
    for (field, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(ContractError::config_validation(
                field,
                format!("must be a finite value > 0, got {value}"),
            ));
        }
    }

    let factors = [
        ("estimator.quality_factor", estimator.quality_factor),
        ("estimator.altitude_factor", estimator.altitude_factor),
        ("estimator.time_factor", estimator.time_factor),
    ];
    for (field, value) in factors {
        if !value.is_finite() || value < 0.0 {
            return Err(ContractError::config_validation(
                field,
                format!("must be a finite value >= 0, got {value}"),
            ));
        }
    }

    Ok(())
}
