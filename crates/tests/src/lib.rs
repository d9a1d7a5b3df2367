//! # Integration Tests
//!
//! Cross-crate scenarios for the wind measurement list.
//!
//! Covers:
//! - configuration file to estimate
//! - seeded randomized checks of capacity and eviction order
//! - estimator window and weighting behavior

#[cfg(test)]
mod contract_tests {
    use contracts::{ConfigVersion, WindConfig, MAX_CAPACITY};

    #[test]
    fn test_default_config_snapshot() {
        let config = WindConfig::default();
        assert_eq!(config.version, ConfigVersion::V1);
        assert_eq!(config.store.capacity, MAX_CAPACITY);
        assert_eq!(config.eviction.quality_penalty, 600);
        assert_eq!(config.eviction.quality_ceiling, 6);
        assert_eq!(config.estimator.altitude_range, 1000.0);
        assert_eq!(config.estimator.time_range, 3600.0);
        assert_eq!(config.estimator.time_kernel_k, 0.0025);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config =
            config_loader::ConfigLoader::load_from_str("", config_loader::ConfigFormat::Toml)
                .unwrap();
        assert_eq!(config, WindConfig::default());
    }
}

#[cfg(test)]
mod e2e_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use observability::WindMetricsAggregator;
    use wind_engine::{WindMeasurementList, WindVector};

    /// Config string -> list -> estimates, with the aggregator tracking the run
    #[test]
    fn test_config_to_estimate() {
        let config = ConfigLoader::load_from_str(
            r#"
[store]
capacity = 3

[estimator]
altitude_range = 500.0
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        let mut list = WindMeasurementList::from_config(&config);
        let mut metrics = WindMetricsAggregator::new();

        for i in 0..5 {
            let evicting = list.store().is_full();
            list.add_measurement(f64::from(i) * 10.0, WindVector::new(4.0, 0.0), 1000.0, 4);
            metrics.record_measurement(4, evicting);
        }

        assert_eq!(list.len(), 3);
        let stats = list.stats();
        assert_eq!(stats.inserted, 5);
        assert_eq!(stats.evicted, 2);

        let estimate = list.get_wind(40.0, 1000.0);
        metrics.record_query(&estimate);
        assert!(estimate.found);
        assert!((estimate.vector.x - 4.0).abs() < 1e-9);
        assert!(estimate.vector.y.abs() < 1e-9);
        assert_eq!(estimate.contributors, 3);

        // 500 m away is outside a 500 m altitude range
        let outside = list.get_wind(40.0, 1500.0);
        metrics.record_query(&outside);
        assert!(!outside.found);

        let summary = metrics.summary();
        assert_eq!(summary.measurements, 5);
        assert_eq!(summary.evictions, 2);
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.found, 1);
    }

    #[test]
    fn test_reset_restores_empty_contract() {
        let mut list = WindMeasurementList::new();
        list.add_measurement(0.0, WindVector::new(1.0, 1.0), 0.0, 5);
        assert!(list.get_wind(0.0, 0.0).found);

        list.reset();
        assert!(list.is_empty());
        let estimate = list.get_wind(0.0, 0.0);
        assert!(!estimate.found);
        assert_eq!(estimate.vector, WindVector::zero());
    }
}

#[cfg(test)]
mod eviction_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use wind_engine::{MeasurementStore, WindSample, WindVector};

    /// Straightforward re-statement of the eviction scan
    fn reference_victim(samples: &[WindSample], reference_time: f64) -> usize {
        let mut victim = samples.len() - 1;
        let mut max = 0i64;
        for (i, s) in samples.iter().enumerate().rev() {
            let score = 600 * (6 - i64::from(s.quality)) + (reference_time - s.time).trunc() as i64;
            if score > max {
                max = score;
                victim = i;
            }
        }
        victim
    }

    #[test]
    fn test_ties_evict_highest_index() {
        let mut store = MeasurementStore::new(4);
        for i in 0..4 {
            store.add(10.0, WindVector::new(f64::from(i), 0.0), 500.0, 3);
        }

        let evicted = store.add(10.0, WindVector::new(9.0, 9.0), 500.0, 3).unwrap();
        assert_eq!(evicted.vector.x, 3.0);
        assert_eq!(store.get(3).unwrap().vector, WindVector::new(9.0, 9.0));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_no_positive_score_evicts_last_slot() {
        // quality 6 with zero age scores exactly 0
        let mut store = MeasurementStore::new(2);
        store.add(5.0, WindVector::new(1.0, 0.0), 0.0, 6);
        store.add(5.0, WindVector::new(2.0, 0.0), 0.0, 6);

        let evicted = store.add(5.0, WindVector::new(3.0, 0.0), 0.0, 6).unwrap();
        assert_eq!(evicted.vector.x, 2.0);
        assert_eq!(store.get(1).unwrap().vector.x, 3.0);
    }

    #[test]
    fn test_low_quality_outranks_age() {
        let mut store = MeasurementStore::new(3);
        store.add(0.0, WindVector::new(1.0, 0.0), 0.0, 5);
        store.add(100.0, WindVector::new(2.0, 0.0), 0.0, 1);
        store.add(200.0, WindVector::new(3.0, 0.0), 0.0, 5);

        let evicted = store.add(300.0, WindVector::new(4.0, 0.0), 0.0, 5).unwrap();
        assert_eq!(evicted.quality, 1);
        assert_eq!(store.get(1).unwrap().vector.x, 4.0);
    }

    #[test]
    fn test_randomized_capacity_and_eviction_order() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let capacity = rng.random_range(1..=16usize);
            let mut store = MeasurementStore::new(capacity);
            let mut model: Vec<WindSample> = Vec::new();
            let mut time = 0.0f64;

            for _ in 0..200 {
                time += rng.random_range(0.0..50.0);
                let sample = WindSample::new(
                    time,
                    WindVector::new(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0)),
                    rng.random_range(0.0..3000.0),
                    rng.random_range(0..=6),
                );

                let expected = if model.len() < capacity {
                    model.push(sample);
                    None
                } else {
                    let victim = reference_victim(&model, sample.time);
                    Some(std::mem::replace(&mut model[victim], sample))
                };

                let evicted = store.insert(sample);
                assert_eq!(evicted, expected, "seed {seed}");
                assert!(store.len() <= capacity, "seed {seed}");
                assert_eq!(store.as_slice(), model.as_slice(), "seed {seed}");
            }

            assert_eq!(store.stats().inserted, 200);
            assert_eq!(store.stats().evicted, 200 - capacity as u64);
        }
    }
}

#[cfg(test)]
mod estimator_tests {
    use wind_engine::{WindMeasurementList, WindVector};

    #[test]
    fn test_single_sample_exact() {
        let mut list = WindMeasurementList::new();
        list.add_measurement(50.0, WindVector::new(-3.5, 7.25), 1200.0, 5);

        let estimate = list.get_wind(50.0, 1200.0);
        assert!(estimate.found);
        assert_eq!(estimate.total_weight, 2_000_000);
        assert_eq!(estimate.vector, WindVector::new(-3.5, 7.25));
    }

    #[test]
    fn test_half_range_altitude_weight() {
        // aw = round((2 / 1.25 - 1) * 100) = 60
        let mut list = WindMeasurementList::new();
        list.add_measurement(0.0, WindVector::new(1.0, 0.0), 500.0, 5);
        assert_eq!(list.get_wind(0.0, 0.0).total_weight, 100 * 60 * 200);
    }

    #[test]
    fn test_window_boundaries_exclude() {
        let mut list = WindMeasurementList::new();
        list.add_measurement(0.0, WindVector::new(1.0, 0.0), 1000.0, 5);

        // exactly one altitude range away
        let estimate = list.get_wind(0.0, 0.0);
        assert!(!estimate.found);
        assert_eq!(estimate.contributors, 0);

        // exactly one time range away
        let estimate = list.get_wind(3600.0, 1000.0);
        assert!(!estimate.found);
        assert_eq!(estimate.contributors, 0);

        // just inside both
        assert_eq!(list.get_wind(3599.0, 1.0).contributors, 1);
    }

    #[test]
    fn test_outside_samples_do_not_bias() {
        let mut list = WindMeasurementList::new();
        list.add_measurement(0.0, WindVector::new(2.0, 2.0), 100.0, 5);
        list.add_measurement(0.0, WindVector::new(-50.0, 80.0), 5000.0, 5);

        let estimate = list.get_wind(0.0, 100.0);
        assert_eq!(estimate.contributors, 1);
        assert_eq!(estimate.vector, WindVector::new(2.0, 2.0));
    }

    #[test]
    fn test_quality_weighting_is_monotonic() {
        let mut previous_weight = 0;
        let mut previous_x = f64::NEG_INFINITY;

        for quality in 1..=5 {
            let mut list = WindMeasurementList::new();
            list.add_measurement(0.0, WindVector::new(0.0, 0.0), 0.0, 3);
            list.add_measurement(0.0, WindVector::new(10.0, 0.0), 0.0, quality);

            let estimate = list.get_wind(0.0, 0.0);
            assert!(estimate.total_weight > previous_weight);
            assert!(estimate.vector.x > previous_x);
            previous_weight = estimate.total_weight;
            previous_x = estimate.vector.x;
        }
    }

    #[test]
    fn test_negative_quality_yields_no_wind() {
        let mut list = WindMeasurementList::new();
        list.add_measurement(0.0, WindVector::new(5.0, 5.0), 0.0, -1);

        let estimate = list.get_wind(0.0, 0.0);
        assert!(!estimate.found);
        assert!(estimate.total_weight < 0);
        assert_eq!(estimate.contributors, 1);
    }
}
