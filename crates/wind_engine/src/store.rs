//! Fixed-capacity wind sample storage.
//!
//! Samples live by value in a vector allocated once with `capacity` slots.
//! Once full, every insert first evicts the least important sample and puts
//! the new one in the freed slot, so the length never changes again.

use std::fmt;

use contracts::{EvictionConfig, StoreConfig, StoreStats, WindSample, WindVector};
use tracing::debug;

use crate::eviction::{least_important, EvictionPolicy, QualityAgePolicy};

/// Bounded wind sample store with policy-driven eviction
pub struct MeasurementStore<P = QualityAgePolicy> {
    samples: Vec<WindSample>,
    capacity: usize,
    policy: P,
    inserted_count: u64,
    evicted_count: u64,
}

impl<P> fmt::Debug for MeasurementStore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasurementStore")
            .field("len", &self.samples.len())
            .field("capacity", &self.capacity)
            .field("evicted", &self.evicted_count)
            .finish()
    }
}

impl MeasurementStore<QualityAgePolicy> {
    /// Create a store with the default quality/age eviction policy
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, QualityAgePolicy::default())
    }

    /// Create a store from configuration sections
    pub fn from_config(store: &StoreConfig, eviction: &EvictionConfig) -> Self {
        Self::with_policy(store.capacity, QualityAgePolicy::new(eviction))
    }
}

impl Default for MeasurementStore<QualityAgePolicy> {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default(), &EvictionConfig::default())
    }
}

impl<P: EvictionPolicy> MeasurementStore<P> {
    /// Create a store with a custom eviction policy
    ///
    /// A capacity of zero is raised to one.
    pub fn with_policy(capacity: usize, policy: P) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            policy,
            inserted_count: 0,
            evicted_count: 0,
        }
    }

    /// Insert a measurement
    ///
    /// If the store is full, the least important sample (scored against `time`)
    /// is replaced and returned.
    pub fn add(
        &mut self,
        time: f64,
        vector: WindVector,
        altitude: f64,
        quality: i32,
    ) -> Option<WindSample> {
        self.insert(WindSample::new(time, vector, altitude, quality))
    }

    /// Insert an already built sample, see [`MeasurementStore::add`]
    pub fn insert(&mut self, sample: WindSample) -> Option<WindSample> {
        self.inserted_count += 1;

        if self.samples.len() < self.capacity {
            self.samples.push(sample);
            return None;
        }

        let index = least_important(&self.samples, &self.policy, sample.time)?;
        let evicted = std::mem::replace(&mut self.samples[index], sample);
        self.evicted_count += 1;

        debug!(
            index,
            score = self.policy.score(&evicted, sample.time),
            evicted_time = evicted.time,
            evicted_quality = evicted.quality,
            "evicted wind sample"
        );

        Some(evicted)
    }

    /// Index the next insert would evict, `None` while there is room
    pub fn eviction_candidate(&self, reference_time: f64) -> Option<usize> {
        if self.is_full() {
            least_important(&self.samples, &self.policy, reference_time)
        } else {
            None
        }
    }

    /// Number of samples held
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sample in slot `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&WindSample> {
        self.samples.get(index)
    }

    /// Samples in slot order
    #[inline]
    pub fn as_slice(&self) -> &[WindSample] {
        &self.samples
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, WindSample> {
        self.samples.iter()
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Drop every sample and clear counters; capacity is kept
    pub fn reset(&mut self) {
        self.samples.clear();
        self.inserted_count = 0;
        self.evicted_count = 0;
    }

    /// Get evicted sample count
    #[inline]
    pub fn evicted_count(&self) -> u64 {
        self.evicted_count
    }

    /// Get inserted sample count
    #[inline]
    pub fn inserted_count(&self) -> u64 {
        self.inserted_count
    }

    /// Snapshot of store status
    pub fn stats(&self) -> StoreStats {
        let times = self.samples.iter().map(|s| s.time);
        StoreStats {
            len: self.samples.len(),
            capacity: self.capacity,
            inserted: self.inserted_count,
            evicted: self.evicted_count,
            oldest_time: times.clone().reduce(f64::min),
            newest_time: times.reduce(f64::max),
        }
    }
}

impl<'a, P> IntoIterator for &'a MeasurementStore<P> {
    type Item = &'a WindSample;
    type IntoIter = std::slice::Iter<'a, WindSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64) -> WindVector {
        WindVector::new(x, 0.0)
    }

    #[test]
    fn test_append_until_full() {
        let mut store = MeasurementStore::new(3);

        assert!(store.add(1.0, v(1.0), 0.0, 3).is_none());
        assert!(store.add(2.0, v(2.0), 0.0, 3).is_none());
        assert!(!store.is_full());
        assert!(store.add(3.0, v(3.0), 0.0, 3).is_none());

        assert!(store.is_full());
        assert_eq!(store.len(), 3);
        assert_eq!(store.evicted_count(), 0);
        // slot order is insertion order
        let times: Vec<f64> = store.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_full_store_replaces_in_place() {
        let mut store = MeasurementStore::new(3);
        store.add(100.0, v(1.0), 0.0, 5);
        store.add(100.0, v(2.0), 0.0, 1); // worst quality
        store.add(100.0, v(3.0), 0.0, 5);

        let evicted = store.add(110.0, v(4.0), 0.0, 5).unwrap();

        assert_eq!(evicted.vector, v(2.0));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(1).unwrap().vector, v(4.0));
        assert_eq!(store.evicted_count(), 1);
        assert_eq!(store.inserted_count(), 4);
    }

    #[test]
    fn test_oldest_evicted_when_quality_equal() {
        let mut store = MeasurementStore::new(3);
        store.add(30.0, v(1.0), 0.0, 4);
        store.add(10.0, v(2.0), 0.0, 4);
        store.add(20.0, v(3.0), 0.0, 4);

        let evicted = store.add(40.0, v(4.0), 0.0, 4).unwrap();
        assert_eq!(evicted.time, 10.0);
    }

    #[test]
    fn test_length_constant_once_full() {
        let mut store = MeasurementStore::new(5);
        for i in 0..50 {
            store.add(i as f64, v(i as f64), 0.0, (i % 5) + 1);
            assert!(store.len() <= 5);
            if i >= 4 {
                assert_eq!(store.len(), 5);
            }
        }
        assert_eq!(store.evicted_count(), 45);
    }

    #[test]
    fn test_custom_policy() {
        // evict the highest altitude
        let policy = |s: &WindSample, _t: f64| s.altitude as i64;
        let mut store = MeasurementStore::with_policy(2, policy);
        store.add(0.0, v(1.0), 500.0, 5);
        store.add(0.0, v(2.0), 100.0, 5);

        let evicted = store.add(1.0, v(3.0), 300.0, 5).unwrap();
        assert_eq!(evicted.altitude, 500.0);
        assert_eq!(store.get(0).unwrap().altitude, 300.0);
    }

    #[test]
    fn test_eviction_candidate_only_when_full() {
        let mut store = MeasurementStore::new(2);
        store.add(0.0, v(1.0), 0.0, 1);
        assert_eq!(store.eviction_candidate(10.0), None);
        store.add(0.0, v(2.0), 0.0, 5);
        assert_eq!(store.eviction_candidate(10.0), Some(0));
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let mut store = MeasurementStore::new(0);
        assert_eq!(store.capacity(), 1);
        store.add(0.0, v(1.0), 0.0, 3);
        store.add(1.0, v(2.0), 0.0, 3);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().vector, v(2.0));
    }

    #[test]
    fn test_reset() {
        let mut store = MeasurementStore::new(2);
        store.add(0.0, v(1.0), 0.0, 3);
        store.add(1.0, v(2.0), 0.0, 3);
        store.add(2.0, v(3.0), 0.0, 3);
        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.capacity(), 2);
        let expected = StoreStats {
            capacity: 2,
            ..Default::default()
        };
        assert_eq!(store.stats(), expected);
    }

    #[test]
    fn test_stats_time_span() {
        let mut store = MeasurementStore::new(4);
        store.add(30.0, v(1.0), 0.0, 3);
        store.add(10.0, v(1.0), 0.0, 3);
        store.add(20.0, v(1.0), 0.0, 3);

        let stats = store.stats();
        assert_eq!(stats.len, 3);
        assert_eq!(stats.oldest_time, Some(10.0));
        assert_eq!(stats.newest_time, Some(30.0));
    }
}
