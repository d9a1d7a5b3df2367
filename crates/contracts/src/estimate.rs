//! WindEstimate - estimator output

use serde::{Deserialize, Serialize};

use crate::WindVector;

/// Result of a wind query
///
/// When `found` is false the vector is zero and must be disregarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindEstimate {
    /// Weighted mean wind vector
    pub vector: WindVector,

    /// Whether any sample carried a positive total weight
    pub found: bool,

    /// Sum of combined integer weights over in-window samples
    pub total_weight: i64,

    /// Number of samples that passed the altitude/time window test
    pub contributors: usize,
}

impl WindEstimate {
    /// Estimate signalling "no usable wind"
    pub fn not_found(total_weight: i64, contributors: usize) -> Self {
        Self {
            vector: WindVector::zero(),
            found: false,
            total_weight,
            contributors,
        }
    }

    /// The vector when found, `None` otherwise
    pub fn into_option(self) -> Option<WindVector> {
        self.found.then_some(self.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_zero() {
        let est = WindEstimate::not_found(0, 0);
        assert!(!est.found);
        assert_eq!(est.vector, WindVector::zero());
        assert_eq!(est.into_option(), None);
    }
}
