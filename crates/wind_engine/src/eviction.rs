//! Eviction scoring for a full measurement store.
//!
//! A policy assigns every stored sample an integer score; the sample with the
//! highest score is the least important and is the one replaced. The scan that
//! picks the winner lives here too and is shared by every policy, so tie-breaks
//! stay the same whatever the scoring.

use contracts::{EvictionConfig, WindSample};

/// Scores a stored sample against the time of the incoming measurement.
///
/// Higher means less important.
pub trait EvictionPolicy {
    fn score(&self, sample: &WindSample, reference_time: f64) -> i64;
}

impl<F> EvictionPolicy for F
where
    F: Fn(&WindSample, f64) -> i64,
{
    #[inline]
    fn score(&self, sample: &WindSample, reference_time: f64) -> i64 {
        self(sample, reference_time)
    }
}

/// Default policy: poor quality and old age both raise the score.
///
/// `score = quality_penalty * (quality_ceiling - quality) + trunc(reference_time - time)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityAgePolicy {
    quality_penalty: i64,
    quality_ceiling: i32,
}

impl QualityAgePolicy {
    pub fn new(config: &EvictionConfig) -> Self {
        Self {
            quality_penalty: config.quality_penalty,
            quality_ceiling: config.quality_ceiling,
        }
    }
}

impl Default for QualityAgePolicy {
    fn default() -> Self {
        Self::new(&EvictionConfig::default())
    }
}

impl EvictionPolicy for QualityAgePolicy {
    #[inline]
    fn score(&self, sample: &WindSample, reference_time: f64) -> i64 {
        let quality_gap = i64::from(self.quality_ceiling) - i64::from(sample.quality);
        // `as` truncates toward zero and saturates
        let age = (reference_time - sample.time) as i64;
        self.quality_penalty
            .saturating_mul(quality_gap)
            .saturating_add(age)
    }
}

/// Index of the least important sample, or `None` for an empty slice.
///
/// Scans from the last index down to 0. The running maximum starts at 0 with
/// the last index as candidate and only moves on a strictly greater score, so
/// among tied scores the highest index wins, and when nothing scores above 0
/// the last index is chosen.
pub fn least_important<P>(samples: &[WindSample], policy: &P, reference_time: f64) -> Option<usize>
where
    P: EvictionPolicy + ?Sized,
{
    let mut found = samples.len().checked_sub(1)?;
    let mut max_score = 0i64;

    for (index, sample) in samples.iter().enumerate().rev() {
        let score = policy.score(sample, reference_time);
        if score > max_score {
            max_score = score;
            found = index;
        }
    }

    Some(found)
}
