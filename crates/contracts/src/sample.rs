//! WindSample - store input
//!
//! One wind observation as produced by the circling wind computation.

use serde::{Deserialize, Serialize};

/// 2D wind vector in the caller's speed unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindVector {
    pub x: f64,
    pub y: f64,
}

impl WindVector {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Vector magnitude
    #[inline]
    pub fn speed(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of the vector in degrees, clockwise from +y, in `[0, 360)`
    pub fn bearing_deg(&self) -> f64 {
        let deg = self.x.atan2(self.y).to_degrees();
        if deg < 0.0 {
            deg + 360.0
        } else {
            deg
        }
    }
}

/// A stored wind measurement
///
/// Immutable once created; the store only inserts and removes whole samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    /// Measured wind vector
    pub vector: WindVector,

    /// Caller-supplied confidence, nominally 1 (poor) to 5 (excellent).
    /// Not validated.
    pub quality: i32,

    /// Monotonic time of the measurement
    pub time: f64,

    /// Altitude at which the measurement was taken
    pub altitude: f64,
}

impl WindSample {
    pub fn new(time: f64, vector: WindVector, altitude: f64, quality: i32) -> Self {
        Self {
            vector,
            quality,
            time,
            altitude,
        }
    }
}
