//! TraceRecord - replay input
//!
//! One line of a JSON Lines replay trace.

use serde::{Deserialize, Serialize};

use crate::{WindSample, WindVector};

/// A replay trace record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceRecord {
    /// Feed one sample into the list
    Measurement {
        time: f64,
        x: f64,
        y: f64,
        altitude: f64,
        quality: i32,
    },

    /// Ask for the wind at a reference time/altitude
    Query { time: f64, altitude: f64 },
}

impl TraceRecord {
    /// The sample carried by a measurement record
    pub fn as_sample(&self) -> Option<WindSample> {
        match *self {
            TraceRecord::Measurement {
                time,
                x,
                y,
                altitude,
                quality,
            } => Some(WindSample::new(time, WindVector::new(x, y), altitude, quality)),
            TraceRecord::Query { .. } => None,
        }
    }
}
