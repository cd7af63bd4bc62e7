use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONFIDENCE;

/// Confidence score clamped to [0.0, 1.0].
///
/// Storage keeps confidence unbounded so repeated feedback accumulates
/// as a drift signal; this type is the read-time view. Construct one
/// from a raw stored value and the clamp is applied exactly once.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// High confidence threshold — responses above this are considered
    /// organically confirmed.
    pub const HIGH: f64 = 0.8;
    /// Low confidence threshold — freshly taught responses start here
    /// or below.
    pub const LOW: f64 = 0.3;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if confidence is above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
