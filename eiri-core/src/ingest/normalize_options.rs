use super::DuplicateKeyPolicy;
use crate::model::DEFAULT_GAP_THRESHOLD;
use serde::{Deserialize, Serialize};

/// rows must have strictly more stations than this to be kept.
pub const DEFAULT_MIN_STATIONS: f64 = 50.0;

/// tunable behaviors of [`super::normalize`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizeOptions {
    /// quality filter, countries with `stations <= min_stations` are dropped
    /// to avoid skewing rankings with sparse networks
    pub min_stations: f64,
    /// gap magnitude used to derive a quadrant label
    pub gap_threshold: f64,
    pub duplicate_key_policy: DuplicateKeyPolicy,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            min_stations: DEFAULT_MIN_STATIONS,
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            duplicate_key_policy: DuplicateKeyPolicy::default(),
        }
    }
}
