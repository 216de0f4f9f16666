use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// smallest marker radius, also used when EIRI is not a finite number
const BASE_RADIUS: f64 = 6.0;
/// EIRI contributes at most this much on top of [`BASE_RADIUS`]
const MAX_RADIUS_BONUS: f64 = 6.0;

/// map colour band of a country's readiness score
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    /// EIRI >= 70
    High,
    /// 40 <= EIRI < 70
    Medium,
    /// EIRI < 40
    Low,
}

impl ReadinessTier {
    pub fn from_eiri(eiri: f64) -> ReadinessTier {
        let score = if eiri.is_finite() { eiri } else { 0.0 };
        if score >= 70.0 {
            ReadinessTier::High
        } else if score >= 40.0 {
            ReadinessTier::Medium
        } else {
            ReadinessTier::Low
        }
    }

    /// hex colour of markers in this tier
    pub fn color(&self) -> &'static str {
        match self {
            ReadinessTier::High => "#16a34a",
            ReadinessTier::Medium => "#f97316",
            ReadinessTier::Low => "#ef4444",
        }
    }
}

impl Display for ReadinessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReadinessTier::High => "high",
            ReadinessTier::Medium => "medium",
            ReadinessTier::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// marker radius grows by 1 per 10 EIRI points, capped
pub fn marker_radius(eiri: f64) -> f64 {
    if !eiri.is_finite() {
        return BASE_RADIUS;
    }
    BASE_RADIUS + MAX_RADIUS_BONUS.min(eiri / 10.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ReadinessTier::from_eiri(70.0), ReadinessTier::High);
        assert_eq!(ReadinessTier::from_eiri(69.9), ReadinessTier::Medium);
        assert_eq!(ReadinessTier::from_eiri(40.0), ReadinessTier::Medium);
        assert_eq!(ReadinessTier::from_eiri(39.9), ReadinessTier::Low);
        assert_eq!(ReadinessTier::from_eiri(f64::NAN), ReadinessTier::Low);
        assert_eq!(ReadinessTier::High.color(), "#16a34a");
    }

    #[test]
    fn test_marker_radius() {
        assert_eq!(marker_radius(0.0), 6.0);
        assert_eq!(marker_radius(35.0), 9.5);
        assert_eq!(marker_radius(60.0), 12.0);
        assert_eq!(marker_radius(95.0), 12.0);
        assert_eq!(marker_radius(f64::NAN), 6.0);
    }
}
