use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// gap magnitude beyond which a market is no longer considered balanced.
pub const DEFAULT_GAP_THRESHOLD: f64 = 5.0;

/// market classification derived from the gap between model availability and
/// infrastructure readiness.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// model availability outpaces charging infrastructure
    #[serde(rename = "Demand-Ahead")]
    DemandAhead,
    /// charging infrastructure outpaces model availability
    #[serde(rename = "Infrastructure-Ahead")]
    InfrastructureAhead,
    #[serde(rename = "Balanced")]
    Balanced,
}

impl Quadrant {
    /// classifies a gap value. both bounds are exclusive: a gap of exactly
    /// `threshold` is balanced.
    pub fn classify(gap_value: f64, threshold: f64) -> Quadrant {
        if gap_value > threshold {
            Quadrant::DemandAhead
        } else if gap_value < -threshold {
            Quadrant::InfrastructureAhead
        } else {
            Quadrant::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::DemandAhead => "Demand-Ahead",
            Quadrant::InfrastructureAhead => "Infrastructure-Ahead",
            Quadrant::Balanced => "Balanced",
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let t = DEFAULT_GAP_THRESHOLD;
        assert_eq!(Quadrant::classify(5.01, t), Quadrant::DemandAhead);
        assert_eq!(Quadrant::classify(5.0, t), Quadrant::Balanced);
        assert_eq!(Quadrant::classify(0.0, t), Quadrant::Balanced);
        assert_eq!(Quadrant::classify(-5.0, t), Quadrant::Balanced);
        assert_eq!(Quadrant::classify(-15.0, t), Quadrant::InfrastructureAhead);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(Quadrant::classify(8.0, 10.0), Quadrant::Balanced);
        assert_eq!(Quadrant::classify(11.0, 10.0), Quadrant::DemandAhead);
    }

    #[test]
    fn test_label_matches_serde_name() {
        let json = serde_json::to_string(&Quadrant::InfrastructureAhead).unwrap();
        assert_eq!(json, format!("\"{}\"", Quadrant::InfrastructureAhead));
    }
}
