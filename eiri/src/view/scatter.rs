use eiri_core::model::CountryMetric;
use serde::{Deserialize, Serialize};

/// a point of the readiness vs. model availability correlation plot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub country_code: String,
    pub label: String,
    /// EIRI
    pub x: f64,
    /// availability_norm
    pub y: f64,
}

pub fn scatter_points(records: &[CountryMetric]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            country_code: r.country_code.clone(),
            label: r.display_name().to_string(),
            x: r.eiri,
            y: r.availability_norm,
        })
        .collect()
}
