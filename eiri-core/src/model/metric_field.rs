use super::NumericDefault;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// logical columns of the metrics table.
///
/// each field lists the source column names it may appear under. the list is
/// ordered: resolution takes the first alias present with a non-empty value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    CountryCode,
    Country,
    Lat,
    Lon,
    Stations,
    MedianPowerKw,
    FastChargerShare,
    UniqueModels,
    CoverageNorm,
    CapacityNorm,
    FastshareNorm,
    AvailabilityNorm,
    Eiri,
    GapValue,
    Quadrant,
    Cluster,
}

impl MetricField {
    pub const ALL: [MetricField; 16] = [
        MetricField::CountryCode,
        MetricField::Country,
        MetricField::Lat,
        MetricField::Lon,
        MetricField::Stations,
        MetricField::MedianPowerKw,
        MetricField::FastChargerShare,
        MetricField::UniqueModels,
        MetricField::CoverageNorm,
        MetricField::CapacityNorm,
        MetricField::FastshareNorm,
        MetricField::AvailabilityNorm,
        MetricField::Eiri,
        MetricField::GapValue,
        MetricField::Quadrant,
        MetricField::Cluster,
    ];

    /// source column names for this field in resolution order.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            MetricField::CountryCode => &["country_code"],
            MetricField::Country => &["country"],
            MetricField::Lat => &["lat", "latitude"],
            MetricField::Lon => &["lon", "lng", "longitude"],
            MetricField::Stations => &["stations"],
            MetricField::MedianPowerKw => &["median_power_kw"],
            MetricField::FastChargerShare => &["fast_dc_share", "fast_charger_share"],
            MetricField::UniqueModels => &["unique_models"],
            MetricField::CoverageNorm => &["coverage_norm"],
            MetricField::CapacityNorm => &["capacity_norm"],
            MetricField::FastshareNorm => &["fastshare_norm"],
            MetricField::AvailabilityNorm => &["availability_norm"],
            MetricField::Eiri => &["EIRI"],
            MetricField::GapValue => &["gap_value"],
            MetricField::Quadrant => &["Quadrant", "quadrant"],
            MetricField::Cluster => &["cluster"],
        }
    }

    /// the defaulting policy of numeric fields, `None` for text fields.
    pub fn numeric_default(&self) -> Option<NumericDefault> {
        match self {
            MetricField::CountryCode | MetricField::Country | MetricField::Quadrant => None,
            MetricField::Lat | MetricField::Lon | MetricField::Cluster => {
                Some(NumericDefault::Null)
            }
            _ => Some(NumericDefault::Zero),
        }
    }

    /// the primary source column name
    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }
}

impl Display for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
