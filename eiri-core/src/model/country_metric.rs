use super::{parse_finite, MetricField, Quadrant, RawRecord, ZERO_DEFAULT};
use serde::{Deserialize, Serialize};

/// canonical per-country record consumed by every dashboard view.
///
/// serialized field names match the source column names accepted by
/// [`crate::ingest::normalize`], so a serialized record set can be read back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountryMetric {
    pub country_code: String,
    /// display name, falls back to the country code
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub stations: f64,
    pub median_power_kw: f64,
    /// share of DC fast/ultra-fast charging ports
    pub fast_charger_share: f64,
    pub unique_models: f64,
    pub coverage_norm: f64,
    pub capacity_norm: f64,
    pub fastshare_norm: f64,
    pub availability_norm: f64,
    #[serde(rename = "EIRI")]
    pub eiri: f64,
    /// availability_norm - EIRI unless supplied by the source. a supplied
    /// value that is not a number reads as 0.
    pub gap_value: f64,
    #[serde(rename = "Quadrant")]
    pub quadrant: String,
    /// externally assigned group id
    pub cluster: Option<f64>,
}

impl CountryMetric {
    /// builds a canonical record from a raw row.
    ///
    /// # Arguments
    ///
    /// * `record` - source row
    /// * `gap_threshold` - threshold used to classify the row when the source
    ///   does not supply a quadrant label
    ///
    /// # Returns
    ///
    /// `None` when the row has no country code, otherwise the record.
    pub fn from_raw(record: &RawRecord, gap_threshold: f64) -> Option<CountryMetric> {
        let country_code = record.field(MetricField::CountryCode)?.to_string();
        let zero = |field: MetricField| record.numeric(field).unwrap_or(ZERO_DEFAULT);

        let eiri = zero(MetricField::Eiri);
        let availability_norm = zero(MetricField::AvailabilityNorm);
        let gap_value = match record.field(MetricField::GapValue) {
            Some(supplied) => parse_finite(supplied).unwrap_or(ZERO_DEFAULT),
            None => availability_norm - eiri,
        };
        let quadrant = match record.field(MetricField::Quadrant) {
            Some(label) => label.to_string(),
            None => Quadrant::classify(gap_value, gap_threshold).to_string(),
        };
        let country = record
            .field(MetricField::Country)
            .map(String::from)
            .unwrap_or_else(|| country_code.clone());

        Some(CountryMetric {
            country,
            lat: record.numeric(MetricField::Lat),
            lon: record.numeric(MetricField::Lon),
            stations: zero(MetricField::Stations),
            median_power_kw: zero(MetricField::MedianPowerKw),
            fast_charger_share: zero(MetricField::FastChargerShare),
            unique_models: zero(MetricField::UniqueModels),
            coverage_norm: zero(MetricField::CoverageNorm),
            capacity_norm: zero(MetricField::CapacityNorm),
            fastshare_norm: zero(MetricField::FastshareNorm),
            availability_norm,
            eiri,
            gap_value,
            quadrant,
            cluster: record.numeric(MetricField::Cluster),
            country_code,
        })
    }

    /// label shown by charts and markers
    pub fn display_name(&self) -> &str {
        if self.country.is_empty() {
            &self.country_code
        } else {
            &self.country
        }
    }

    /// every numeric value other than the nullable ones
    pub fn numeric_values(&self) -> [f64; 11] {
        [
            self.stations,
            self.median_power_kw,
            self.fast_charger_share,
            self.unique_models,
            self.coverage_norm,
            self.capacity_norm,
            self.fastshare_norm,
            self.availability_norm,
            self.eiri,
            self.gap_value,
            self.cluster.unwrap_or(ZERO_DEFAULT),
        ]
    }
}
