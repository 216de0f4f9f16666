use eiri_core::model::CountryMetric;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// metrics a ranking chart can be ordered by
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankField {
    Eiri,
    GapValue,
}

impl RankField {
    pub fn value(&self, record: &CountryMetric) -> f64 {
        match self {
            RankField::Eiri => record.eiri,
            RankField::GapValue => record.gap_value,
        }
    }
}

/// one bar of a ranking chart
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RankedEntry {
    /// 1-based position
    pub rank: usize,
    pub country_code: String,
    pub label: String,
    pub value: f64,
}

/// the `n` records with the highest value of `field`, highest first.
/// ties keep their dataset order.
pub fn top_n(records: &[CountryMetric], field: RankField, n: usize) -> Vec<RankedEntry> {
    records
        .iter()
        .sorted_by(|a, b| field.value(b).total_cmp(&field.value(a)))
        .take(n)
        .enumerate()
        .map(|(idx, record)| RankedEntry {
            rank: idx + 1,
            country_code: record.country_code.clone(),
            label: record.display_name().to_string(),
            value: field.value(record),
        })
        .collect_vec()
}

/// the two ranking charts of the dashboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Rankings {
    pub top_eiri: Vec<RankedEntry>,
    pub top_gap: Vec<RankedEntry>,
}

impl Rankings {
    pub fn build(records: &[CountryMetric], top_eiri_count: usize, top_gap_count: usize) -> Rankings {
        Rankings {
            top_eiri: top_n(records, RankField::Eiri, top_eiri_count),
            top_gap: top_n(records, RankField::GapValue, top_gap_count),
        }
    }
}
