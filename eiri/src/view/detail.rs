use crate::session::{Dataset, Selection};
use eiri_core::model::CountryMetric;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// shown in place of a value that does not exist
pub const NOT_AVAILABLE: &str = "—";
/// shown when a record has no quadrant label
pub const UNKNOWN_QUADRANT: &str = "Quadrant Unknown";

/// badge colour band of the EIRI shown in the detail panel
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// EIRI >= 20
    Strong,
    /// 10 <= EIRI < 20
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_eiri(eiri: f64) -> ScoreBand {
        if eiri >= 20.0 {
            ScoreBand::Strong
        } else if eiri >= 10.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

/// display-ready values of the selected country
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DetailView {
    pub country_code: String,
    pub title: String,
    pub eiri: String,
    pub score_band: ScoreBand,
    pub quadrant: String,
    pub stations: String,
    pub availability_index: String,
    pub gap_score: String,
    pub cluster: String,
}

impl From<&CountryMetric> for DetailView {
    fn from(record: &CountryMetric) -> Self {
        let quadrant = if record.quadrant.is_empty() {
            String::from(UNKNOWN_QUADRANT)
        } else {
            record.quadrant.clone()
        };
        DetailView {
            country_code: record.country_code.clone(),
            title: record.display_name().to_string(),
            eiri: format!("{:.1}", record.eiri),
            score_band: ScoreBand::from_eiri(record.eiri),
            quadrant,
            stations: group_thousands(record.stations),
            availability_index: format!("{:.0}", record.availability_norm),
            gap_score: format!("{:.1}", record.gap_value),
            cluster: record
                .cluster
                .map(format_plain)
                .unwrap_or_else(|| String::from(NOT_AVAILABLE)),
        }
    }
}

/// what the detail panel renders
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DetailPanel {
    NoSelection,
    Country(DetailView),
}

impl DetailPanel {
    pub fn from_selection(selection: &Selection, dataset: &Dataset) -> DetailPanel {
        match selection.resolve(dataset) {
            Some(record) => DetailPanel::Country(DetailView::from(record)),
            None => DetailPanel::NoSelection,
        }
    }
}

impl Display for DetailPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailPanel::NoSelection => write!(f, "No country selected"),
            DetailPanel::Country(view) => {
                writeln!(f, "{} ({})", view.title, view.country_code)?;
                writeln!(f, "EIRI {}", view.eiri)?;
                writeln!(f, "{}", view.quadrant)?;
                writeln!(f, "Charging Stations: {}", view.stations)?;
                writeln!(f, "EV Models (Index): {}", view.availability_index)?;
                writeln!(f, "Gap Score: {}", view.gap_score)?;
                write!(f, "Cluster Group: {}", view.cluster)
            }
        }
    }
}

/// whole numbers without a fractional part, others as-is
fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// formats a count with comma thousands separators and at most 3 decimals
fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .join(",");
    let sign = if value < 0.0 && !rounded.trim_matches(['0', '.']).is_empty() {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
