use eiri_core::{
    ingest::{NormalizeReport, Normalized},
    model::CountryMetric,
};

/// the canonical record set of a session. immutable once loaded; an empty
/// dataset is the "no data" state shown while loading or after a failure.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<CountryMetric>,
    report: NormalizeReport,
}

impl Dataset {
    pub fn empty() -> Dataset {
        Dataset::default()
    }

    pub fn records(&self) -> &[CountryMetric] {
        &self.records
    }

    /// what normalization dropped or coerced for this dataset
    pub fn report(&self) -> &NormalizeReport {
        &self.report
    }

    pub fn get(&self, country_code: &str) -> Option<&CountryMetric> {
        self.records.iter().find(|r| r.country_code == country_code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Normalized> for Dataset {
    fn from(value: Normalized) -> Self {
        Dataset {
            records: value.records,
            report: value.report,
        }
    }
}
