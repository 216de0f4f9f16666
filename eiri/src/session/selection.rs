use super::Dataset;
use eiri_core::model::CountryMetric;
use serde::{Deserialize, Serialize};

/// the country currently selected in the dashboard, if any.
///
/// any visual may set it; the last selection wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    country_code: Option<String>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    /// applies a selection event. `None` clears the selection.
    pub fn select(&mut self, country_code: Option<&str>) {
        self.country_code = country_code.map(String::from);
    }

    pub fn clear(&mut self) {
        self.country_code = None;
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// the selected record, or `None` when nothing is selected or the selected
    /// code is not in this dataset (e.g. after a reload with different codes)
    pub fn resolve<'a>(&self, dataset: &'a Dataset) -> Option<&'a CountryMetric> {
        self.country_code
            .as_deref()
            .and_then(|code| dataset.get(code))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use eiri_core::ingest::{normalize, NormalizeOptions};

    fn dataset(text: &str) -> Dataset {
        Dataset::from(normalize(text, &NormalizeOptions::default()).unwrap())
    }

    #[test]
    fn test_last_write_wins() {
        let mut selection = Selection::new();
        assert_eq!(selection.country_code(), None);
        selection.select(Some("DE"));
        selection.select(Some("FR"));
        assert_eq!(selection.country_code(), Some("FR"));
        selection.select(None);
        assert_eq!(selection.country_code(), None);
        selection.select(Some("NO"));
        selection.clear();
        assert_eq!(selection.country_code(), None);
    }

    #[test]
    fn test_resolve_against_dataset() {
        let data = dataset("country_code,stations\nDE,100\nFR,200\n");
        let mut selection = Selection::new();
        assert!(selection.resolve(&data).is_none());
        selection.select(Some("FR"));
        assert_eq!(
            selection.resolve(&data).map(|r| r.stations),
            Some(200.0)
        );
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let mut selection = Selection::new();
        selection.select(Some("DE"));
        let reloaded = dataset("country_code,stations\nFR,200\n");
        assert!(selection.resolve(&reloaded).is_none());
        assert!(selection.resolve(&Dataset::empty()).is_none());
    }
}
