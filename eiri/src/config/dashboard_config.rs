use super::{CentroidSource, MetricsSource};
use crate::app::EiriAppError;
use eiri_core::ingest::NormalizeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// bars in the readiness ranking chart
pub const DEFAULT_TOP_EIRI_COUNT: usize = 15;
/// bars in the gap ranking chart
pub const DEFAULT_TOP_GAP_COUNT: usize = 10;

/// defines the data sources and tunables of a dashboard session
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// may be omitted here and provided on the command line instead
    pub metrics_source: Option<MetricsSource>,
    pub centroid_source: CentroidSource,
    pub normalize: NormalizeOptions,
    pub top_eiri_count: usize,
    pub top_gap_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            metrics_source: None,
            centroid_source: CentroidSource::default(),
            normalize: NormalizeOptions::default(),
            top_eiri_count: DEFAULT_TOP_EIRI_COUNT,
            top_gap_count: DEFAULT_TOP_GAP_COUNT,
        }
    }
}

impl DashboardConfig {
    /// anchors relative file sources at `base`
    pub fn relative_to(self, base: &Path) -> DashboardConfig {
        DashboardConfig {
            metrics_source: self.metrics_source.map(|m| m.relative_to(base)),
            centroid_source: self.centroid_source.relative_to(base),
            ..self
        }
    }
}

impl TryFrom<&str> for DashboardConfig {
    type Error = EiriAppError;

    /// reads a `.toml` or `.json` configuration file. relative source paths
    /// in the file are resolved against the directory holding it.
    fn try_from(f: &str) -> Result<Self, Self::Error> {
        let read = || {
            std::fs::read_to_string(f).map_err(|e| {
                EiriAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        let conf: DashboardConfig = if f.ends_with(".toml") {
            toml::from_str(&read()?).map_err(|e| {
                EiriAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            serde_json::from_str(&read()?).map_err(|e| {
                EiriAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(EiriAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        let base = Path::new(f).parent().unwrap_or_else(|| Path::new(""));
        Ok(conf.relative_to(base))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::TableSource;
    use eiri_core::ingest::DuplicateKeyPolicy;
    use std::path::PathBuf;

    fn fixture(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_read_toml() {
        let conf = DashboardConfig::try_from(fixture("dashboard.toml").as_str())
            .expect("fixture config should decode");
        assert_eq!(conf.normalize.min_stations, 100.0);
        assert_eq!(conf.normalize.gap_threshold, 5.0);
        assert_eq!(
            conf.normalize.duplicate_key_policy,
            DuplicateKeyPolicy::FirstWins
        );
        assert_eq!(conf.top_eiri_count, 5);
        assert_eq!(conf.top_gap_count, DEFAULT_TOP_GAP_COUNT);
        assert_eq!(
            conf.metrics_source,
            Some(MetricsSource::File {
                path: fixture("agg_sample.csv")
            })
        );
        assert_eq!(
            conf.centroid_source,
            CentroidSource::File {
                path: fixture("centroids.json")
            }
        );
    }

    #[tokio::test]
    async fn test_config_sources_load_from_any_working_directory() {
        let conf = DashboardConfig::try_from(fixture("dashboard.toml").as_str())
            .expect("fixture config should decode");
        let source = conf.metrics_source.expect("fixture names a metrics source");
        let text = source.read_text().await.expect("path is anchored at the config");
        assert!(text.starts_with("country_code"));
        let table = conf.centroid_source.try_load().await.expect("centroids load");
        assert!(table.contains("DE"));
    }

    #[test]
    fn test_empty_json_is_default() {
        let conf: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(conf, DashboardConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DashboardConfig::try_from("dashboard.yaml");
        assert!(matches!(result, Err(EiriAppError::ConfigurationError(_))));
    }
}
