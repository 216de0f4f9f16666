use super::{fetch_ops, read_location, TableSource};
use crate::app::EiriAppError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, path::Path};

/// where the metrics table is retrieved from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MetricsSource {
    File { path: String },
    Url { url: String },
}

impl MetricsSource {
    /// anchors a relative file path at `base`. URLs and absolute paths are
    /// returned unchanged.
    pub fn relative_to(self, base: &Path) -> MetricsSource {
        match self {
            MetricsSource::File { path } => MetricsSource::File {
                path: fetch_ops::rebase_path(&path, base),
            },
            url => url,
        }
    }
}

impl TableSource for MetricsSource {
    async fn read_text(&self) -> Result<String, EiriAppError> {
        match self {
            MetricsSource::File { path } => read_location(path).await,
            MetricsSource::Url { url } => read_location(url).await,
        }
    }
}

impl From<&str> for MetricsSource {
    fn from(location: &str) -> Self {
        if fetch_ops::is_url(location) {
            MetricsSource::Url {
                url: location.to_string(),
            }
        } else {
            MetricsSource::File {
                path: location.to_string(),
            }
        }
    }
}

impl Display for MetricsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsSource::File { path } => write!(f, "file '{path}'"),
            MetricsSource::Url { url } => write!(f, "url '{url}'"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_location() {
        assert_eq!(
            MetricsSource::from("data/agg.csv"),
            MetricsSource::File {
                path: String::from("data/agg.csv")
            }
        );
        assert!(matches!(
            MetricsSource::from("https://example.org/agg.csv"),
            MetricsSource::Url { .. }
        ));
    }

    #[test]
    fn test_relative_to() {
        let base = Path::new("conf");
        assert_eq!(
            MetricsSource::from("agg.csv").relative_to(base),
            MetricsSource::File {
                path: Path::new("conf").join("agg.csv").to_string_lossy().into_owned()
            }
        );
        let url = MetricsSource::from("https://example.org/agg.csv");
        assert_eq!(url.clone().relative_to(base), url);
    }

    #[test]
    fn test_tagged_serde() {
        let source: MetricsSource =
            serde_json::from_str(r#"{"type": "file", "path": "agg.csv"}"#).unwrap();
        assert_eq!(
            source,
            MetricsSource::File {
                path: String::from("agg.csv")
            }
        );
    }
}
