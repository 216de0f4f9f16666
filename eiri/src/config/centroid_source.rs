use super::{fetch_ops, read_location};
use crate::app::EiriAppError;
use eiri_core::geo::CentroidTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// where the centroid table is retrieved from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CentroidSource {
    /// approximate country centers compiled into the crate
    #[default]
    Builtin,
    /// JSON document keyed by country code
    File { path: String },
    Url { url: String },
}

impl CentroidSource {
    /// anchors a relative file path at `base`
    pub fn relative_to(self, base: &Path) -> CentroidSource {
        match self {
            CentroidSource::File { path } => CentroidSource::File {
                path: fetch_ops::rebase_path(&path, base),
            },
            other => other,
        }
    }

    /// loads the table. retrieval or decoding failures are logged and recovered
    /// as an empty table, which leaves the map empty but the rest of the
    /// dashboard intact.
    pub async fn load(&self) -> CentroidTable {
        match self.try_load().await {
            Ok(table) => {
                log::info!("loaded {} centroids", table.len());
                table
            }
            Err(e) => {
                log::error!("{e}, continuing without centroids");
                CentroidTable::empty()
            }
        }
    }

    pub async fn try_load(&self) -> Result<CentroidTable, EiriAppError> {
        let text = match self {
            CentroidSource::Builtin => return Ok(CentroidTable::builtin()),
            CentroidSource::File { path } => read_location(path).await?,
            CentroidSource::Url { url } => read_location(url).await?,
        };
        let table = CentroidTable::from_json_str(&text)?;
        Ok(table)
    }
}

impl From<Option<&str>> for CentroidSource {
    fn from(location: Option<&str>) -> Self {
        match location {
            None => CentroidSource::Builtin,
            Some(l) if fetch_ops::is_url(l) => CentroidSource::Url { url: l.to_string() },
            Some(l) => CentroidSource::File {
                path: l.to_string(),
            },
        }
    }
}
