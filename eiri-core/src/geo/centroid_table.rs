use super::{Centroid, CentroidEntry, CentroidError, BUILTIN_CENTROIDS};
use serde_json::Value;
use std::collections::HashMap;

/// country centroids keyed by country code.
///
/// read-only after loading. lookups never fail: a missing or unusable entry
/// resolves to `None`, which excludes that country from the map only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CentroidTable {
    entries: HashMap<String, CentroidEntry>,
}

impl CentroidTable {
    pub fn empty() -> CentroidTable {
        CentroidTable::default()
    }

    /// the fixed in-code table of approximate country centers
    pub fn builtin() -> CentroidTable {
        let entries = BUILTIN_CENTROIDS
            .iter()
            .map(|(code, [lat, lon])| (code.to_string(), CentroidEntry::from_lat_lon(*lat, *lon)))
            .collect::<HashMap<_, _>>();
        CentroidTable { entries }
    }

    /// builds a table from a decoded JSON document.
    ///
    /// the document must be an object keyed by country code. any other shape
    /// (notably an array) is reported once here and yields an empty table.
    pub fn from_json_value(value: Value) -> CentroidTable {
        match CentroidTable::try_from_json_value(value) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("{e}, continuing with an empty centroid table");
                CentroidTable::empty()
            }
        }
    }

    /// builds a table from a decoded JSON document, failing if the document is
    /// not an object.
    pub fn try_from_json_value(value: Value) -> Result<CentroidTable, CentroidError> {
        match value {
            Value::Object(map) => {
                let entries = map
                    .into_iter()
                    .map(|(code, v)| {
                        let entry = serde_json::from_value::<CentroidEntry>(v)?;
                        Ok((code, entry))
                    })
                    .collect::<Result<HashMap<_, _>, CentroidError>>()?;
                Ok(CentroidTable { entries })
            }
            other => Err(CentroidError::UnresolvableTableShape(json_type_name(&other))),
        }
    }

    /// decodes a JSON string into a table. malformed JSON is an error, a
    /// well-formed document of the wrong shape is an empty table.
    pub fn from_json_str(s: &str) -> Result<CentroidTable, CentroidError> {
        let value: Value = serde_json::from_str(s)?;
        Ok(CentroidTable::from_json_value(value))
    }

    /// looks up the display coordinates of a country.
    ///
    /// matching is exact and case-sensitive.
    ///
    /// # Returns
    ///
    /// the centroid, or `None` when the code is absent or its entry cannot be
    /// interpreted. the latter is logged as a diagnostic.
    pub fn resolve(&self, country_code: &str) -> Option<Centroid> {
        let entry = self.entries.get(country_code)?;
        match entry.resolve() {
            Ok(centroid) => Some(centroid),
            Err(reason) => {
                let e = CentroidError::UnresolvableEntry {
                    code: country_code.to_string(),
                    reason,
                };
                log::warn!("{e}, omitting it from the map");
                None
            }
        }
    }

    pub fn contains(&self, country_code: &str) -> bool {
        self.entries.contains_key(country_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_type_name(value: &Value) -> String {
    let name = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    String::from(name)
}
