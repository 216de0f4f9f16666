use super::Centroid;
use crate::model::parse_finite;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// accepted latitude keys of an object-shaped entry, in resolution order
pub const LAT_KEYS: [&str; 2] = ["lat", "latitude"];
/// accepted longitude keys of an object-shaped entry, in resolution order
pub const LON_KEYS: [&str; 3] = ["lon", "lng", "longitude"];

/// a centroid as stored in the source table. entries are kept as loaded and
/// interpreted on lookup, so one bad entry never affects the others.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum CentroidEntry {
    /// `[lat, lon, ...]`, extra elements are ignored
    Tuple(Vec<Value>),
    /// `{"lat": .., "lon": ..}` or any of the key aliases
    Object(Map<String, Value>),
    Unrecognized(Value),
}

impl CentroidEntry {
    pub fn from_lat_lon(lat: f64, lon: f64) -> CentroidEntry {
        CentroidEntry::Tuple(vec![Value::from(lat), Value::from(lon)])
    }

    /// interprets this entry as a centroid.
    ///
    /// # Result
    ///
    /// the centroid, or a description of why the entry cannot be used
    pub fn resolve(&self) -> Result<Centroid, String> {
        match self {
            CentroidEntry::Tuple(values) => match values.as_slice() {
                [lat, lon, ..] => {
                    let lat = coordinate(lat).ok_or_else(|| format!("latitude {lat} is not a number"))?;
                    let lon = coordinate(lon).ok_or_else(|| format!("longitude {lon} is not a number"))?;
                    Centroid::try_new(lat, lon)
                }
                _ => Err(format!(
                    "expected at least 2 coordinates, found {}",
                    values.len()
                )),
            },
            CentroidEntry::Object(map) => {
                let lat = first_coordinate(map, &LAT_KEYS)
                    .ok_or_else(|| format!("missing numeric value for any of {LAT_KEYS:?}"))?;
                let lon = first_coordinate(map, &LON_KEYS)
                    .ok_or_else(|| format!("missing numeric value for any of {LON_KEYS:?}"))?;
                Centroid::try_new(lat, lon)
            }
            CentroidEntry::Unrecognized(value) => {
                Err(format!("unsupported centroid value '{value}'"))
            }
        }
    }
}

/// first key alias present in the object, read as a coordinate.
/// a present key with an unusable value does not fall through to later aliases.
fn first_coordinate(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| map.get(*key))
        .and_then(coordinate)
}

/// JSON numbers and numeric strings are accepted
fn coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_finite(s),
        _ => None,
    }
}
