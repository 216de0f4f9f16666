use super::{marker_radius, ReadinessTier};
use eiri_core::{
    geo::{Centroid, CentroidTable},
    model::CountryMetric,
};
use geo::Point;
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// a circle marker on the readiness map
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub country_code: String,
    pub label: String,
    pub centroid: Centroid,
    pub eiri: f64,
    pub tier: ReadinessTier,
    pub color: String,
    pub radius: f64,
}

impl MapMarker {
    pub fn new(record: &CountryMetric, centroid: Centroid) -> MapMarker {
        let tier = ReadinessTier::from_eiri(record.eiri);
        MapMarker {
            country_code: record.country_code.clone(),
            label: record.display_name().to_string(),
            centroid,
            eiri: record.eiri,
            tier,
            color: tier.color().to_string(),
            radius: marker_radius(record.eiri),
        }
    }

    pub fn to_feature(&self) -> Feature {
        let point: Point<f64> = self.centroid.into();
        let mut properties = JsonObject::new();
        properties.insert(String::from("country_code"), JsonValue::from(self.country_code.clone()));
        properties.insert(String::from("label"), JsonValue::from(self.label.clone()));
        properties.insert(String::from("EIRI"), JsonValue::from(self.eiri));
        properties.insert(String::from("tier"), JsonValue::from(self.tier.to_string()));
        properties.insert(String::from("color"), JsonValue::from(self.color.clone()));
        properties.insert(String::from("radius"), JsonValue::from(self.radius));
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&point))),
            id: Some(Id::String(self.country_code.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// joins records against the centroid table. records whose centroid is
/// missing or unusable are left off the map and stay in every other view.
pub fn build_markers(records: &[CountryMetric], centroids: &CentroidTable) -> Vec<MapMarker> {
    let markers = records
        .iter()
        .filter_map(|record| {
            centroids
                .resolve(&record.country_code)
                .map(|centroid| MapMarker::new(record, centroid))
        })
        .collect::<Vec<_>>();
    let omitted = records.len() - markers.len();
    if omitted > 0 {
        log::info!("{omitted} of {} countries have no usable centroid", records.len());
    }
    markers
}

pub fn markers_to_geojson(markers: &[MapMarker]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: markers.iter().map(MapMarker::to_feature).collect(),
        foreign_members: None,
    }
}
