use geo::Point;
use serde::{Deserialize, Serialize};

/// representative point of a country, used for map placement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
}

impl Centroid {
    /// builds a centroid, failing with a reason when either axis is not a
    /// finite number in range.
    pub fn try_new(lat: f64, lon: f64) -> Result<Centroid, String> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(format!("non-finite coordinate ({lat}, {lon})"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {lon} outside [-180, 180]"));
        }
        Ok(Centroid { lat, lon })
    }
}

impl From<Centroid> for Point<f64> {
    fn from(value: Centroid) -> Self {
        Point::new(value.lon, value.lat)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_point_is_lon_lat() {
        let point: Point<f64> = Centroid::try_new(46.2, 2.2).unwrap().into();
        assert_eq!(point.x(), 2.2);
        assert_eq!(point.y(), 46.2);
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(Centroid::try_new(f64::NAN, 1.0).is_err());
        assert!(Centroid::try_new(1.0, f64::INFINITY).is_err());
        assert!(Centroid::try_new(91.0, 1.0).is_err());
        assert!(Centroid::try_new(1.0, -180.5).is_err());
        assert!(Centroid::try_new(-90.0, 180.0).is_ok());
    }
}
