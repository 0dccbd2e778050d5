use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Position as a `(latitude, longitude)` pair in degrees.
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.5}, {:.5})",
            self.name, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn deserialize_from_json() {
        let coord: Coordinate =
            serde_json::from_str(r#"{"name": "Konstanz", "latitude": 47.66, "longitude": 9.17}"#)
                .unwrap();

        assert_eq!(coord, Coordinate::new("Konstanz", 47.66, 9.17));
        assert_eq!(coord.lat_lon(), (47.66, 9.17));
    }

    #[test]
    fn validity() {
        assert!(Coordinate::new("a", 90.0, 180.0).is_valid());
        assert!(!Coordinate::new("b", f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new("c", 0.0, f64::INFINITY).is_valid());
        assert!(!Coordinate::new("d", 91.0, 0.0).is_valid());
    }
}
