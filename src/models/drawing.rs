// Features que devuelve `MapboxDraw.getAll()`

use serde::Deserialize;

use super::Coordinate;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<DrawnFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrawnFeature {
    #[serde(default)]
    pub id: Option<String>,
    pub geometry: DrawnGeometry,
}

/// Solo se dibujan líneas (el control de polígonos/puntos está desactivado)
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DrawnGeometry {
    LineString { coordinates: Vec<Coordinate> },
    #[serde(other)]
    Other,
}

impl FeatureCollection {
    /// Coordenadas de la última línea dibujada, si existe
    pub fn last_line(&self) -> Option<&[Coordinate]> {
        match &self.features.last()?.geometry {
            DrawnGeometry::LineString { coordinates } if !coordinates.is_empty() => {
                Some(coordinates.as_slice())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_line_uses_most_recent_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"id": "a", "type": "Feature", "properties": {},
                 "geometry": {"type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]]}},
                {"id": "b", "type": "Feature", "properties": {},
                 "geometry": {"type": "LineString", "coordinates": [[5.0, 6.0], [7.0, 8.0], [9.0, 10.0]]}}
            ]
        }"#;
        let collection: FeatureCollection = serde_json::from_str(json).unwrap();
        let line = collection.last_line().unwrap();
        assert_eq!(line.len(), 3);
        assert_eq!(line[0], Coordinate::new(5.0, 6.0));
    }

    #[test]
    fn test_last_line_ignores_non_line_geometry() {
        let json = r#"{"features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}
        ]}"#;
        let collection: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.features[0].geometry, DrawnGeometry::Other);
        assert!(collection.last_line().is_none());
    }

    #[test]
    fn test_empty_collection_has_no_line() {
        assert!(FeatureCollection::default().last_line().is_none());
    }
}
