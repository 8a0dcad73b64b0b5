// ============================================================================
// ROUTE LAYER - Una sola capa "route" en el mapa
// ============================================================================

use serde_json::json;

use super::traits::RouteLayerHost;
use crate::error::TrailError;
use crate::models::LineString;
use crate::utils::constants::{ROUTE_LAYER_ID, ROUTE_LINE_COLOR, ROUTE_LINE_OPACITY, ROUTE_LINE_WIDTH};

/// Especificación de capa Mapbox para la ruta ajustada
pub fn route_layer_spec(geometry: &LineString) -> serde_json::Value {
    json!({
        "id": ROUTE_LAYER_ID,
        "type": "line",
        "source": {
            "type": "geojson",
            "data": {
                "type": "Feature",
                "properties": {},
                "geometry": geometry,
            }
        },
        "layout": {
            "line-join": "round",
            "line-cap": "round"
        },
        "paint": {
            "line-color": ROUTE_LINE_COLOR,
            "line-width": ROUTE_LINE_WIDTH,
            "line-opacity": ROUTE_LINE_OPACITY
        }
    })
}

/// Dibuja la ruta; si ya había una la reemplaza
pub fn show_route(host: &mut dyn RouteLayerHost, geometry: &LineString) -> Result<(), TrailError> {
    if remove_route(host)? {
        log::info!("🧹 Ruta anterior eliminada antes de dibujar la nueva");
    }
    host.add_layer(&route_layer_spec(geometry))?;
    log::info!("🗺️ Ruta dibujada ({} puntos)", geometry.len());
    Ok(())
}

/// Elimina capa y fuente de la ruta. Devuelve `false` si no había ruta
pub fn remove_route(host: &mut dyn RouteLayerHost) -> Result<bool, TrailError> {
    if !host.has_source(ROUTE_LAYER_ID) {
        return Ok(false);
    }
    host.remove_layer(ROUTE_LAYER_ID)?;
    host.remove_source(ROUTE_LAYER_ID)?;
    Ok(true)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Coordinate;

    /// Mapa falso que registra cada llamada
    #[derive(Default)]
    pub(crate) struct RecordingMap {
        pub sources: Vec<String>,
        pub calls: Vec<String>,
    }

    impl RouteLayerHost for RecordingMap {
        fn has_source(&self, id: &str) -> bool {
            self.sources.iter().any(|s| s == id)
        }

        fn add_layer(&mut self, layer: &serde_json::Value) -> Result<(), TrailError> {
            let id = layer["id"].as_str().unwrap_or_default().to_string();
            self.calls.push(format!("add_layer:{}", id));
            self.sources.push(id);
            Ok(())
        }

        fn remove_layer(&mut self, id: &str) -> Result<(), TrailError> {
            self.calls.push(format!("remove_layer:{}", id));
            Ok(())
        }

        fn remove_source(&mut self, id: &str) -> Result<(), TrailError> {
            self.calls.push(format!("remove_source:{}", id));
            self.sources.retain(|s| s != id);
            Ok(())
        }
    }

    fn line() -> LineString {
        LineString::new(vec![Coordinate::new(-121.6, 36.7), Coordinate::new(-121.61, 36.71)])
    }

    #[test]
    fn test_remove_without_route_is_noop() {
        let mut map = RecordingMap::default();
        assert!(!remove_route(&mut map).unwrap());
        assert!(map.calls.is_empty());
    }

    #[test]
    fn test_show_route_adds_single_layer() {
        let mut map = RecordingMap::default();
        show_route(&mut map, &line()).unwrap();
        assert_eq!(map.calls, vec!["add_layer:route"]);
        assert_eq!(map.sources, vec!["route"]);
    }

    #[test]
    fn test_show_route_replaces_existing() {
        let mut map = RecordingMap::default();
        show_route(&mut map, &line()).unwrap();
        show_route(&mut map, &line()).unwrap();
        assert_eq!(
            map.calls,
            vec!["add_layer:route", "remove_layer:route", "remove_source:route", "add_layer:route"]
        );
        assert_eq!(map.sources.len(), 1);
    }

    #[test]
    fn test_layer_spec_style_and_geometry() {
        let spec = route_layer_spec(&line());
        assert_eq!(spec["paint"]["line-color"], "#03AA46");
        assert_eq!(spec["paint"]["line-width"], 8.0);
        assert_eq!(spec["paint"]["line-opacity"], 0.8);
        assert_eq!(spec["source"]["data"]["geometry"]["type"], "LineString");
        assert_eq!(spec["source"]["data"]["geometry"]["coordinates"][0][0], -121.6);
    }
}
