// ============================================================================
// MAP VIEWMODEL - Creación del mapa y de las herramientas de dibujo
// ============================================================================

use serde_json::json;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;
use crate::error::{js_error_message, TrailError};
use crate::models::{Coordinate, FeatureCollection};
use crate::utils::constants::{DRAW_LINE_COLOR, MAP_CONTAINER_ID};
use crate::utils::mapbox_ffi::{
    from_js, set_access_token, to_js, FullscreenControl, MapboxDraw, MapboxMap, MapboxMarker,
    NavigationControl,
};

fn map_error(e: JsValue) -> TrailError {
    TrailError::Map(js_error_message(&e))
}

/// Opciones de `new mapboxgl.Map(...)`
pub fn map_options(config: &AppConfig, center: Coordinate) -> serde_json::Value {
    json!({
        "container": MAP_CONTAINER_ID,
        "style": config.map_config.style,
        "center": center,
        "zoom": config.map_config.default_zoom,
    })
}

/// Opciones de MapboxDraw: solo línea y papelera, línea discontinua azul
pub fn draw_options() -> serde_json::Value {
    json!({
        "displayControlsDefault": false,
        "controls": {
            "line_string": true,
            "trash": true
        },
        "styles": [
            {
                "id": "gl-draw-line",
                "type": "line",
                "filter": ["all", ["==", "$type", "LineString"], ["!=", "mode", "static"]],
                "layout": {
                    "line-cap": "round",
                    "line-join": "round"
                },
                "paint": {
                    "line-color": DRAW_LINE_COLOR,
                    "line-dasharray": [0.2, 2],
                    "line-width": 4,
                    "line-opacity": 0.7
                }
            },
            {
                "id": "gl-draw-polygon-and-line-vertex-halo-active",
                "type": "circle",
                "filter": ["all", ["==", "meta", "vertex"], ["==", "$type", "Point"], ["!=", "mode", "static"]],
                "paint": {
                    "circle-radius": 12,
                    "circle-color": "#FFF"
                }
            },
            {
                "id": "gl-draw-polygon-and-line-vertex-active",
                "type": "circle",
                "filter": ["all", ["==", "meta", "vertex"], ["==", "$type", "Point"], ["!=", "mode", "static"]],
                "paint": {
                    "circle-radius": 8,
                    "circle-color": DRAW_LINE_COLOR
                }
            }
        ]
    })
}

/// ViewModel del mapa - SOLO preparación y creación de widgets
pub struct MapViewModel;

impl MapViewModel {
    /// Crea mapa, marcador, controles y herramienta de dibujo
    /// El mapa siempre arranca en el centro configurado, no en el geolocalizado
    pub fn initialize_map(config: &AppConfig) -> Result<(MapboxMap, MapboxDraw), TrailError> {
        if config.mapbox_token().is_empty() {
            log::warn!("⚠️ MAPBOX_ACCESS_TOKEN vacío, el mapa no cargará teselas");
        }
        set_access_token(config.mapbox_token()).map_err(map_error)?;

        let center = config.map_config.fallback_center();
        log::info!("🗺️ Inicializando mapa en ({}, {})", center.lng, center.lat);

        let map = MapboxMap::new(&to_js(&map_options(config, center)).map_err(map_error)?);

        let marker_options = to_js(&json!({ "anchor": "center", "draggable": true })).map_err(map_error)?;
        let lng_lat = to_js(&json!(center)).map_err(map_error)?;
        MapboxMarker::new(&marker_options).set_lng_lat(&lng_lat).add_to(&map);

        map.add_control(&FullscreenControl::new());
        map.add_control_at(&NavigationControl::new(), "top-right");

        let draw = MapboxDraw::new(&to_js(&draw_options()).map_err(map_error)?);
        map.add_control(&draw);

        log::info!("✅ Mapa y herramientas de dibujo listos");
        Ok((map, draw))
    }

    /// Lee lo dibujado con `draw.getAll()`
    pub fn drawn_features(draw: &MapboxDraw) -> Result<FeatureCollection, TrailError> {
        let json = from_js(&draw.get_all()).map_err(map_error)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_options_use_config() {
        let config = AppConfig::default();
        let options = map_options(&config, config.map_config.fallback_center());
        assert_eq!(options["container"], "map");
        assert_eq!(options["center"], json!([-121.608704, 36.703205]));
        assert_eq!(options["zoom"], 14.0);
        assert_eq!(options["style"], "mapbox://styles/mapbox/streets-v11");
    }

    #[test]
    fn test_draw_only_offers_line_and_trash() {
        let options = draw_options();
        assert_eq!(options["displayControlsDefault"], false);
        assert_eq!(options["controls"], json!({"line_string": true, "trash": true}));
        assert_eq!(options["styles"].as_array().unwrap().len(), 3);
    }
}
