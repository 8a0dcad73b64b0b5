use super::traits::RouteLayerHost;
use crate::error::{js_error_message, TrailError};
use crate::utils::mapbox_ffi::{to_js, MapboxMap};

/// Implementación sobre Mapbox GL JS
#[derive(Clone)]
pub struct WebRouteMap {
    map: MapboxMap,
}

impl WebRouteMap {
    pub fn new(map: MapboxMap) -> Self {
        Self { map }
    }

    pub fn inner(&self) -> &MapboxMap {
        &self.map
    }
}

impl RouteLayerHost for WebRouteMap {
    fn has_source(&self, id: &str) -> bool {
        let source = self.map.get_source(id);
        !(source.is_undefined() || source.is_null())
    }

    fn add_layer(&mut self, layer: &serde_json::Value) -> Result<(), TrailError> {
        let layer = to_js(layer).map_err(|e| TrailError::Map(js_error_message(&e)))?;
        self.map
            .add_layer(&layer)
            .map_err(|e| TrailError::Map(js_error_message(&e)))
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), TrailError> {
        self.map
            .remove_layer(id)
            .map_err(|e| TrailError::Map(js_error_message(&e)))
    }

    fn remove_source(&mut self, id: &str) -> Result<(), TrailError> {
        self.map
            .remove_source(id)
            .map_err(|e| TrailError::Map(js_error_message(&e)))
    }
}
