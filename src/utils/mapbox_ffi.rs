// ============================================================================
// MAPBOX FFI - Bindings a Mapbox GL JS y Mapbox GL Draw
// ============================================================================
// Solo wrappers para clases JS - Sin estado, sin lógica
// Las librerías las carga la página HTML (<script> de mapbox-gl y mapbox-gl-draw)
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // ---- mapboxgl.Map ----
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Clone, Debug)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map")]
    pub fn new(options: &JsValue) -> MapboxMap;

    #[wasm_bindgen(method, js_name = getSource)]
    pub fn get_source(this: &MapboxMap, id: &str) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MapboxMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeLayer)]
    pub fn remove_layer(this: &MapboxMap, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeSource)]
    pub fn remove_source(this: &MapboxMap, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &MapboxMap, control: &JsValue);

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control_at(this: &MapboxMap, control: &JsValue, position: &str);

    #[wasm_bindgen(method)]
    pub fn on(this: &MapboxMap, event: &str, handler: &js_sys::Function);

    // ---- mapboxgl.Marker ----
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Marker)]
    #[derive(Clone, Debug)]
    pub type MapboxMarker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Marker")]
    pub fn new(options: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &MapboxMarker, lng_lat: &JsValue) -> MapboxMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &MapboxMarker, map: &MapboxMap) -> MapboxMarker;

    // ---- Controles ----
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = FullscreenControl)]
    pub type FullscreenControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "FullscreenControl")]
    pub fn new() -> FullscreenControl;

    #[wasm_bindgen(js_namespace = mapboxgl, js_name = NavigationControl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl")]
    pub fn new() -> NavigationControl;

    // ---- MapboxDraw (global) ----
    #[derive(Clone, Debug)]
    pub type MapboxDraw;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> MapboxDraw;

    /// FeatureCollection con todo lo dibujado
    #[wasm_bindgen(method, js_name = getAll)]
    pub fn get_all(this: &MapboxDraw) -> JsValue;
}

/// Helper: asignar `mapboxgl.accessToken`
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    let mapboxgl = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))?;
    if mapboxgl.is_undefined() {
        return Err(JsValue::from_str("mapboxgl no está cargado"));
    }
    js_sys::Reflect::set(&mapboxgl, &JsValue::from_str("accessToken"), &JsValue::from_str(token))?;
    Ok(())
}

/// Helper: convertir un valor serde_json en objeto JS
pub fn to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

/// Helper: convertir un objeto JS en texto JSON
pub fn from_js(value: &JsValue) -> Result<String, JsValue> {
    js_sys::JSON::stringify(value).map(String::from)
}
