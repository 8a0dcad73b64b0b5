// ============================================================================
// GEOLOCATION - Centro del mapa a partir de la ubicación del dispositivo
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PositionOptions;

use crate::models::Coordinate;

/// Centro final: el del dispositivo si lo hay, si no el de respaldo
pub fn resolve_center(device: Option<Coordinate>, fallback: Coordinate) -> Coordinate {
    device.unwrap_or(fallback)
}

/// Lee `pos.coords.longitude/latitude` de un GeolocationPosition
fn coordinate_from_position(position: &JsValue) -> Option<Coordinate> {
    let coords = js_sys::Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let lng = js_sys::Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    let lat = js_sys::Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    Some(Coordinate::new(lng, lat))
}

/// Opciones de `getCurrentPosition`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPolicy {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl PositionPolicy {
    /// Alta precisión y sin posición cacheada
    pub fn fresh_fix(timeout_ms: u32) -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms,
            maximum_age_ms: 0,
        }
    }

    pub fn to_options(&self) -> PositionOptions {
        let options = PositionOptions::new();
        options.set_enable_high_accuracy(self.enable_high_accuracy);
        options.set_timeout(self.timeout_ms);
        options.set_maximum_age(self.maximum_age_ms);
        options
    }
}

/// Resuelve el centro con `navigator.geolocation` (alta precisión, sin caché)
pub struct LocationResolver {
    center: Rc<RefCell<Option<Coordinate>>>,
    fallback: Coordinate,
    timeout_ms: u32,
}

impl LocationResolver {
    pub fn new(center: Rc<RefCell<Option<Coordinate>>>, fallback: Coordinate, timeout_ms: u32) -> Self {
        Self {
            center,
            fallback,
            timeout_ms,
        }
    }

    fn store(center: &Rc<RefCell<Option<Coordinate>>>, device: Option<Coordinate>, fallback: Coordinate) {
        let resolved = resolve_center(device, fallback);
        *center.borrow_mut() = Some(resolved);
        log::info!("📍 centerPoint: ({}, {})", resolved.lng, resolved.lat);
    }

    /// Lanza la petición; el resultado llega de forma asíncrona a `center`
    pub fn start(&self) {
        let geolocation = web_sys::window()
            .map(|w| w.navigator())
            .and_then(|nav| nav.geolocation().ok())
            .filter(|geo| !geo.is_undefined() && !geo.is_null());

        let Some(geolocation) = geolocation else {
            log::info!("⚠️ Geolocalización no soportada, usando ubicación por defecto");
            Self::store(&self.center, None, self.fallback);
            return;
        };

        log::info!("🛰️ Localizando dispositivo...");

        let fallback = self.fallback;
        let center_ok = self.center.clone();
        let on_success = Closure::wrap(Box::new(move |position: JsValue| {
            let device = coordinate_from_position(&position);
            if device.is_none() {
                log::warn!("⚠️ Posición sin coordenadas, usando ubicación por defecto");
            }
            Self::store(&center_ok, device, fallback);
        }) as Box<dyn FnMut(JsValue)>);

        let center_err = self.center.clone();
        let on_error = Closure::wrap(Box::new(move |_error: JsValue| {
            log::info!("⚠️ Servicios de ubicación no disponibles, usando ubicación por defecto");
            Self::store(&center_err, None, fallback);
        }) as Box<dyn FnMut(JsValue)>);

        let options = PositionPolicy::fresh_fix(self.timeout_ms).to_options();

        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        ) {
            log::error!("❌ getCurrentPosition falló: {:?}", e);
            Self::store(&self.center, None, self.fallback);
        }

        // Se llaman una sola vez, pero el navegador guarda la referencia
        on_success.forget();
        on_error.forget();
    }
}
