// ============================================================================
// TRAIL SYNC - FRONTEND WASM (RUST PURO + MVVM)
// ============================================================================
// Dibujar una ruta sobre Mapbox, ajustarla con Map Matching y guardarla
// en el backend de rutas del usuario.
// - Views: generan HTML (sin lógica)
// - ViewModels: flujo de cada acción del usuario
// - Services: SOLO comunicación HTTP / APIs del navegador
// - State: estado compartido con Rc<RefCell>
// - Models: estructuras compartidas con backend y Mapbox
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod maps;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global: los closures de eventos viven tanto como la página
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🥾 Trail Sync - Rust + Mapbox");

    let app = App::new(&CONFIG)?;
    app.bind_events()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Centro resuelto por geolocalización, para depurar desde la consola JS
#[wasm_bindgen]
pub fn resolved_center() -> JsValue {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|app| app.state().center())
            .map(|center| js_sys::Array::of2(&center.lng.into(), &center.lat.into()).into())
            .unwrap_or(JsValue::NULL)
    })
}
