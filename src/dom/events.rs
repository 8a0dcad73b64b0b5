// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// Todos los listeners de esta app se registran UNA SOLA VEZ al arrancar,
// así que closure.forget() no acumula closures.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::element::{closest, require_element};
use crate::error::TrailError;

/// Listener genérico sobre un elemento
pub fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), TrailError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(super::element::dom_error)?;
    closure.forget();
    Ok(())
}

/// Submit de un formulario: cancela el envío nativo y pasa el formulario al handler
pub fn on_submit<F>(form_id: &str, mut handler: F) -> Result<(), TrailError>
where
    F: FnMut(Element) + 'static,
{
    let form = require_element(form_id)?;
    let form_ref = form.clone();
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        handler(form_ref.clone());
    })
}

/// Click delegado: el listener vive en el contenedor y se dispara solo para
/// los elementos que cumplen `selector` (sirve para listas que se re-renderizan)
pub fn on_delegated_click<F>(container_id: &str, selector: &'static str, mut handler: F) -> Result<(), TrailError>
where
    F: FnMut(Element) + 'static,
{
    let container = require_element(container_id)?;
    listen(&container, "click", move |event: Event| {
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| closest(&el, selector));
        if let Some(target) = target {
            event.prevent_default();
            handler(target);
        }
    })
}

/// Evento del mapa (`draw.create`, `draw.update`, `draw.delete`, ...)
pub fn on_map_event<F>(map: &crate::utils::mapbox_ffi::MapboxMap, event_type: &str, handler: F)
where
    F: FnMut(JsValue) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
    map.on(event_type, closure.as_ref().unchecked_ref());
    closure.forget();
}
