// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::error::TrailError;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID o error de DOM
pub fn require_element(id: &str) -> Result<Element, TrailError> {
    get_element_by_id(id).ok_or_else(|| TrailError::Dom(format!("No existe #{}", id)))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Obtener atributo obligatorio (`data-userid`, `data-trailid`...)
pub fn require_attribute(element: &Element, name: &str) -> Result<String, TrailError> {
    element
        .get_attribute(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| TrailError::Dom(format!("Falta el atributo {}", name)))
}

/// Valor de un <input> o <textarea> por ID
pub fn input_value(id: &str) -> Result<String, TrailError> {
    let element = require_element(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Ok(input.value());
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Ok(textarea.value());
    }
    Err(TrailError::Dom(format!("#{} no es un campo de texto", id)))
}

/// Vaciar un <input> o <textarea> por ID
pub fn clear_input(id: &str) {
    let Some(element) = get_element_by_id(id) else {
        return;
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value("");
    }
}

/// Elemento más cercano (incluido él mismo) que cumple el selector
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Recargar la página
pub fn reload_page() {
    if let Some(win) = window() {
        if let Err(e) = win.location().reload() {
            log::error!("❌ Error recargando la página: {:?}", e);
        }
    }
}

/// Convierte un error JS de DOM en `TrailError`
pub fn dom_error(value: JsValue) -> TrailError {
    TrailError::Dom(crate::error::js_error_message(&value))
}
