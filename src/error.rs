// ============================================================================
// ERRORES - Taxonomía única para el flujo de rutas
// ============================================================================

use std::fmt;
use wasm_bindgen::JsValue;

/// Error de las operaciones de captura, ajuste y persistencia de rutas
#[derive(Debug, Clone, PartialEq)]
pub enum TrailError {
    /// Fallo de red (la petición no llegó a completarse)
    Network(String),
    /// Respuesta HTTP no exitosa
    Http { status: u16, message: String },
    /// JSON inválido o con forma inesperada
    Parse(String),
    /// localStorage inaccesible o escritura rechazada
    Storage(String),
    /// Falta un valor en la caché temporal
    MissingCache(&'static str),
    /// No hay ninguna línea dibujada utilizable
    NoDrawnRoute,
    /// La API de map matching no devolvió candidatos
    NoMatch,
    /// La API de map matching devolvió un código de error
    Matching { code: String, message: String },
    /// Error del widget de mapa
    Map(String),
    /// Elemento o atributo del DOM ausente
    Dom(String),
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::Network(msg) => write!(f, "Network error: {}", msg),
            TrailError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            TrailError::Parse(msg) => write!(f, "Parse error: {}", msg),
            TrailError::Storage(msg) => write!(f, "Storage error: {}", msg),
            TrailError::MissingCache(key) => write!(f, "Missing cached value for '{}'", key),
            TrailError::NoDrawnRoute => write!(f, "No drawn line to match"),
            TrailError::NoMatch => write!(f, "Map matching returned no candidates"),
            TrailError::Matching { code, message } => {
                write!(f, "Map matching failed ({}): {}", code, message)
            }
            TrailError::Map(msg) => write!(f, "Map error: {}", msg),
            TrailError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for TrailError {}

impl From<serde_json::Error> for TrailError {
    fn from(e: serde_json::Error) -> Self {
        TrailError::Parse(e.to_string())
    }
}

impl From<gloo_net::Error> for TrailError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => TrailError::Parse(e.to_string()),
            other => TrailError::Network(other.to_string()),
        }
    }
}

impl From<TrailError> for JsValue {
    fn from(e: TrailError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Convierte un error JS en texto legible para logs
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TrailError::Http { status: 404, message: "NOT FOUND".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: NOT FOUND");
        assert_eq!(
            TrailError::MissingCache("coords").to_string(),
            "Missing cached value for 'coords'"
        );
    }

    #[test]
    fn test_serde_error_maps_to_parse() {
        let err: TrailError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, TrailError::Parse(_)));
    }
}
