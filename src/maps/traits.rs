use crate::error::TrailError;

/// Operaciones mínimas que el flujo de rutas necesita del widget de mapa
pub trait RouteLayerHost {
    /// ¿Existe una fuente con este id?
    fn has_source(&self, id: &str) -> bool;

    /// Agregar una capa (la especificación incluye su fuente GeoJSON)
    fn add_layer(&mut self, layer: &serde_json::Value) -> Result<(), TrailError>;

    fn remove_layer(&mut self, id: &str) -> Result<(), TrailError>;

    fn remove_source(&mut self, id: &str) -> Result<(), TrailError>;
}

/// Destino de los mensajes de error por campo (`#{campo}-err`)
pub trait ErrorSlots {
    fn show_error(&mut self, field: &str, message: &str) -> Result<(), TrailError>;
}
