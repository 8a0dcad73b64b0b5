use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Coordinate, LineString};

/// Metros por milla terrestre
pub const METERS_PER_MILE: f64 = 1609.344;

/// Estadísticas derivadas de un ajuste, ya formateadas para mostrar/guardar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripStats {
    /// Minutos con un decimal ("10.0")
    pub duration: String,
    /// Millas con dos decimales ("1.00")
    pub distance: String,
}

impl TripStats {
    pub fn from_metric(duration_seconds: f64, distance_meters: f64) -> Self {
        Self {
            duration: to_fixed(duration_seconds / 60.0, 1),
            distance: to_fixed(distance_meters / METERS_PER_MILE, 2),
        }
    }
}

/// `decimals` decimales, empates hacia arriba (0.25 → "0.3")
fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (value * scale).round() / scale)
}

/// Registro que se envía al backend al guardar una ruta
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailRecord {
    pub name: String,
    pub distance: String,
    pub duration: String,
    pub coordinates: Vec<Coordinate>,
}

/// Ruta guardada tal como la devuelve el backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredTrail {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
    pub coordinates: Vec<Coordinate>,
    #[serde(default)]
    pub user_id: Option<u64>,
}

impl StoredTrail {
    pub fn to_line_string(&self) -> LineString {
        LineString::new(self.coordinates.clone())
    }
}

/// Errores por campo; el backend los manda como objeto o como lista de objetos
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldErrors {
    Map(BTreeMap<String, String>),
    List(Vec<BTreeMap<String, String>>),
}

impl FieldErrors {
    /// Pares (campo, mensaje) en orden de llegada
    pub fn entries(&self) -> Vec<(&str, &str)> {
        match self {
            FieldErrors::Map(map) => map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect(),
            FieldErrors::List(list) => list
                .iter()
                .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Respuesta de GET /users/{id}/trails/{trail_id}
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredTrailResponse {
    #[serde(default)]
    pub maproute: Option<StoredTrail>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

/// Respuesta de GET /users/{id}/trails
#[derive(Debug, Clone, Deserialize)]
pub struct TrailList {
    #[serde(default)]
    pub trails: Vec<StoredTrail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameTrailRequest {
    pub name: String,
}

/// Nota asociada a una ruta
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Note {
    pub id: u64,
    pub comment: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub trail_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewNoteRequest {
    pub comment: String,
}

/// Respuesta de POST .../notes
#[derive(Debug, Clone, Deserialize)]
pub struct NoteResponse {
    pub note: Note,
}
