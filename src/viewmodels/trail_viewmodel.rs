// ============================================================================
// TRAIL VIEWMODEL - Guardar, cargar y gestionar rutas del usuario
// ============================================================================

use crate::dom::{clear_input, reload_page, require_element, set_inner_html};
use crate::error::TrailError;
use crate::maps::{show_route, ErrorSlots, RouteLayerHost};
use crate::models::{StoredTrailResponse, TrailRecord};
use crate::services::ApiClient;
use crate::state::NotesTarget;
use crate::utils::constants::{TRAIL_LIST_ID, TRAIL_NOTES_ID};
use crate::utils::storage::RouteCache;
use crate::views::{render_notes, render_trail_list};

/// Resultado de presentar una ruta guardada
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Ruta dibujada con N puntos
    Rendered(usize),
    /// El backend devolvió N errores por campo
    FieldErrors(usize),
}

/// Construye el registro a guardar a partir de la caché y el nombre del formulario
pub fn build_record(name: &str, cache: &RouteCache) -> Result<TrailRecord, TrailError> {
    let cached = cache.load()?;
    Ok(TrailRecord {
        name: name.to_string(),
        distance: cached.stats.distance,
        duration: cached.stats.duration,
        coordinates: cached.geometry.coordinates,
    })
}

/// Qué hacer con un submit de #new-trail; en ambos casos se recarga la página
#[derive(Debug, Clone, PartialEq)]
pub enum SavePlan {
    Post { user_id: String, record: TrailRecord },
    Skip(TrailError),
}

/// `form` son los valores leídos del formulario: (data-userid, nombre)
pub fn plan_save(form: Result<(String, String), TrailError>, cache: &RouteCache) -> SavePlan {
    let (user_id, name) = match form {
        Ok(values) => values,
        Err(e) => return SavePlan::Skip(e),
    };
    match build_record(&name, cache) {
        Ok(record) => SavePlan::Post { user_id, record },
        Err(e) => SavePlan::Skip(e),
    }
}

/// Muestra errores por campo o dibuja la ruta guardada, nunca ambas cosas
pub fn present_stored_trail(
    response: &StoredTrailResponse,
    host: &mut dyn RouteLayerHost,
    slots: &mut dyn ErrorSlots,
) -> Result<LoadOutcome, TrailError> {
    if let Some(errors) = response.errors.as_ref().filter(|errors| !errors.is_empty()) {
        let entries = errors.entries();
        for (field, message) in &entries {
            log::warn!("⚠️ {} : {}", field, message);
            if let Err(e) = slots.show_error(field, message) {
                log::warn!("⚠️ Sin hueco para el error de '{}': {}", field, e);
            }
        }
        return Ok(LoadOutcome::FieldErrors(entries.len()));
    }

    let trail = response
        .maproute
        .as_ref()
        .ok_or_else(|| TrailError::Parse("respuesta sin 'maproute' ni 'errors'".to_string()))?;
    let line = trail.to_line_string();
    show_route(host, &line)?;
    Ok(LoadOutcome::Rendered(line.len()))
}

/// ViewModel de persistencia de rutas
#[derive(Clone)]
pub struct TrailViewModel {
    api: ApiClient,
    cache: RouteCache,
}

impl TrailViewModel {
    pub fn new(api: ApiClient, cache: RouteCache) -> Self {
        Self { api, cache }
    }

    /// Submit de #new-trail: guardar y recargar la página pase lo que pase
    pub async fn save_trail(&self, form: Result<(String, String), TrailError>) {
        match plan_save(form, &self.cache) {
            SavePlan::Post { user_id, record } => {
                log::info!("📝 Guardando ruta '{}' para el usuario {}", record.name, user_id);
                if let Err(e) = self.api.save_trail(&user_id, &record).await {
                    log::error!("❌ Error guardando la ruta: {}", e);
                }
            }
            SavePlan::Skip(e) => log::error!("❌ No se guarda la ruta: {}", e),
        }

        reload_page();
    }

    /// Click en #view-btn: obtener la ruta y dibujarla
    pub async fn view_trail(
        &self,
        user_id: &str,
        trail_id: &str,
        host: &mut dyn RouteLayerHost,
        slots: &mut dyn ErrorSlots,
    ) -> Result<LoadOutcome, TrailError> {
        let response = self.api.get_trail(user_id, trail_id).await?;
        let outcome = present_stored_trail(&response, host, slots)?;
        log::info!("✅ Ruta {}: {:?}", trail_id, outcome);
        Ok(outcome)
    }

    /// Click en #delete-btn: eliminar y recargar la lista
    pub async fn delete_trail(&self, user_id: &str, trail_id: &str) {
        match self.api.delete_trail(user_id, trail_id).await {
            Ok(()) => reload_page(),
            Err(e) => log::error!("❌ Error eliminando la ruta {}: {}", trail_id, e),
        }
    }

    /// Click en .rename-btn: renombrar y volver a pintar la lista
    pub async fn rename_trail(&self, user_id: &str, trail_id: &str, name: &str) -> Result<(), TrailError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrailError::Dom("El nombre está vacío".to_string()));
        }
        let trail = self.api.rename_trail(user_id, trail_id, name).await?;
        log::info!("✅ Ruta {} renombrada a '{}'", trail_id, trail.name.as_deref().unwrap_or(name));
        self.refresh_trail_list(user_id).await.map(|_| ())
    }

    /// Pintar las rutas del usuario en #trail-list
    pub async fn refresh_trail_list(&self, user_id: &str) -> Result<usize, TrailError> {
        let trails = self.api.list_trails(user_id).await?;
        let list = require_element(TRAIL_LIST_ID)?;
        set_inner_html(&list, &render_trail_list(user_id, &trails));
        Ok(trails.len())
    }

    /// Cargar y pintar las notas de una ruta en #trail-notes
    pub async fn show_notes(&self, target: &NotesTarget) -> Result<usize, TrailError> {
        let notes = self.api.list_notes(&target.user_id, &target.trail_id).await?;
        let panel = require_element(TRAIL_NOTES_ID)?;
        set_inner_html(&panel, &render_notes(&target.trail_id, &notes));
        log::info!("🗒️ {} notas para la ruta {}", notes.len(), target.trail_id);
        Ok(notes.len())
    }

    /// Submit de #new-note
    pub async fn add_note(&self, target: &NotesTarget, comment: &str, input_id: &str) -> Result<(), TrailError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(TrailError::Dom("La nota está vacía".to_string()));
        }
        self.api.add_note(&target.user_id, &target.trail_id, comment).await?;
        clear_input(input_id);
        self.show_notes(target).await.map(|_| ())
    }

    /// Click en un botón .edit-note-btn
    pub async fn update_note(&self, target: &NotesTarget, note_id: &str, comment: &str) -> Result<(), TrailError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(TrailError::Dom("La nota está vacía".to_string()));
        }
        self.api.update_note(&target.user_id, &target.trail_id, note_id, comment).await?;
        self.show_notes(target).await.map(|_| ())
    }

    /// Click en un botón .delete-note-btn
    pub async fn delete_note(&self, target: &NotesTarget, note_id: &str) -> Result<(), TrailError> {
        self.api.delete_note(&target.user_id, &target.trail_id, note_id).await?;
        self.show_notes(target).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::route_layer::tests::RecordingMap;
    use crate::models::{Coordinate, LineString, TripStats};
    use crate::utils::storage::{CachedRoute, MemoryStore};
    use serde_json::json;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSlots {
        written: Vec<(String, String)>,
    }

    impl ErrorSlots for RecordingSlots {
        fn show_error(&mut self, field: &str, message: &str) -> Result<(), TrailError> {
            self.written.push((field.to_string(), message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_post_body_matches_cache() {
        let cache = RouteCache::new(Rc::new(MemoryStore::new()));
        cache
            .store(&CachedRoute {
                geometry: LineString::new(vec![Coordinate::new(-121.0, 36.5), Coordinate::new(-122.0, 37.0)]),
                stats: TripStats { duration: "35.4".into(), distance: "3.50".into() },
            })
            .unwrap();

        let record = build_record("Fort Ord loop", &cache).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Fort Ord loop",
                "distance": "3.50",
                "duration": "35.4",
                "coordinates": [[-121.0, 36.5], [-122.0, 37.0]]
            })
        );
    }

    #[test]
    fn test_save_without_match_fails() {
        let cache = RouteCache::new(Rc::new(MemoryStore::new()));
        assert_eq!(build_record("x", &cache).unwrap_err(), TrailError::MissingCache("coords"));
    }

    #[test]
    fn test_incomplete_form_skips_post() {
        let cache = RouteCache::new(Rc::new(MemoryStore::new()));
        cache
            .store(&CachedRoute {
                geometry: LineString::new(vec![Coordinate::new(-121.0, 36.5)]),
                stats: TripStats { duration: "1.0".into(), distance: "0.10".into() },
            })
            .unwrap();

        let missing_user = Err(TrailError::Dom("falta data-userid".to_string()));
        assert!(matches!(plan_save(missing_user, &cache), SavePlan::Skip(TrailError::Dom(_))));

        match plan_save(Ok(("7".to_string(), "loop".to_string())), &cache) {
            SavePlan::Post { user_id, record } => {
                assert_eq!(user_id, "7");
                assert_eq!(record.name, "loop");
            }
            other => panic!("se esperaba un POST: {:?}", other),
        }
    }

    #[test]
    fn test_empty_cache_skips_post() {
        let cache = RouteCache::new(Rc::new(MemoryStore::new()));
        assert_eq!(
            plan_save(Ok(("7".to_string(), "loop".to_string())), &cache),
            SavePlan::Skip(TrailError::MissingCache("coords"))
        );
    }

    #[test]
    fn test_field_errors_skip_rendering() {
        let response: StoredTrailResponse =
            serde_json::from_str(r#"{"errors": {"name": "required"}}"#).unwrap();
        let mut map = RecordingMap::default();
        let mut slots = RecordingSlots::default();

        let outcome = present_stored_trail(&response, &mut map, &mut slots).unwrap();

        assert_eq!(outcome, LoadOutcome::FieldErrors(1));
        assert_eq!(slots.written, vec![("name".to_string(), "required".to_string())]);
        assert!(map.calls.is_empty());
    }

    #[test]
    fn test_stored_trail_is_rendered() {
        let response: StoredTrailResponse = serde_json::from_str(
            r#"{"maproute": {"id": 1, "name": "test", "coordinates": [[-121, 36.5], [-122, 37]]}}"#,
        )
        .unwrap();
        let mut map = RecordingMap::default();
        let mut slots = RecordingSlots::default();

        let outcome = present_stored_trail(&response, &mut map, &mut slots).unwrap();

        assert_eq!(outcome, LoadOutcome::Rendered(2));
        assert_eq!(map.calls, vec!["add_layer:route"]);
        assert!(slots.written.is_empty());
    }

    #[test]
    fn test_empty_response_is_error() {
        let response: StoredTrailResponse = serde_json::from_str("{}").unwrap();
        let mut map = RecordingMap::default();
        let mut slots = RecordingSlots::default();
        assert!(matches!(
            present_stored_trail(&response, &mut map, &mut slots),
            Err(TrailError::Parse(_))
        ));
    }
}
