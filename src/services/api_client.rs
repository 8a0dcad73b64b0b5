// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP CON EL BACKEND DE RUTAS (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::error::TrailError;
use crate::models::{
    NewNoteRequest, Note, NoteResponse, RenameTrailRequest, StoredTrail, StoredTrailResponse,
    TrailList, TrailRecord,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn trails_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/trails", self.base_url, user_id)
    }

    pub fn trail_url(&self, user_id: &str, trail_id: &str) -> String {
        format!("{}/users/{}/trails/{}", self.base_url, user_id, trail_id)
    }

    pub fn notes_url(&self, user_id: &str, trail_id: &str) -> String {
        format!("{}/notes", self.trail_url(user_id, trail_id))
    }

    pub fn note_url(&self, user_id: &str, trail_id: &str, note_id: &str) -> String {
        format!("{}/{}", self.notes_url(user_id, trail_id), note_id)
    }

    /// Guardar una ruta nueva
    pub async fn save_trail(&self, user_id: &str, record: &TrailRecord) -> Result<(), TrailError> {
        let url = self.trails_url(user_id);
        log::info!("💾 Guardando ruta '{}' ({} puntos) en {}", record.name, record.coordinates.len(), url);

        let response = Request::post(&url).json(record)?.send().await?;
        ensure_ok(response).await?;

        log::info!("✅ Ruta '{}' guardada", record.name);
        Ok(())
    }

    /// Obtener una ruta guardada
    /// Si el backend responde con errores por campo se devuelven aunque el status no sea 2xx
    pub async fn get_trail(&self, user_id: &str, trail_id: &str) -> Result<StoredTrailResponse, TrailError> {
        let url = self.trail_url(user_id, trail_id);
        log::info!("📋 Obteniendo ruta: {}", url);

        let response = Request::get(&url).send().await?;
        let status = response.status();
        let ok = response.ok();
        let status_text = response.status_text();
        let body = response.text().await?;

        match serde_json::from_str::<StoredTrailResponse>(&body) {
            Ok(parsed) if ok || parsed.errors.is_some() => Ok(parsed),
            Ok(_) => Err(TrailError::Http { status, message: status_text }),
            Err(_) if !ok => Err(TrailError::Http { status, message: status_text }),
            Err(e) => Err(e.into()),
        }
    }

    /// Listar las rutas del usuario
    pub async fn list_trails(&self, user_id: &str) -> Result<Vec<StoredTrail>, TrailError> {
        let response = Request::get(&self.trails_url(user_id)).send().await?;
        let response = ensure_ok(response).await?;
        let list = response.json::<TrailList>().await?;
        log::info!("📋 {} rutas para el usuario {}", list.trails.len(), user_id);
        Ok(list.trails)
    }

    /// Renombrar una ruta
    pub async fn rename_trail(&self, user_id: &str, trail_id: &str, name: &str) -> Result<StoredTrail, TrailError> {
        log::info!("📝 Renombrando ruta {} → {}", trail_id, name);
        let request = RenameTrailRequest { name: name.to_string() };
        let response = Request::patch(&self.trail_url(user_id, trail_id))
            .json(&request)?
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        response
            .json::<StoredTrailResponse>()
            .await?
            .maproute
            .ok_or_else(|| TrailError::Parse("respuesta sin 'maproute'".to_string()))
    }

    /// Eliminar una ruta
    pub async fn delete_trail(&self, user_id: &str, trail_id: &str) -> Result<(), TrailError> {
        log::info!("🗑️ Eliminando ruta {}", trail_id);
        let response = Request::delete(&self.trail_url(user_id, trail_id)).send().await?;
        ensure_ok(response).await?;
        Ok(())
    }

    /// Notas de una ruta
    pub async fn list_notes(&self, user_id: &str, trail_id: &str) -> Result<Vec<Note>, TrailError> {
        let response = Request::get(&self.notes_url(user_id, trail_id)).send().await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    /// Agregar una nota
    pub async fn add_note(&self, user_id: &str, trail_id: &str, comment: &str) -> Result<Note, TrailError> {
        log::info!("🗒️ Agregando nota a la ruta {}", trail_id);
        let request = NewNoteRequest { comment: comment.to_string() };
        let response = Request::post(&self.notes_url(user_id, trail_id))
            .json(&request)?
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<NoteResponse>().await?.note)
    }

    /// Editar el texto de una nota
    pub async fn update_note(
        &self,
        user_id: &str,
        trail_id: &str,
        note_id: &str,
        comment: &str,
    ) -> Result<Note, TrailError> {
        log::info!("✏️ Editando nota {} de la ruta {}", note_id, trail_id);
        let request = NewNoteRequest { comment: comment.to_string() };
        let response = Request::patch(&self.note_url(user_id, trail_id, note_id))
            .json(&request)?
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<NoteResponse>().await?.note)
    }

    /// Eliminar una nota
    pub async fn delete_note(&self, user_id: &str, trail_id: &str, note_id: &str) -> Result<(), TrailError> {
        let response = Request::delete(&self.note_url(user_id, trail_id, note_id)).send().await?;
        ensure_ok(response).await?;
        Ok(())
    }
}

/// Convierte un status no exitoso en `TrailError::Http` con el cuerpo como mensaje
async fn ensure_ok(response: Response) -> Result<Response, TrailError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| response.status_text());
    Err(TrailError::Http { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    #[test]
    fn test_urls() {
        let api = ApiClient::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(api.trails_url("7"), "http://127.0.0.1:5000/users/7/trails");
        assert_eq!(api.trail_url("7", "3"), "http://127.0.0.1:5000/users/7/trails/3");
        assert_eq!(api.notes_url("7", "3"), "http://127.0.0.1:5000/users/7/trails/3/notes");
        assert_eq!(api.note_url("7", "3", "9"), "http://127.0.0.1:5000/users/7/trails/3/notes/9");
    }

    #[test]
    fn test_note_payloads() {
        let body = serde_json::to_value(NewNoteRequest { comment: "muddy after rain".to_string() }).unwrap();
        assert_eq!(body, serde_json::json!({"comment": "muddy after rain"}));

        let response: NoteResponse = serde_json::from_str(
            r#"{"note": {"id": 4, "comment": "muddy", "timestamp": "Fri, 16 Oct 2026 10:00:00 GMT", "trail_id": 3}}"#,
        )
        .unwrap();
        assert_eq!(response.note.id, 4);
        assert_eq!(response.note.trail_id, Some(3));
    }

    #[test]
    fn test_rename_payload() {
        let body = serde_json::to_value(RenameTrailRequest { name: "Coast loop".to_string() }).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Coast loop"}));

        let response: StoredTrailResponse = serde_json::from_str(
            r#"{"maproute": {"id": 3, "name": "Coast loop", "coordinates": [[1.0, 2.0]]}}"#,
        )
        .unwrap();
        assert_eq!(response.maproute.unwrap().name.as_deref(), Some("Coast loop"));
    }

    #[test]
    fn test_trail_list_payload() {
        let list: TrailList = serde_json::from_str(
            r#"{"trails": [{"id": 1, "name": "loop", "distance": 2.1, "duration": 40.0, "coordinates": [[1.0, 2.0]]}]}"#,
        )
        .unwrap();
        assert_eq!(list.trails[0].coordinates, vec![Coordinate::new(1.0, 2.0)]);
    }
}
