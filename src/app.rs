// ============================================================================
// APP - Construye el estado y conecta cada evento con su handler
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{input_value, on_delegated_click, on_map_event, on_submit, require_attribute};
use crate::error::TrailError;
use crate::maps::WebRouteMap;
use crate::services::{ApiClient, LocationResolver, MatchingService};
use crate::state::{AppState, NotesTarget};
use crate::utils::constants::*;
use crate::utils::mapbox_ffi::MapboxDraw;
use crate::utils::storage::RouteCache;
use crate::viewmodels::{MapViewModel, RouteViewModel, TrailViewModel};
use crate::views::DomErrorSlots;

/// Aplicación principal
pub struct App {
    state: AppState,
    map: WebRouteMap,
    draw: MapboxDraw,
    routes: RouteViewModel,
    trails: TrailViewModel,
}

impl App {
    /// Crear nueva aplicación: geolocalización, mapa y viewmodels
    pub fn new(config: &AppConfig) -> Result<Self, TrailError> {
        let state = AppState::new(RouteCache::open());

        LocationResolver::new(
            state.center.clone(),
            config.map_config.fallback_center(),
            config.map_config.geolocation_timeout_ms,
        )
        .start();

        let (map, draw) = MapViewModel::initialize_map(config)?;

        let routes = RouteViewModel::new(
            state.cache.clone(),
            MatchingService::with_token(config.mapbox_token()),
            config.matching_config.clone(),
        );
        let trails = TrailViewModel::new(ApiClient::with_base_url(config.backend_url()), state.cache.clone());

        Ok(Self {
            state,
            map: WebRouteMap::new(map),
            draw,
            routes,
            trails,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Registrar todos los listeners (una sola vez)
    pub fn bind_events(&self) -> Result<(), TrailError> {
        self.bind_draw_events();
        optional(self.bind_save_form(), NEW_TRAIL_FORM_ID)?;
        optional(self.bind_trail_list(), TRAIL_LIST_ID)?;
        optional(self.bind_new_note_form(), NEW_NOTE_FORM_ID)?;
        optional(self.bind_notes_list(), TRAIL_NOTES_ID)?;
        log::info!("🎧 Listeners registrados");
        Ok(())
    }

    fn bind_draw_events(&self) {
        for event in ["draw.create", "draw.update"] {
            let draw = self.draw.clone();
            let host = self.map.clone();
            let routes = self.routes.clone();
            on_map_event(self.map.inner(), event, move |_| {
                let features = match MapViewModel::drawn_features(&draw) {
                    Ok(features) => features,
                    Err(e) => {
                        log::error!("❌ No se pudo leer el dibujo: {}", e);
                        return;
                    }
                };
                let mut host = host.clone();
                let routes = routes.clone();
                spawn_local(async move {
                    if let Err(e) = routes.update_route(features, &mut host).await {
                        log::error!("❌ Error ajustando la ruta: {}", e);
                    }
                });
            });
        }

        let mut host = self.map.clone();
        let routes = self.routes.clone();
        on_map_event(self.map.inner(), "draw.delete", move |_| {
            if let Err(e) = routes.delete_route(&mut host) {
                log::error!("❌ Error eliminando la ruta: {}", e);
            }
        });
    }

    fn bind_save_form(&self) -> Result<(), TrailError> {
        let trails = self.trails.clone();
        on_submit(NEW_TRAIL_FORM_ID, move |form: Element| {
            let values = require_attribute(&form, "data-userid")
                .and_then(|user_id| Ok((user_id, input_value(TRAIL_NAME_INPUT_ID)?)));
            let trails = trails.clone();
            spawn_local(async move {
                trails.save_trail(values).await;
            });
        })
    }

    fn bind_trail_list(&self) -> Result<(), TrailError> {
        let trails = self.trails.clone();
        let host = self.map.clone();
        on_delegated_click(TRAIL_LIST_ID, VIEW_BUTTON_SELECTOR, move |button: Element| {
            let Some((user_id, trail_id)) = trail_ids(&button) else {
                return;
            };
            let trails = trails.clone();
            let mut host = host.clone();
            spawn_local(async move {
                let mut slots = DomErrorSlots;
                if let Err(e) = trails.view_trail(&user_id, &trail_id, &mut host, &mut slots).await {
                    log::error!("❌ Error mostrando la ruta {}: {}", trail_id, e);
                }
            });
        })?;

        let trails = self.trails.clone();
        on_delegated_click(TRAIL_LIST_ID, DELETE_BUTTON_SELECTOR, move |button: Element| {
            let Some((user_id, trail_id)) = trail_ids(&button) else {
                return;
            };
            let trails = trails.clone();
            spawn_local(async move {
                trails.delete_trail(&user_id, &trail_id).await;
            });
        })?;

        let trails = self.trails.clone();
        on_delegated_click(TRAIL_LIST_ID, RENAME_BUTTON_SELECTOR, move |button: Element| {
            let Some((user_id, trail_id)) = trail_ids(&button) else {
                return;
            };
            let name = match input_value(&rename_input_id(&trail_id)) {
                Ok(name) => name,
                Err(e) => {
                    log::error!("❌ {}", e);
                    return;
                }
            };
            let trails = trails.clone();
            spawn_local(async move {
                if let Err(e) = trails.rename_trail(&user_id, &trail_id, &name).await {
                    log::error!("❌ Error renombrando la ruta {}: {}", trail_id, e);
                }
            });
        })?;

        let trails = self.trails.clone();
        let state = self.state.clone();
        on_delegated_click(TRAIL_LIST_ID, NOTES_BUTTON_SELECTOR, move |button: Element| {
            let Some((user_id, trail_id)) = trail_ids(&button) else {
                return;
            };
            let target = NotesTarget { user_id, trail_id };
            state.set_notes_target(Some(target.clone()));
            let trails = trails.clone();
            spawn_local(async move {
                if let Err(e) = trails.show_notes(&target).await {
                    log::error!("❌ Error cargando notas: {}", e);
                }
            });
        })
    }

    fn bind_new_note_form(&self) -> Result<(), TrailError> {
        let trails = self.trails.clone();
        let state = self.state.clone();
        on_submit(NEW_NOTE_FORM_ID, move |_form: Element| {
            let Some(target) = state.notes_target() else {
                log::warn!("⚠️ Selecciona una ruta antes de agregar notas");
                return;
            };
            let comment = match input_value(NOTE_COMMENT_INPUT_ID) {
                Ok(comment) => comment,
                Err(e) => {
                    log::error!("❌ {}", e);
                    return;
                }
            };
            let trails = trails.clone();
            spawn_local(async move {
                if let Err(e) = trails.add_note(&target, &comment, NOTE_COMMENT_INPUT_ID).await {
                    log::error!("❌ Error agregando la nota: {}", e);
                }
            });
        })
    }

    fn bind_notes_list(&self) -> Result<(), TrailError> {
        let trails = self.trails.clone();
        let state = self.state.clone();
        on_delegated_click(TRAIL_NOTES_ID, EDIT_NOTE_BUTTON_SELECTOR, move |button: Element| {
            let (Some(target), Ok(note_id)) = (state.notes_target(), require_attribute(&button, "data-noteid")) else {
                log::warn!("⚠️ Botón de nota sin ruta activa o sin data-noteid");
                return;
            };
            let comment = match input_value(&note_edit_input_id(&note_id)) {
                Ok(comment) => comment,
                Err(e) => {
                    log::error!("❌ {}", e);
                    return;
                }
            };
            let trails = trails.clone();
            spawn_local(async move {
                if let Err(e) = trails.update_note(&target, &note_id, &comment).await {
                    log::error!("❌ Error editando la nota {}: {}", note_id, e);
                }
            });
        })?;

        let trails = self.trails.clone();
        let state = self.state.clone();
        on_delegated_click(TRAIL_NOTES_ID, DELETE_NOTE_BUTTON_SELECTOR, move |button: Element| {
            let (Some(target), Ok(note_id)) = (state.notes_target(), require_attribute(&button, "data-noteid")) else {
                log::warn!("⚠️ Botón de nota sin ruta activa o sin data-noteid");
                return;
            };
            let trails = trails.clone();
            spawn_local(async move {
                if let Err(e) = trails.delete_note(&target, &note_id).await {
                    log::error!("❌ Error eliminando la nota {}: {}", note_id, e);
                }
            });
        })
    }
}

/// `data-userid` + `data-trailid` de un botón de la lista
fn trail_ids(button: &Element) -> Option<(String, String)> {
    match (require_attribute(button, "data-userid"), require_attribute(button, "data-trailid")) {
        (Ok(user_id), Ok(trail_id)) => Some((user_id, trail_id)),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("❌ Botón de ruta mal formado: {}", e);
            None
        }
    }
}

/// Las secciones de la página son opcionales (p. ej. sin sesión no hay formulario)
fn optional(result: Result<(), TrailError>, id: &str) -> Result<(), TrailError> {
    match result {
        Err(TrailError::Dom(msg)) => {
            log::info!("ℹ️ #{} no está en la página ({}), se omite", id, msg);
            Ok(())
        }
        other => other,
    }
}
