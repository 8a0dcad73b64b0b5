/// Endpoint base de la API de map matching de Mapbox
pub const MAPBOX_MATCHING_URL: &str = "https://api.mapbox.com/matching/v5/mapbox";

/// Claves de la caché temporal en localStorage
pub const CACHE_KEY_COORDS: &str = "coords";
pub const CACHE_KEY_DURATION: &str = "duration";
pub const CACHE_KEY_DISTANCE: &str = "distance";

/// Id compartido por la capa y la fuente de la ruta ajustada
pub const ROUTE_LAYER_ID: &str = "route";

/// Estilo de la ruta ajustada
pub const ROUTE_LINE_COLOR: &str = "#03AA46";
pub const ROUTE_LINE_WIDTH: f64 = 8.0;
pub const ROUTE_LINE_OPACITY: f64 = 0.8;

/// Estilo de la línea en edición (MapboxDraw)
pub const DRAW_LINE_COLOR: &str = "#438EE4";

/// Ids del documento HTML
pub const MAP_CONTAINER_ID: &str = "map";
pub const DIRECTIONS_PANEL_ID: &str = "directions";
pub const NEW_TRAIL_FORM_ID: &str = "new-trail";
pub const TRAIL_NAME_INPUT_ID: &str = "trail";
pub const TRAIL_LIST_ID: &str = "trail-list";
pub const VIEW_BUTTON_SELECTOR: &str = "#view-btn";
pub const DELETE_BUTTON_SELECTOR: &str = "#delete-btn";
pub const NOTES_BUTTON_SELECTOR: &str = "#notes-btn";
pub const DELETE_NOTE_BUTTON_SELECTOR: &str = ".delete-note-btn";
pub const TRAIL_NOTES_ID: &str = "trail-notes";
pub const NEW_NOTE_FORM_ID: &str = "new-note";
pub const NOTE_COMMENT_INPUT_ID: &str = "note-comment";
pub const RENAME_BUTTON_SELECTOR: &str = ".rename-btn";
pub const EDIT_NOTE_BUTTON_SELECTOR: &str = ".edit-note-btn";

/// Input con el nombre nuevo de una ruta de la lista
pub fn rename_input_id(trail_id: &str) -> String {
    format!("trail-name-{}", trail_id)
}

/// Input con el texto editable de una nota
pub fn note_edit_input_id(note_id: &str) -> String {
    format!("note-edit-{}", note_id)
}
