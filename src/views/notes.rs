use super::directions::escape_html;
use crate::models::Note;
use crate::utils::constants::note_edit_input_id;

/// Lista de notas de una ruta; cada una editable y con su botón de borrar
pub fn render_notes(trail_id: &str, notes: &[Note]) -> String {
    if notes.is_empty() {
        return "<p class=\"text-muted\">No notes yet</p>".to_string();
    }

    let items: String = notes
        .iter()
        .map(|note| {
            let timestamp = note
                .timestamp
                .as_deref()
                .map(|ts| format!(" <small>{}</small>", escape_html(ts)))
                .unwrap_or_default();
            let ids = format!("data-trailid=\"{}\" data-noteid=\"{}\"", escape_html(trail_id), note.id);
            format!(
                "<li class=\"list-group-item\">{comment}{timestamp} \
                 <input id=\"{input}\" value=\"{comment}\"> \
                 <button class=\"btn btn-sm btn-outline-secondary edit-note-btn\" {ids}>Save</button> \
                 <button class=\"btn btn-sm btn-outline-danger delete-note-btn\" {ids}>Delete</button></li>",
                comment = escape_html(&note.comment),
                input = note_edit_input_id(&note.id.to_string()),
            )
        })
        .collect();

    format!("<ul class=\"list-group\">{}</ul>", items)
}
