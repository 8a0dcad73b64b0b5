use super::directions::escape_html;
use crate::models::StoredTrail;
use crate::utils::constants::rename_input_id;

/// Lista de rutas del usuario con los botones que escucha #trail-list
pub fn render_trail_list(user_id: &str, trails: &[StoredTrail]) -> String {
    if trails.is_empty() {
        return "<p class=\"text-muted\">No saved trails</p>".to_string();
    }

    let user_id = escape_html(user_id);
    let items: String = trails
        .iter()
        .filter_map(|trail| {
            let id = trail.id?.to_string();
            let name = escape_html(trail.name.as_deref().unwrap_or("Untitled"));
            let stats = match (trail.distance, trail.duration) {
                (Some(distance), Some(duration)) => {
                    format!(" <small>{:.2} miles, {:.1} mins</small>", distance, duration)
                }
                _ => String::new(),
            };
            let ids = format!("data-userid=\"{}\" data-trailid=\"{}\"", user_id, id);
            Some(format!(
                "<li class=\"list-group-item\">{name}{stats} \
                 <input id=\"{input}\" value=\"{name}\"> \
                 <button class=\"btn btn-sm btn-outline-secondary rename-btn\" {ids}>Rename</button> \
                 <button id=\"view-btn\" class=\"btn btn-sm btn-outline-primary\" {ids}>View</button> \
                 <button id=\"notes-btn\" class=\"btn btn-sm btn-outline-info\" {ids}>Notes</button> \
                 <button id=\"delete-btn\" class=\"btn btn-sm btn-outline-danger\" {ids}>Delete</button></li>",
                input = rename_input_id(&id),
            ))
        })
        .collect();

    format!("<ul class=\"list-group\">{}</ul>", items)
}
