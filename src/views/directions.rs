// ============================================================================
// DIRECTIONS VIEW - Panel con duración, distancia e instrucciones
// ============================================================================

use crate::models::{Matching, TripStats};

/// Escapa texto para insertarlo como HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Un `<h5>` por maniobra, en orden de tramos
pub fn render_instructions(matching: &Matching) -> String {
    matching
        .instructions()
        .map(|instruction| format!("<h5>- {}</h5>", escape_html(instruction)))
        .collect()
}

pub fn render_directions(matching: &Matching, stats: &TripStats) -> String {
    format!(
        "<h4>Trip duration: {} mins</h4><h4>Trip length: {} miles</h4><h4>Directions: </h4>{}",
        stats.duration,
        stats.distance,
        render_instructions(matching)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchResponse;

    fn matching() -> Matching {
        let response: MatchResponse = serde_json::from_str(
            r#"{"code": "Ok", "matchings": [{
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                "legs": [{"steps": [
                    {"maneuver": {"instruction": "Head east on Trail <A>"}},
                    {"maneuver": {"instruction": "Arrive"}}
                ]}],
                "duration": 600.0,
                "distance": 1609.344
            }]}"#,
        )
        .unwrap();
        response.into_best().unwrap()
    }

    #[test]
    fn test_instructions_are_escaped_and_ordered() {
        assert_eq!(
            render_instructions(&matching()),
            "<h5>- Head east on Trail &lt;A&gt;</h5><h5>- Arrive</h5>"
        );
    }

    #[test]
    fn test_directions_panel() {
        let m = matching();
        let stats = TripStats::from_metric(m.duration, m.distance);
        let html = render_directions(&m, &stats);
        assert!(html.starts_with("<h4>Trip duration: 10.0 mins</h4><h4>Trip length: 1.00 miles</h4>"));
        assert!(html.ends_with("<h5>- Arrive</h5>"));
    }
}
