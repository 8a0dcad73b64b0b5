// ============================================================================
// MATCHING SERVICE - Map Matching API de Mapbox
// ============================================================================
// Ajusta una línea dibujada a mano sobre la red de caminos
// ============================================================================

use gloo_net::http::Request;

use crate::config::{MatchingConfig, MAX_MATCH_RADIUS};
use crate::error::TrailError;
use crate::models::{Coordinate, FeatureCollection, MatchResponse, Matching, TravelProfile};
use crate::utils::constants::MAPBOX_MATCHING_URL;

/// Consulta lista para enviar: una coordenada y un radio por punto
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    pub profile: TravelProfile,
    pub coordinates: Vec<Coordinate>,
    pub radiuses: Vec<u32>,
}

impl MatchQuery {
    /// Construye la consulta a partir de la última línea dibujada
    pub fn from_drawing(features: &FeatureCollection, config: &MatchingConfig) -> Result<Self, TrailError> {
        let coordinates = features.last_line().ok_or(TrailError::NoDrawnRoute)?.to_vec();
        let radius = config.radius.min(MAX_MATCH_RADIUS);

        Ok(Self {
            profile: config.profile,
            radiuses: vec![radius; coordinates.len()],
            coordinates,
        })
    }

    /// `lng,lat;lng,lat;...`
    pub fn coordinates_param(&self) -> String {
        join(&self.coordinates)
    }

    /// `r;r;...`
    pub fn radiuses_param(&self) -> String {
        join(&self.radiuses)
    }

    pub fn url(&self, access_token: &str) -> String {
        format!(
            "{}/{}/{}?geometries=geojson&radiuses={}&steps=true&access_token={}",
            MAPBOX_MATCHING_URL,
            self.profile.as_str(),
            self.coordinates_param(),
            self.radiuses_param(),
            access_token
        )
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(";")
}

/// Servicio de map matching (stateless)
#[derive(Clone)]
pub struct MatchingService {
    access_token: String,
}

impl MatchingService {
    pub fn with_token(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
        }
    }

    /// Pide el ajuste y devuelve el mejor candidato
    pub async fn fetch_match(&self, query: &MatchQuery) -> Result<Matching, TrailError> {
        log::info!(
            "🛰️ Map matching: {} puntos, perfil {}",
            query.coordinates.len(),
            query.profile.as_str()
        );

        let response = Request::get(&query.url(&self.access_token)).send().await?;
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await?;

        // Los errores de la API (NoMatch, InvalidInput...) también vienen como JSON
        let parsed: MatchResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !ok => return Err(TrailError::Http { status, message: body }),
            Err(e) => return Err(e.into()),
        };

        let matching = parsed.into_best()?;
        log::info!(
            "✅ Ruta ajustada: {} puntos, {:.0} m, {:.0} s",
            matching.geometry.len(),
            matching.distance,
            matching.duration
        );
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrawnFeature, DrawnGeometry};

    fn drawing(points: usize) -> FeatureCollection {
        let coordinates = (0..points)
            .map(|i| Coordinate::new(-121.6 - i as f64 * 0.001, 36.7))
            .collect();
        FeatureCollection {
            features: vec![DrawnFeature {
                id: Some("line".to_string()),
                geometry: DrawnGeometry::LineString { coordinates },
            }],
        }
    }

    #[test]
    fn test_one_radius_per_coordinate() {
        let config = MatchingConfig::default();
        let query = MatchQuery::from_drawing(&drawing(7), &config).unwrap();
        assert_eq!(query.radiuses.len(), 7);
        assert!(query.radiuses.iter().all(|&r| r == config.radius));
    }

    #[test]
    fn test_radius_is_clamped() {
        let config = MatchingConfig { profile: TravelProfile::Cycling, radius: 80 };
        let query = MatchQuery::from_drawing(&drawing(2), &config).unwrap();
        assert_eq!(query.radiuses, vec![50, 50]);
        assert_eq!(query.profile, TravelProfile::Cycling);
    }

    #[test]
    fn test_empty_drawing_is_rejected() {
        let result = MatchQuery::from_drawing(&FeatureCollection::default(), &MatchingConfig::default());
        assert_eq!(result.unwrap_err(), TrailError::NoDrawnRoute);
    }

    #[test]
    fn test_query_url() {
        let query = MatchQuery {
            profile: TravelProfile::Walking,
            coordinates: vec![Coordinate::new(-121.608704, 36.703205), Coordinate::new(-121.61, 36.71)],
            radiuses: vec![25, 25],
        };
        assert_eq!(
            query.url("pk.test"),
            "https://api.mapbox.com/matching/v5/mapbox/walking/-121.608704,36.703205;-121.61,36.71\
             ?geometries=geojson&radiuses=25;25&steps=true&access_token=pk.test"
        );
    }
}
