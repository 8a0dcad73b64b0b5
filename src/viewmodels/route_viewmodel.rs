// ============================================================================
// ROUTE VIEWMODEL - Dibujo → map matching → ruta + estadísticas
// ============================================================================

use crate::config::MatchingConfig;
use crate::dom::{get_element_by_id, set_inner_html};
use crate::error::TrailError;
use crate::maps::{remove_route, show_route, RouteLayerHost};
use crate::models::{FeatureCollection, Matching, TripStats};
use crate::services::{MatchQuery, MatchingService};
use crate::utils::constants::DIRECTIONS_PANEL_ID;
use crate::utils::storage::{CachedRoute, RouteCache};
use crate::views::render_directions;

/// ViewModel del flujo de captura y ajuste de rutas
#[derive(Clone)]
pub struct RouteViewModel {
    cache: RouteCache,
    matching: MatchingService,
    config: MatchingConfig,
}

impl RouteViewModel {
    pub fn new(cache: RouteCache, matching: MatchingService, config: MatchingConfig) -> Self {
        Self { cache, matching, config }
    }

    /// draw.create / draw.update: ajustar la última línea dibujada
    pub async fn update_route(
        &self,
        features: FeatureCollection,
        host: &mut dyn RouteLayerHost,
    ) -> Result<TripStats, TrailError> {
        let query = MatchQuery::from_drawing(&features, &self.config)?;
        log::info!("📐 coords: {}", query.coordinates_param());

        self.cache.clear()?;
        let matching = self.matching.fetch_match(&query).await?;

        let (stats, html) = apply_match(&matching, &self.cache, host)?;
        if let Some(panel) = get_element_by_id(DIRECTIONS_PANEL_ID) {
            set_inner_html(&panel, &html);
        } else {
            log::warn!("⚠️ No existe #{}, no se muestran las instrucciones", DIRECTIONS_PANEL_ID);
        }
        Ok(stats)
    }

    /// draw.delete: quitar la ruta ajustada
    pub fn delete_route(&self, host: &mut dyn RouteLayerHost) -> Result<(), TrailError> {
        if remove_route(host)? {
            log::info!("🗑️ Ruta eliminada del mapa");
        }
        Ok(())
    }
}

/// Guarda el ajuste en caché (geometría + estadísticas juntas), lo dibuja
/// y devuelve las estadísticas y el HTML del panel de instrucciones
pub fn apply_match(
    matching: &Matching,
    cache: &RouteCache,
    host: &mut dyn RouteLayerHost,
) -> Result<(TripStats, String), TrailError> {
    let stats = TripStats::from_metric(matching.duration, matching.distance);
    cache.store(&CachedRoute {
        geometry: matching.geometry.clone(),
        stats: stats.clone(),
    })?;

    show_route(host, &matching.geometry)?;

    let html = render_directions(matching, &stats);
    log::info!("🧭 Duración {} min, distancia {} mi", stats.duration, stats.distance);
    Ok((stats, html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::route_layer::tests::RecordingMap;
    use crate::models::MatchResponse;
    use crate::utils::storage::MemoryStore;
    use std::rc::Rc;

    fn matching() -> Matching {
        let response: MatchResponse = serde_json::from_str(
            r#"{"code": "Ok", "matchings": [{
                "geometry": {"type": "LineString", "coordinates": [[-121.6, 36.7], [-121.61, 36.71]]},
                "legs": [{"steps": [{"maneuver": {"instruction": "Head north"}}]}],
                "duration": 600.0,
                "distance": 1609.344
            }]}"#,
        )
        .unwrap();
        response.into_best().unwrap()
    }

    #[test]
    fn test_apply_match_caches_renders_and_formats() {
        let cache = RouteCache::new(Rc::new(MemoryStore::new()));
        let mut map = RecordingMap::default();

        let (stats, html) = apply_match(&matching(), &cache, &mut map).unwrap();

        assert_eq!(stats, TripStats { duration: "10.0".into(), distance: "1.00".into() });
        assert!(html.contains("<h5>- Head north</h5>"));
        assert_eq!(map.sources, vec!["route"]);

        let cached = cache.load().unwrap();
        assert_eq!(cached.geometry, matching().geometry);
        assert_eq!(cached.stats, stats);
    }

    #[test]
    fn test_second_match_replaces_route() {
        let cache = RouteCache::new(Rc::new(MemoryStore::new()));
        let mut map = RecordingMap::default();
        apply_match(&matching(), &cache, &mut map).unwrap();
        apply_match(&matching(), &cache, &mut map).unwrap();
        assert_eq!(map.sources.len(), 1);
    }

    #[test]
    fn test_delete_without_route_is_noop() {
        let vm = RouteViewModel::new(
            RouteCache::new(Rc::new(MemoryStore::new())),
            MatchingService::with_token("pk.test"),
            MatchingConfig::default(),
        );
        let mut map = RecordingMap::default();
        vm.delete_route(&mut map).unwrap();
        assert!(map.calls.is_empty());
    }
}
