use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, TravelProfile};

/// Radio máximo que acepta la API de map matching (metros)
pub const MAX_MATCH_RADIUS: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub mapbox_access_token: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub matching_config: MatchingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            mapbox_access_token: String::new(),
            enable_logging: true,
            map_config: MapConfig::default(),
            matching_config: MatchingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub style: String,
    pub default_center_lng: f64,
    pub default_center_lat: f64,
    pub default_zoom: f64,
    pub geolocation_timeout_ms: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: "mapbox://styles/mapbox/streets-v11".to_string(),
            default_center_lng: -121.608704,
            default_center_lat: 36.703205,
            default_zoom: 14.0,
            geolocation_timeout_ms: 500,
        }
    }
}

impl MapConfig {
    /// Centro de respaldo cuando no hay geolocalización
    pub fn fallback_center(&self) -> Coordinate {
        Coordinate::new(self.default_center_lng, self.default_center_lat)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub profile: TravelProfile,
    /// Radio de búsqueda por coordenada, 1-10 para trazas limpias, 20-50 para trazas ruidosas
    pub radius: u32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            profile: TravelProfile::Walking,
            radius: 25,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            mapbox_access_token: option_env!("MAPBOX_ACCESS_TOKEN")
                .unwrap_or("").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            map_config: MapConfig {
                style: option_env!("MAP_STYLE")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.style),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_center_lng),
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_center_lat),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.default_zoom),
                geolocation_timeout_ms: option_env!("GEOLOCATION_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.geolocation_timeout_ms),
            },
            matching_config: MatchingConfig {
                profile: option_env!("MATCH_PROFILE")
                    .and_then(TravelProfile::parse)
                    .unwrap_or(defaults.matching_config.profile),
                radius: option_env!("MATCH_RADIUS")
                    .and_then(|v| v.parse().ok())
                    .map(|r: u32| r.min(MAX_MATCH_RADIUS))
                    .unwrap_or(defaults.matching_config.radius),
            },
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_center_is_fallback_location() {
        let center = MapConfig::default().fallback_center();
        assert_eq!(center.lng, -121.608704);
        assert_eq!(center.lat, 36.703205);
    }

    #[test]
    fn test_default_matching_config() {
        let config = MatchingConfig::default();
        assert_eq!(config.profile, TravelProfile::Walking);
        assert_eq!(config.radius, 25);
        assert!(config.radius <= MAX_MATCH_RADIUS);
    }
}
