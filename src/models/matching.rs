// ============================================================================
// MAP MATCHING - Modelos de la API de Mapbox (matching/v5)
// ============================================================================

use serde::{Deserialize, Serialize};

use super::LineString;
use crate::error::TrailError;

/// Perfil de desplazamiento para el ajuste de la ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelProfile {
    Walking,
    Cycling,
    Driving,
    DrivingTraffic,
}

impl TravelProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelProfile::Walking => "walking",
            TravelProfile::Cycling => "cycling",
            TravelProfile::Driving => "driving",
            TravelProfile::DrivingTraffic => "driving-traffic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "walking" => Some(TravelProfile::Walking),
            "cycling" => Some(TravelProfile::Cycling),
            "driving" => Some(TravelProfile::Driving),
            "driving-traffic" => Some(TravelProfile::DrivingTraffic),
            _ => None,
        }
    }
}

/// Respuesta completa de la API
#[derive(Debug, Clone, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub matchings: Vec<Matching>,
}

/// Un candidato de ajuste
#[derive(Debug, Clone, Deserialize)]
pub struct Matching {
    pub geometry: LineString,
    #[serde(default)]
    pub legs: Vec<Leg>,
    /// Segundos
    pub duration: f64,
    /// Metros
    pub distance: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub maneuver: Maneuver,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Maneuver {
    #[serde(default)]
    pub instruction: String,
}

impl MatchResponse {
    /// Primer candidato, o error si la API no encontró ninguno
    pub fn into_best(self) -> Result<Matching, TrailError> {
        if !self.code.is_empty() && self.code != "Ok" {
            return Err(TrailError::Matching {
                message: self.message.unwrap_or_default(),
                code: self.code,
            });
        }
        self.matchings.into_iter().next().ok_or(TrailError::NoMatch)
    }
}

impl Matching {
    /// Instrucciones de todos los tramos, en orden
    pub fn instructions(&self) -> impl Iterator<Item = &str> {
        self.legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(|step| step.maneuver.instruction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": "Ok",
        "matchings": [{
            "confidence": 0.9,
            "geometry": {"type": "LineString", "coordinates": [[-121.6, 36.7], [-121.61, 36.71]]},
            "legs": [
                {"steps": [{"maneuver": {"instruction": "Head north"}}, {"maneuver": {"instruction": "Turn left"}}]},
                {"steps": [{"maneuver": {"instruction": "You have arrived"}}]}
            ],
            "duration": 600.0,
            "distance": 1609.344
        }],
        "tracepoints": []
    }"#;

    #[test]
    fn test_best_matching_and_instructions() {
        let response: MatchResponse = serde_json::from_str(SAMPLE).unwrap();
        let matching = response.into_best().unwrap();
        assert_eq!(matching.geometry.len(), 2);
        let steps: Vec<&str> = matching.instructions().collect();
        assert_eq!(steps, vec!["Head north", "Turn left", "You have arrived"]);
    }

    #[test]
    fn test_error_code_is_reported() {
        let response: MatchResponse = serde_json::from_str(
            r#"{"code": "NoSegment", "message": "Could not find a matching segment"}"#,
        )
        .unwrap();
        match response.into_best() {
            Err(TrailError::Matching { code, message }) => {
                assert_eq!(code, "NoSegment");
                assert_eq!(message, "Could not find a matching segment");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_matchings_is_no_match() {
        let response: MatchResponse = serde_json::from_str(r#"{"code": "Ok", "matchings": []}"#).unwrap();
        assert_eq!(response.into_best().unwrap_err(), TrailError::NoMatch);
    }

    #[test]
    fn test_profile_round_trip() {
        assert_eq!(TravelProfile::parse("driving-traffic"), Some(TravelProfile::DrivingTraffic));
        assert_eq!(TravelProfile::Walking.as_str(), "walking");
        assert_eq!(TravelProfile::parse("boat"), None);
    }
}
