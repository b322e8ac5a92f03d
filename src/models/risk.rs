//! Risk snapshot and prediction models.

use serde::{Deserialize, Serialize};

/// Categorical risk level as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Bajo,
    Medio,
    Alto,
}

impl RiskLevel {
    /// Bucket a risk score: `< 0.3` Bajo, `< 0.6` Medio, else Alto.
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            RiskLevel::Bajo
        } else if score < 0.6 {
            RiskLevel::Medio
        } else {
            RiskLevel::Alto
        }
    }
}

/// One locality in a risk-map snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMapEntry {
    /// Locality name, unique within a snapshot
    pub localidad: String,
    pub lat: f64,
    pub lng: f64,
    /// Predicted risk in [0, 1]
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

/// Response envelope of `GET /risk-map`.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskMapResponse {
    pub risk_map: Vec<RiskMapEntry>,
}

/// Body of `POST /predict-risk`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRiskRequest {
    pub municipio: String,
    pub hora: u32,
    pub dia_semana: u32,
    pub mes: u32,
}

/// Single-locality risk prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub municipio: String,
    pub hora: u32,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}
