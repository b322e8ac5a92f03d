//! Official security reference data (read-only, mirrored from the server).

use serde::{Deserialize, Serialize};

/// Official security point from government open data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityPoint {
    pub lat: f64,
    pub lng: f64,
    pub risk_score: f64,
    pub localidad: String,
    pub direccion: String,
    pub source: String,
}

/// Response envelope of `GET /security-points`.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityPointsResponse {
    pub official_points: Vec<SecurityPoint>,
    pub total: usize,
    pub data_source: String,
}

/// Security equipment (CAI posts, police stations, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEquipment {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub phone: String,
    /// How much this equipment lowers nearby risk (negative modifier).
    pub risk_modifier: f64,
}

/// Response envelope of `GET /security-equipment`.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityEquipmentResponse {
    pub equipment: Vec<SecurityEquipment>,
    pub total: usize,
    pub types: Vec<String>,
}
