//! Intelligent (risk-weighted) route models.

use serde::{Deserialize, Serialize};

/// Body of `POST /intelligent-route-coordinates`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteCoordinatesRequest {
    pub origen_lat: f64,
    pub origen_lng: f64,
    pub destino_lat: f64,
    pub destino_lng: f64,
    pub hora: u32,
    pub dia_semana: u32,
    /// Route preference (e.g. "segura", "rapida")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferencia: Option<String>,
    /// How strongly risk weighs against distance, in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensibilidad_riesgo: Option<f64>,
}

/// One waypoint along the computed route.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub risk_score: f64,
    pub zone_type: String,
    pub municipio: String,
}

/// Per-segment statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteSegment {
    pub distance_km: f64,
    pub time_minutes: f64,
    pub risk_score: f64,
    pub start_coords: [f64; 2],
    pub end_coords: [f64; 2],
    pub start_zone: String,
    pub end_zone: String,
}

/// Aggregate route statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteStatistics {
    pub total_distance: f64,
    pub total_time: f64,
    pub average_risk: f64,
    pub maximum_risk: f64,
    pub minimum_risk: f64,
    pub risk_variance: f64,
    pub safety_score: f64,
    pub segments: Vec<RouteSegment>,
    pub waypoints_count: usize,
    pub route_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Risk assessment of the route's origin or destination.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteEndpointInfo {
    pub municipio: String,
    pub zone_type: String,
    pub risk_score: f64,
    pub coordinates: Coordinates,
}

/// Response of `POST /intelligent-route-coordinates`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntelligentRoute {
    pub route_points: Vec<RoutePoint>,
    pub statistics: RouteStatistics,
    pub recommendations: Vec<String>,
    pub origin_info: RouteEndpointInfo,
    pub destination_info: RouteEndpointInfo,
}
