//! User-defined geofence (zone) models.
//!
//! The server identifies zones by `nombre`, so renaming a zone changes its
//! identity on the wire. Callers should treat `nombre` as an opaque key
//! between list and update/delete calls.

use serde::{Deserialize, Serialize};

/// A user-defined circular geographic region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserZone {
    /// Unique per user; acts as the zone's identifier
    pub nombre: String,
    pub lat: f64,
    pub lng: f64,
    /// Radius in meters
    pub radio: f64,
    pub tipo: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Body of `POST /user-fencing-zone`.
#[derive(Debug, Clone, Serialize)]
pub struct UserZoneRequest {
    pub nombre: String,
    pub lat: f64,
    pub lng: f64,
    pub radio: f64,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Body of `PUT /user-fencing-zone`. Only name and radius are mutable
/// under the current server contract.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneUpdateRequest {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuevo_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuevo_radio: Option<f64>,
}

/// Body of `DELETE /user-fencing-zone`.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneDeleteRequest {
    pub nombre: String,
}

/// Response envelope of `GET /user-fencing-zone`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneListResponse {
    pub zones: Vec<UserZone>,
    pub total: usize,
}

/// Tolerant acknowledgement for zone create/update responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `DELETE /user-fencing-zone`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneDeleteResponse {
    pub status: String,
    #[serde(default)]
    pub deleted: u32,
}
