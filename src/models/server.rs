//! Server status and administrative models.

use serde::Deserialize;

/// Detailed health status from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub api_status: String,
    pub model_status: String,
    pub security_data_status: String,
    pub municipios_disponibles: u32,
    pub data_directory: String,
}

/// Raw response of `POST /integrate-official-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationResponse {
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Caller-facing outcome of the data-integration action.
#[derive(Debug, Clone)]
pub struct IntegrationOutcome {
    pub success: bool,
    pub message: String,
}
