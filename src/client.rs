// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Safe Routes API client.
//!
//! Handles:
//! - Request execution with bearer-token attachment
//! - Error classification (validation / session-expired / network)
//! - Automatic session clear on any observed 401
//! - Per-endpoint offline fallback (cache, heuristic, or none)

use crate::cache::{Cache, RISK_MAP_TTL, SECURITY_POINTS_TTL};
use crate::config::Config;
use crate::error::ApiError;
use crate::fallback;
use crate::models::feedback::{
    FeedbackAck, FeedbackDeleteRequest, FeedbackDeleteResponse, FeedbackListResponse,
    FeedbackUpdateRequest, UserFeedback, UserFeedbackRequest,
};
use crate::models::risk::{PredictRiskRequest, RiskMapEntry, RiskMapResponse, RiskPrediction};
use crate::models::route::{IntelligentRoute, RouteCoordinatesRequest};
use crate::models::security::{
    SecurityEquipment, SecurityEquipmentResponse, SecurityPoint, SecurityPointsResponse,
};
use crate::models::server::{HealthStatus, IntegrationOutcome, IntegrationResponse};
use crate::models::user::{AuthState, LoginResponse, UserLogin, UserProfile, UserRegistration};
use crate::models::zone::{
    UserZone, UserZoneRequest, ZoneAck, ZoneDeleteRequest, ZoneDeleteResponse, ZoneListResponse,
    ZoneUpdateRequest,
};
use crate::session::SessionStore;
use crate::store::{keys, KvStore};
use crate::time_utils;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Safe Routes API client.
///
/// Cheap to clone; the session and cache share one key-value store, so
/// every clone observes the same auth state.
#[derive(Clone)]
pub struct SafeRoutesClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    cache: Cache,
}

impl SafeRoutesClient {
    /// Create a client against the configured base URL, persisting session
    /// and cache data through `store`.
    pub fn new(config: &Config, store: KvStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: SessionStore::new(store.clone()),
            cache: Cache::new(store),
        }
    }

    /// Access the underlying session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Access the underlying cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // ─── Request Executor ────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the stored bearer token, if any, then send and decode.
    ///
    /// All failure modes collapse into [`ApiError`]; a 401 clears the
    /// session before the error is surfaced so no later request can reuse
    /// a dead token.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let builder = match self.session.token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status == StatusCode::UNAUTHORIZED {
                self.session.clear().await;
                tracing::info!("Received 401, session cleared");
                return Err(ApiError::SessionExpired);
            }

            return Err(ApiError::from_response(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET with query parameters.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "API request");
        let mut builder = self.http.get(self.url(path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(builder).await
    }

    /// Non-GET with a JSON body (DELETE endpoints here carry bodies too).
    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, path, "API request");
        let builder = self.http.request(method, self.url(path)).json(body);
        self.execute(builder).await
    }

    // ─── Risk Data (cache / heuristic fallback, never errors) ───────────

    /// Fetch the risk-map snapshot for an hour/day pair (defaults: now).
    ///
    /// On failure returns the cached snapshot if younger than one hour,
    /// else the static fallback dataset.
    pub async fn get_risk_map(
        &self,
        hora: Option<u32>,
        dia_semana: Option<u32>,
    ) -> Vec<RiskMapEntry> {
        let hora = hora.unwrap_or_else(time_utils::current_hour);
        let dia_semana = dia_semana.unwrap_or_else(time_utils::current_weekday);
        let query = [
            ("hora", hora.to_string()),
            ("dia_semana", dia_semana.to_string()),
        ];

        match self.get_json::<RiskMapResponse>("/risk-map", &query).await {
            Ok(response) => {
                self.cache.put(keys::RISK_MAP_CACHE, &response.risk_map).await;
                response.risk_map
            }
            Err(error) => {
                tracing::warn!(%error, "Risk map fetch failed, using cached data");
                match self.cache.get(keys::RISK_MAP_CACHE, RISK_MAP_TTL).await {
                    Some(entries) => entries,
                    None => fallback::fallback_risk_map(),
                }
            }
        }
    }

    /// Predict risk for one locality (hour/day default to now).
    ///
    /// On failure computes a local heuristic estimate instead of erroring.
    pub async fn predict_risk(
        &self,
        municipio: &str,
        hora: Option<u32>,
        dia_semana: Option<u32>,
    ) -> RiskPrediction {
        let hora = hora.unwrap_or_else(time_utils::current_hour);
        let request = PredictRiskRequest {
            municipio: municipio.to_string(),
            hora,
            dia_semana: dia_semana.unwrap_or_else(time_utils::current_weekday),
            mes: time_utils::current_month(),
        };

        match self
            .send_json(Method::POST, "/predict-risk", &request)
            .await
        {
            Ok(prediction) => prediction,
            Err(error) => {
                tracing::warn!(%error, municipio, "Risk prediction failed, using heuristic");
                fallback::heuristic_prediction(municipio, hora)
            }
        }
    }

    // ─── Security Reference Data (cache fallback, never errors) ─────────

    /// Fetch official security points; cached for 24 hours.
    ///
    /// On failure returns the cached points if fresh, else an empty list
    /// (there is no static fallback for official data).
    pub async fn get_security_points(&self) -> Vec<SecurityPoint> {
        match self
            .get_json::<SecurityPointsResponse>("/security-points", &[])
            .await
        {
            Ok(response) => {
                tracing::info!(
                    total = response.total,
                    source = %response.data_source,
                    "Official security points loaded"
                );
                self.cache
                    .put(keys::SECURITY_POINTS_CACHE, &response.official_points)
                    .await;
                response.official_points
            }
            Err(error) => {
                tracing::warn!(%error, "Security points fetch failed, using cached data");
                self.cache
                    .get(keys::SECURITY_POINTS_CACHE, SECURITY_POINTS_TTL)
                    .await
                    .unwrap_or_default()
            }
        }
    }

    /// Fetch security equipment (CAI posts, police stations).
    /// Not cached; an empty list on failure.
    pub async fn get_security_equipment(&self) -> Vec<SecurityEquipment> {
        match self
            .get_json::<SecurityEquipmentResponse>("/security-equipment", &[])
            .await
        {
            Ok(response) => {
                tracing::info!(
                    total = response.total,
                    types = ?response.types,
                    "Security equipment loaded"
                );
                response.equipment
            }
            Err(error) => {
                tracing::warn!(%error, "Security equipment fetch failed");
                Vec::new()
            }
        }
    }

    /// Trigger the server-side integration of official security data.
    ///
    /// On server-reported success the local caches are cleared so the next
    /// read hits the network. Failures fold into `success = false`.
    pub async fn integrate_official_data(&self) -> IntegrationOutcome {
        let result: Result<IntegrationResponse, ApiError> = self
            .send_json(Method::POST, "/integrate-official-data", &serde_json::json!({}))
            .await;

        match result {
            Ok(response) => {
                let success = response.status == "success";
                if success {
                    self.cache
                        .clear_all(&[keys::RISK_MAP_CACHE, keys::SECURITY_POINTS_CACHE])
                        .await;
                    tracing::info!("Official data integrated, caches cleared");
                }
                IntegrationOutcome {
                    success,
                    message: response.message,
                }
            }
            Err(error) => IntegrationOutcome {
                success: false,
                message: error.to_string(),
            },
        }
    }

    // ─── Server Status ───────────────────────────────────────────────────

    /// Detailed backend health check. `None` when unreachable.
    pub async fn health_check(&self) -> Option<HealthStatus> {
        match self.get_json("/health", &[]).await {
            Ok(health) => Some(health),
            Err(error) => {
                tracing::warn!(%error, "Health check failed");
                None
            }
        }
    }

    /// Whether the backend reports official security data as loaded.
    pub async fn has_official_data(&self) -> bool {
        self.health_check()
            .await
            .map(|h| h.security_data_status.contains("oficiales"))
            .unwrap_or(false)
    }

    /// Root API info object (arbitrary shape).
    pub async fn api_info(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/", &[]).await
    }

    // ─── Auth (authoritative, errors propagate) ─────────────────────────

    /// Register a new account. The caller still needs to log in afterwards.
    pub async fn register(&self, registration: &UserRegistration) -> Result<UserProfile, ApiError> {
        self.send_json(Method::POST, "/register", registration).await
    }

    /// Log in and persist the session (token and user stored together).
    pub async fn login(&self, credentials: &UserLogin) -> Result<UserProfile, ApiError> {
        let response: LoginResponse = self.send_json(Method::POST, "/login", credentials).await?;
        self.session
            .store(&response.access_token, &response.user)
            .await?;
        tracing::info!(username = %response.user.username, "Logged in");
        Ok(response.user)
    }

    /// Clear the persisted session. No network call.
    pub async fn logout(&self) {
        self.session.clear().await;
        tracing::info!("Logged out");
    }

    /// Check the stored token against the server.
    ///
    /// Any failure (network included) clears the session and reports
    /// invalid; a 401 would have cleared it in the executor anyway.
    pub async fn validate_token(&self) -> bool {
        match self
            .get_json::<serde_json::Value>("/validate-token", &[])
            .await
        {
            Ok(_) => true,
            Err(error) => {
                tracing::info!(%error, "Token validation failed, clearing session");
                self.session.clear().await;
                false
            }
        }
    }

    /// Fetch the current user from `/me` and refresh the stored profile
    /// (picks up the server-controlled `last_login`).
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let user: UserProfile = self.get_json("/me", &[]).await?;
        if let Err(error) = self.session.update_user(&user).await {
            tracing::warn!(%error, "Failed to refresh stored profile");
        }
        Ok(user)
    }

    /// Compose the locally persisted auth state. No network call.
    pub async fn auth_state(&self) -> AuthState {
        self.session.state().await
    }

    // ─── Zones (authoritative, errors propagate, never cached) ──────────

    pub async fn create_zone(&self, zone: &UserZoneRequest) -> Result<ZoneAck, ApiError> {
        self.send_json(Method::POST, "/user-fencing-zone", zone).await
    }

    pub async fn list_zones(&self) -> Result<Vec<UserZone>, ApiError> {
        let response: ZoneListResponse = self.get_json("/user-fencing-zone", &[]).await?;
        Ok(response.zones)
    }

    pub async fn update_zone(&self, update: &ZoneUpdateRequest) -> Result<ZoneAck, ApiError> {
        self.send_json(Method::PUT, "/user-fencing-zone", update).await
    }

    /// Delete a zone by name; the response reports how many were removed.
    pub async fn delete_zone(&self, nombre: &str) -> Result<ZoneDeleteResponse, ApiError> {
        let request = ZoneDeleteRequest {
            nombre: nombre.to_string(),
        };
        self.send_json(Method::DELETE, "/user-fencing-zone", &request)
            .await
    }

    // ─── Feedback (authoritative, errors propagate, never cached) ───────

    pub async fn create_feedback(
        &self,
        feedback: &UserFeedbackRequest,
    ) -> Result<FeedbackAck, ApiError> {
        self.send_json(Method::POST, "/user-feedback-crime", feedback)
            .await
    }

    pub async fn list_feedback(&self) -> Result<Vec<UserFeedback>, ApiError> {
        let response: FeedbackListResponse = self.get_json("/user-feedback-crime", &[]).await?;
        Ok(response.feedbacks)
    }

    pub async fn update_feedback(
        &self,
        update: &FeedbackUpdateRequest,
    ) -> Result<FeedbackAck, ApiError> {
        self.send_json(Method::PUT, "/user-feedback-crime", update)
            .await
    }

    /// Delete a feedback entry by its creation timestamp.
    pub async fn delete_feedback(
        &self,
        timestamp: &str,
    ) -> Result<FeedbackDeleteResponse, ApiError> {
        let request = FeedbackDeleteRequest {
            timestamp: timestamp.to_string(),
        };
        self.send_json(Method::DELETE, "/user-feedback-crime", &request)
            .await
    }

    // ─── Routing (authoritative, errors propagate) ──────────────────────

    /// Request a risk-weighted route between two coordinates.
    pub async fn intelligent_route(
        &self,
        request: &RouteCoordinatesRequest,
    ) -> Result<IntelligentRoute, ApiError> {
        self.send_json(Method::POST, "/intelligent-route-coordinates", request)
            .await
    }
}
