// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wire and storage shapes for the Safe Routes API.
//!
//! Field names follow the server contract exactly, including the Spanish
//! names used on the wire (`localidad`, `hora`, `dia_semana`, `radio`, ...).

pub mod feedback;
pub mod risk;
pub mod route;
pub mod security;
pub mod server;
pub mod user;
pub mod zone;

pub use feedback::{
    FeedbackAck, FeedbackDeleteResponse, FeedbackUpdateRequest, UserFeedback, UserFeedbackRequest,
};
pub use risk::{PredictRiskRequest, RiskLevel, RiskMapEntry, RiskPrediction};
pub use route::{IntelligentRoute, RouteCoordinatesRequest};
pub use security::{SecurityEquipment, SecurityPoint};
pub use server::{HealthStatus, IntegrationOutcome};
pub use user::{AuthState, LoginResponse, UserLogin, UserProfile, UserRegistration};
pub use zone::{UserZone, UserZoneRequest, ZoneAck, ZoneDeleteResponse, ZoneUpdateRequest};
