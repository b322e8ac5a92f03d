// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Offline fallback data: static risk estimates used when the prediction
//! service is unreachable and no fresh cache exists.

use crate::models::risk::{RiskLevel, RiskMapEntry, RiskPrediction};

/// Added to the base risk during the night window, capped at 1.0.
const NIGHT_PENALTY: f64 = 0.2;

/// Base risk for localities missing from the table.
const DEFAULT_BASE_RISK: f64 = 0.30;

/// Night window: 20:00 through 06:00 inclusive.
pub fn is_night(hora: u32) -> bool {
    hora >= 20 || hora <= 6
}

/// Known per-locality base risks (Bogotá localities, historical averages).
fn base_risk(municipio: &str) -> f64 {
    match municipio.to_uppercase().as_str() {
        "CIUDAD BOLIVAR" => 0.75,
        "SAN CRISTOBAL" => 0.55,
        "USME" => 0.48,
        "RAFAEL URIBE URIBE" => 0.50,
        "USAQUEN" => 0.15,
        "CHAPINERO" => 0.18,
        "SUBA" => 0.16,
        _ => DEFAULT_BASE_RISK,
    }
}

/// Locally computed risk estimate: table base risk plus the nocturnal
/// penalty, bucketed into the standard levels.
pub fn heuristic_prediction(municipio: &str, hora: u32) -> RiskPrediction {
    let mut risk = base_risk(municipio);
    if is_night(hora) {
        risk += NIGHT_PENALTY;
    }
    let risk = risk.min(1.0);

    RiskPrediction {
        municipio: municipio.to_string(),
        hora,
        risk_score: risk,
        risk_level: RiskLevel::from_score(risk),
    }
}

/// Minimal static risk map returned when both the network and the cache
/// fail. A handful of known localities so the map never renders empty.
pub fn fallback_risk_map() -> Vec<RiskMapEntry> {
    vec![
        RiskMapEntry {
            localidad: "USAQUEN".to_string(),
            lat: 4.7030,
            lng: -74.0350,
            risk_score: 0.15,
            risk_level: RiskLevel::Bajo,
        },
        RiskMapEntry {
            localidad: "CHAPINERO".to_string(),
            lat: 4.6590,
            lng: -74.0630,
            risk_score: 0.18,
            risk_level: RiskLevel::Bajo,
        },
        RiskMapEntry {
            localidad: "CIUDAD BOLIVAR".to_string(),
            lat: 4.4940,
            lng: -74.1430,
            risk_score: 0.75,
            risk_level: RiskLevel::Alto,
        },
    ]
}
