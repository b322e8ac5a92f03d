// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cache-then-fallback behavior for risk snapshots and security reference
//! data: these reads must never fail, only degrade.

use chrono::Utc;
use saferoutes_client::models::risk::RiskMapEntry;
use saferoutes_client::store::keys;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::{sample_risk_map_json, test_client};

fn cached_entries_json() -> serde_json::Value {
    json!([{
        "localidad": "FONTIBON",
        "lat": 4.6680,
        "lng": -74.1460,
        "risk_score": 0.35,
        "risk_level": "Medio"
    }])
}

/// Seed a raw cache envelope with a chosen age in minutes.
async fn seed_cache(store: &saferoutes_client::KvStore, key: &str, age_minutes: i64) {
    let timestamp = Utc::now().timestamp_millis() - age_minutes * 60 * 1000;
    let envelope = json!({
        "data": cached_entries_json(),
        "timestamp": timestamp
    });
    store.set(key, &envelope.to_string()).await.unwrap();
}

#[tokio::test]
async fn test_risk_map_success_replaces_cache() {
    let (server, client, store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/risk-map"))
        .and(query_param("hora", "14"))
        .and(query_param("dia_semana", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_risk_map_json()))
        .mount(&server)
        .await;

    let entries = client.get_risk_map(Some(14), Some(2)).await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].localidad, "KENNEDY");

    // Snapshot was persisted as the most recent cache entry
    let raw = store.get(keys::RISK_MAP_CACHE).await.unwrap().unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(envelope["data"].as_array().unwrap().len(), 2);
    assert!(envelope["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_risk_map_failure_returns_fresh_cache_unchanged() {
    let (server, client, store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/risk-map"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Cache entry 30 minutes old (< 1 hour TTL)
    seed_cache(&store, keys::RISK_MAP_CACHE, 30).await;

    let entries = client.get_risk_map(Some(12), Some(1)).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].localidad, "FONTIBON");
    assert!((entries[0].risk_score - 0.35).abs() < 1e-9);
}

#[tokio::test]
async fn test_risk_map_failure_with_stale_cache_returns_static_fallback() {
    let (server, client, store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/risk-map"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Cache entry 2 hours old (>= 1 hour TTL)
    seed_cache(&store, keys::RISK_MAP_CACHE, 120).await;

    let entries = client.get_risk_map(Some(12), Some(1)).await;
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().any(|e| e.localidad == "CIUDAD BOLIVAR"));
}

#[tokio::test]
async fn test_risk_map_failure_without_cache_returns_static_fallback() {
    let (server, client, _store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/risk-map"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let entries: Vec<RiskMapEntry> = client.get_risk_map(Some(12), Some(1)).await;
    assert_eq!(entries.len(), 3);
    let bolivar = entries
        .iter()
        .find(|e| e.localidad == "CIUDAD BOLIVAR")
        .unwrap();
    assert!((bolivar.risk_score - 0.75).abs() < 1e-9);
}

#[tokio::test]
async fn test_security_points_failure_without_cache_returns_empty() {
    let (server, client, _store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/security-points"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // No static fallback for official data
    let points = client.get_security_points().await;
    assert!(points.is_empty());
}

#[tokio::test]
async fn test_security_points_success_caches_for_offline() {
    let (server, client, store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/security-points"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "official_points": [{
                "lat": 4.6097,
                "lng": -74.0817,
                "risk_score": 0.6,
                "localidad": "SANTA FE",
                "direccion": "CL 12 # 5-31",
                "source": "datos_abiertos"
            }],
            "total": 1,
            "data_source": "Secretaría de Seguridad"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let points = client.get_security_points().await;
    assert_eq!(points.len(), 1);
    assert!(store
        .get(keys::SECURITY_POINTS_CACHE)
        .await
        .unwrap()
        .is_some());

    // Backend goes away; the cached points (24h TTL) keep serving
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/security-points"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let offline = client.get_security_points().await;
    assert_eq!(offline.len(), 1);
    assert_eq!(offline[0].localidad, "SANTA FE");
}

#[tokio::test]
async fn test_security_equipment_failure_returns_empty() {
    let (server, client, _store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/security-equipment"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let equipment = client.get_security_equipment().await;
    assert!(equipment.is_empty());
}

#[tokio::test]
async fn test_security_equipment_success() {
    let (server, client, _store) = test_client().await;

    Mock::given(method("GET"))
        .and(path("/security-equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "equipment": [{
                "type": "CAI",
                "name": "CAI Chapinero",
                "lat": 4.6590,
                "lng": -74.0630,
                "address": "CR 13 # 60-20",
                "phone": "123",
                "risk_modifier": -0.15
            }],
            "total": 1,
            "types": ["CAI"]
        })))
        .mount(&server)
        .await;

    let equipment = client.get_security_equipment().await;
    assert_eq!(equipment.len(), 1);
    assert_eq!(equipment[0].kind, "CAI");
}

#[tokio::test]
async fn test_integration_success_clears_both_caches() {
    let (server, client, store) = test_client().await;

    seed_cache(&store, keys::RISK_MAP_CACHE, 1).await;
    seed_cache(&store, keys::SECURITY_POINTS_CACHE, 1).await;

    Mock::given(method("POST"))
        .and(path("/integrate-official-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Integración completada",
            "status": "success",
            "output": "1250 registros procesados"
        })))
        .mount(&server)
        .await;

    let outcome = client.integrate_official_data().await;
    assert!(outcome.success);
    assert_eq!(outcome.message, "Integración completada");

    // Both cache keys were dropped so the next read hits the network
    assert!(store.get(keys::RISK_MAP_CACHE).await.unwrap().is_none());
    assert!(store
        .get(keys::SECURITY_POINTS_CACHE)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_integration_failure_reports_without_clearing() {
    let (server, client, store) = test_client().await;

    seed_cache(&store, keys::RISK_MAP_CACHE, 1).await;

    Mock::given(method("POST"))
        .and(path("/integrate-official-data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = client.integrate_official_data().await;
    assert!(!outcome.success);
    assert!(store.get(keys::RISK_MAP_CACHE).await.unwrap().is_some());
}
