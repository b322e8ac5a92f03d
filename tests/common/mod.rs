// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use saferoutes_client::config::Config;
use saferoutes_client::store::KvStore;
use saferoutes_client::SafeRoutesClient;
use serde_json::json;
use wiremock::MockServer;

/// Create a client against a fresh mock server with in-memory storage.
/// Returns the store handle too so tests can seed or inspect raw entries.
#[allow(dead_code)]
pub async fn test_client() -> (MockServer, SafeRoutesClient, KvStore) {
    // Unpooled server: `MockServer::start()` returns pooled servers that keep
    // listening after drop, so dropping one would not free the port.
    let server = MockServer::builder().start().await;
    let config = Config {
        base_url: server.uri(),
        storage_dir: None,
    };
    let store = KvStore::in_memory();
    let client = SafeRoutesClient::new(&config, store.clone());
    (server, client, store)
}

/// A user profile body as the server would return it.
#[allow(dead_code)]
pub fn sample_user_json() -> serde_json::Value {
    json!({
        "username": "mrodriguez",
        "email": "mrodriguez@example.com",
        "full_name": "Maria Rodriguez",
        "phone": "3001234567",
        "created_at": "2026-01-10T08:30:00",
        "last_login": "2026-08-20T19:05:00",
        "is_active": true
    })
}

/// A successful login response for `sample_user_json`.
#[allow(dead_code)]
pub fn sample_login_json(token: &str) -> serde_json::Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": sample_user_json()
    })
}

/// A two-locality risk map response.
#[allow(dead_code)]
pub fn sample_risk_map_json() -> serde_json::Value {
    json!({
        "risk_map": [
            {
                "localidad": "KENNEDY",
                "lat": 4.6280,
                "lng": -74.1460,
                "risk_score": 0.42,
                "risk_level": "Medio"
            },
            {
                "localidad": "SUBA",
                "lat": 4.7560,
                "lng": -74.0840,
                "risk_score": 0.16,
                "risk_level": "Bajo"
            }
        ],
        "hora": 12,
        "dia_semana": 1
    })
}
