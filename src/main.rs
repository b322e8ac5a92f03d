// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Safe Routes connectivity probe.
//!
//! Loads the client configuration, checks backend health, and fetches the
//! current risk-map snapshot. Useful for verifying a deployment target and
//! for warming the offline cache.

use saferoutes_client::{config::Config, store::KvStore, SafeRoutesClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(base_url = %config.base_url, "Safe Routes client starting");

    let store = match &config.storage_dir {
        Some(dir) => KvStore::open(dir).await?,
        None => KvStore::in_memory(),
    };
    let client = SafeRoutesClient::new(&config, store);

    match client.health_check().await {
        Some(health) => tracing::info!(
            api = %health.api_status,
            model = %health.model_status,
            security_data = %health.security_data_status,
            municipios = health.municipios_disponibles,
            "Backend healthy"
        ),
        None => {
            tracing::error!("Backend unreachable");
            std::process::exit(1);
        }
    }

    let risk_map = client.get_risk_map(None, None).await;
    tracing::info!(localities = risk_map.len(), "Risk map loaded");
    for entry in &risk_map {
        tracing::info!(
            localidad = %entry.localidad,
            risk = entry.risk_score,
            level = ?entry.risk_level,
            "Locality risk"
        );
    }

    Ok(())
}

/// Initialize tracing with an env-filterable subscriber.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("saferoutes_client=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
