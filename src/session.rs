// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth session persistence.
//!
//! The bearer token and the user profile are only ever written or cleared
//! together, so the `Authorization` header the executor sends always matches
//! the session the UI believes it has. Reads never fail loudly: a storage
//! error degrades to "no session".

use crate::error::ApiError;
use crate::models::user::{AuthState, UserProfile};
use crate::store::{keys, KvStore};

/// Persisted auth session handle.
#[derive(Clone)]
pub struct SessionStore {
    store: KvStore,
}

impl SessionStore {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Persist token and user under their fixed keys, in immediate
    /// succession. Storage failures here are real errors: a login whose
    /// session cannot be saved must not look successful.
    pub async fn store(&self, token: &str, user: &UserProfile) -> Result<(), ApiError> {
        let encoded =
            serde_json::to_string(user).map_err(|e| ApiError::Storage(e.to_string()))?;

        self.store
            .set(keys::AUTH_TOKEN, token)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        self.store
            .set(keys::AUTH_USER, &encoded)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;

        tracing::debug!(username = %user.username, "Session stored");
        Ok(())
    }

    /// Read the stored bearer token. Never errors; absent or empty tokens
    /// and storage failures all read as `None`.
    pub async fn token(&self) -> Option<String> {
        match self.store.get(keys::AUTH_TOKEN).await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(error) => {
                tracing::warn!(%error, "Failed to read stored token");
                None
            }
        }
    }

    /// Read and decode the stored user profile. `None` on absence or
    /// decode failure.
    pub async fn user(&self) -> Option<UserProfile> {
        let raw = match self.store.get(keys::AUTH_USER).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "Failed to read stored user");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "Stored user profile is not decodable");
                None
            }
        }
    }

    /// Replace only the stored profile (used after `/me`, which carries the
    /// server-controlled `last_login`).
    pub async fn update_user(&self, user: &UserProfile) -> Result<(), ApiError> {
        let encoded =
            serde_json::to_string(user).map_err(|e| ApiError::Storage(e.to_string()))?;
        self.store
            .set(keys::AUTH_USER, &encoded)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))
    }

    /// Compose the current auth state.
    pub async fn state(&self) -> AuthState {
        let token = self.token().await;
        let user = self.user().await;

        AuthState {
            is_authenticated: token.is_some() && user.is_some(),
            user,
            token,
        }
    }

    /// Remove both session keys. Best effort; invoked automatically on any
    /// observed 401 and explicitly on logout.
    pub async fn clear(&self) {
        if let Err(error) = self.store.remove(keys::AUTH_TOKEN).await {
            tracing::warn!(%error, "Failed to remove stored token");
        }
        if let Err(error) = self.store.remove(keys::AUTH_USER).await {
            tracing::warn!(%error, "Failed to remove stored user");
        }
    }
}
