//! User and auth session models.

use serde::{Deserialize, Serialize};

/// User profile as returned by `/login`, `/register`, and `/me`.
///
/// Immutable from the client's perspective except for `last_login`, which
/// the server controls; the client only ever replaces the profile wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub last_login: Option<String>,
    pub is_active: bool,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct UserRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: UserProfile,
}

/// Composed view of the persisted session.
#[derive(Debug, Clone)]
pub struct AuthState {
    /// True iff both a non-empty token and a decodable user are stored.
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}
