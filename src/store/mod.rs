//! Local key-value storage layer.

pub mod kv;

pub use kv::{KvStore, StoreError};

/// Storage keys as constants.
pub mod keys {
    pub const AUTH_TOKEN: &str = "auth_token";
    pub const AUTH_USER: &str = "auth_user";
    /// Most recent risk-map snapshot (cache envelope)
    pub const RISK_MAP_CACHE: &str = "risk_map_cache";
    /// Official security points (cache envelope)
    pub const SECURITY_POINTS_CACHE: &str = "security_points_cache";
}
