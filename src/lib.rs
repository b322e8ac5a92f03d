// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Safe Routes API client: data access and caching for urban safety navigation.
//!
//! This crate owns the HTTP request lifecycle against the Safe Routes risk
//! service, the persisted auth session (bearer token + user profile), and a
//! TTL-based cache that keeps read-mostly reference data (risk snapshots,
//! official security points) usable offline.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod session;
pub mod store;
pub mod time_utils;

pub use cache::Cache;
pub use client::SafeRoutesClient;
pub use config::Config;
pub use error::ApiError;
pub use session::SessionStore;
pub use store::KvStore;
