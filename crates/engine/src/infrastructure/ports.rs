//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Row-store access (could swap PostgREST -> any SQL-backed API)
//! - Auth (could swap GoTrue -> any identity provider)
//! - Draft generation (could swap the edge function -> a direct LLM call)

use async_trait::async_trait;
use serde_json::Value;

use worldsmith_domain::{ComponentId, UserId, World, WorldId};
use worldsmith_shared::DraftRequest;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    #[error("Store error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Wrap a backend failure, preserving the backend's message.
    pub fn database(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Database(format!("{context}: {err}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Auth request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid auth response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Draft service is not configured: {0}")]
    MissingCredential(String),
    #[error("Draft request failed: {0}")]
    RequestFailed(String),
    #[error("Draft service returned no content")]
    EmptyContent,
    #[error("Invalid draft response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Identity Types
// =============================================================================

/// An opaque identity from the auth boundary: an id plus a mutable
/// metadata bag (display name, notification preferences, ...).
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub id: UserId,
    pub email: String,
    pub metadata: Value,
}

/// A signed-in identity with its bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserIdentity,
    pub access_token: String,
}

// =============================================================================
// Row-store Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldRepo: Send + Sync {
    /// Worlds owned by `user`, newest-created first.
    async fn list(&self, user: UserId) -> Result<Vec<World>, RepoError>;
    async fn create(&self, fields: Value) -> Result<World, RepoError>;
    async fn update(&self, id: WorldId, fields: Value) -> Result<World, RepoError>;
    async fn delete(&self, id: WorldId) -> Result<(), RepoError>;
}

/// Raw row access for component tables. Records are JSON objects in the
/// store's row shape; typed decoding is the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentRepo: Send + Sync {
    /// Rows in `table` scoped to `world`, newest-created first.
    async fn list(&self, table: &str, world: WorldId) -> Result<Vec<Value>, RepoError>;
    async fn insert(&self, table: &str, record: Value) -> Result<Value, RepoError>;
    async fn update(&self, table: &str, id: ComponentId, fields: Value)
        -> Result<Value, RepoError>;
    async fn delete(&self, table: &str, id: ComponentId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    /// Whether `name` is already claimed by a user other than `exclude`.
    async fn display_name_taken(
        &self,
        name: &str,
        exclude: Option<UserId>,
    ) -> Result<bool, RepoError>;
    async fn upsert_display_name(&self, user: UserId, name: &str) -> Result<(), RepoError>;
}

// =============================================================================
// External Service Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
    /// Merge `metadata` into the signed-in user's metadata bag.
    async fn update_metadata(
        &self,
        access_token: &str,
        metadata: Value,
    ) -> Result<UserIdentity, AuthError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DraftPort: Send + Sync {
    /// Generate one text field from a structured request. The response is
    /// opaque: callers must not parse it beyond "non-empty string".
    async fn draft(&self, request: &DraftRequest) -> Result<String, DraftError>;
}
