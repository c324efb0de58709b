//! GoTrue auth client.
//!
//! Email + password flows against the auth service: sign-in, sign-up,
//! sign-out, password recovery, and metadata updates. The engine treats
//! the result purely as "current acting identity" plus an opaque metadata
//! bag; no auth logic lives in-process.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use worldsmith_domain::UserId;

use crate::infrastructure::ports::{AuthError, AuthPort, AuthSession, UserIdentity};

pub struct GoTrueClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoTrueClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create client from `WORLDSMITH_STORE_URL` / `WORLDSMITH_STORE_ANON_KEY`;
    /// the auth service shares the store's host and key.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("WORLDSMITH_STORE_URL").unwrap_or_else(|_| "http://localhost:54321".into());
        let api_key = std::env::var("WORLDSMITH_STORE_ANON_KEY").unwrap_or_default();
        Self::new(&base_url, &api_key)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn session_from(response: reqwest::Response) -> Result<AuthSession, AuthError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        match status {
            StatusCode::OK => {
                let token: TokenResponse = serde_json::from_str(&body)
                    .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
                Ok(AuthSession {
                    user: token.user.into_identity()?,
                    access_token: token.access_token,
                })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::debug!(%status, "credential rejection from auth service");
                Err(AuthError::InvalidCredentials)
            }
            _ => Err(AuthError::RequestFailed(format!("{status}: {body}"))),
        }
    }
}

#[async_trait]
impl AuthPort for GoTrueClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        Self::session_from(response).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(self.auth_url("signup"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        Self::session_from(response).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.auth_url("logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::RequestFailed(response.status().to_string()))
        }
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.auth_url("recover"))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::RequestFailed(response.status().to_string()))
        }
    }

    async fn update_metadata(
        &self,
        access_token: &str,
        metadata: Value,
    ) -> Result<UserIdentity, AuthError> {
        let response = self
            .client
            .put(self.auth_url("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "data": metadata }))
            .send()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::RequestFailed(format!("{status}: {body}")));
        }

        let user: ApiUser = serde_json::from_str(&body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        user.into_identity()
    }
}

// =============================================================================
// GoTrue API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<Value>,
}

impl ApiUser {
    fn into_identity(self) -> Result<UserIdentity, AuthError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| AuthError::InvalidResponse(format!("bad user id: {e}")))?;
        Ok(UserIdentity {
            id: UserId::from_uuid(id),
            email: self.email.unwrap_or_default(),
            metadata: self.user_metadata.unwrap_or(Value::Null),
        })
    }
}
